// ABOUTME: Core data models for the Oilwatch registry
// ABOUTME: Oil type enumeration, risk classification, and restaurant record shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain models
//!
//! Data-only types: nothing here performs I/O. Serialized field names follow the
//! camelCase JSON contract of the HTTP API.

/// Closed enumeration of the cooking-oil labels a restaurant may declare
pub mod oil;
/// Restaurant records as stored and as returned from search
pub mod restaurant;
/// Allergy-risk tiers and the `classify` function
pub mod risk;

pub use oil::OilType;
pub use restaurant::{NewRestaurant, RestaurantRecord, RestaurantWithRisk};
pub use risk::{classify, RiskAssessment, RiskColor, RiskLevel};
