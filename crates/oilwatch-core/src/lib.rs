// ABOUTME: Core types and constants for the Oilwatch restaurant registry
// ABOUTME: Foundation crate with error handling, oil types, risk classification, and record models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Oilwatch Core
//!
//! Foundation crate providing shared types for the Oilwatch registry. It holds
//! everything that does not touch I/O, so it changes rarely and compiles once.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`ErrorCode` for HTTP, `RegistryError` for services,
//!   `DatabaseError` for stores
//! - **constants**: Fixed messages and defaults
//! - **models**: `OilType`, `RiskLevel`/`RiskAssessment` and the `classify`
//!   function, restaurant record shapes

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (oil types, risk assessment, restaurant records)
pub mod models;
