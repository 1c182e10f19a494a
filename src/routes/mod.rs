// ABOUTME: Route module organization for the registry HTTP API
// ABOUTME: Exposes per-domain routers that the server merges into one application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Liveness and readiness endpoints
pub mod health;
/// Restaurant submission, search and catalog endpoints
pub mod restaurants;

pub use health::HealthRoutes;
pub use restaurants::RestaurantRoutes;
