// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Risk messages, validation messages, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat file.

/// Human-readable explanation attached to each risk tier
pub mod risk_messages {
    /// Peanut oil
    pub const HIGH: &str =
        "High Risk - Restaurant uses peanut oil. Avoid if you have a peanut allergy.";
    /// Vegetable or mixed oil
    pub const MEDIUM: &str = "Medium Risk - Restaurant uses vegetable or mixed oil. Exercise caution if you have multiple allergies.";
    /// Oils with lower allergenic potential
    pub const LOW: &str = "Low Risk - Restaurant uses oils with lower allergenic potential.";
    /// Anything not in the catalog
    pub const UNKNOWN: &str =
        "Unknown Risk - Oil type not recognized. Please verify with the restaurant.";
}

/// User-facing messages for the registry endpoints
pub mod messages {
    /// Returned alongside an empty result list
    pub const NO_MATCHES: &str = "No restaurants found matching the search criteria";
    /// Returned by the self-test route
    pub const SELF_TEST_OK: &str = "Model works!";
}

/// Values used by the store smoke test
pub mod self_test {
    /// Name of the record the self test creates
    pub const RESTAURANT_NAME: &str = "Test Diner";
    /// Oil type of the record the self test creates
    pub const OIL_TYPE: &str = "Canola";
}

/// Service identity
pub mod service_names {
    /// Name used in logs and health payloads
    pub const OILWATCH_SERVER: &str = "oilwatch-server";
}
