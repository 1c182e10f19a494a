// ABOUTME: Server-side constants and environment variable accessors
// ABOUTME: Re-exports the core constants and adds env-driven defaults for the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Domain constants live in `oilwatch_core::constants`; this module re-exports
//! them and adds the environment lookups used when building `ServerConfig`.

pub use oilwatch_core::constants::{messages, risk_messages, self_test, service_names};

use std::env;

/// Compile-time defaults
pub mod defaults {
    /// HTTP port when `HTTP_PORT` is unset
    pub const HTTP_PORT: u16 = 8080;
    /// Bind address when `HOST` is unset
    pub const HOST: &str = "0.0.0.0";
    /// Store location when `DATABASE_URL` is unset
    pub const DATABASE_URL: &str = "sqlite:./data/oilwatch.db";
    /// Pool size for file-backed `SQLite`
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// Seconds to wait for a pooled connection
    pub const DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    /// Seconds any single store call may take
    pub const DATABASE_OPERATION_TIMEOUT_SECS: u64 = 10;
    /// Allow every origin unless told otherwise
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment-based configuration lookups
pub mod env_config {
    use super::{defaults, env};

    /// Bind address from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::HOST.to_owned())
    }

    /// Deployment environment name
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned())
    }

    /// Store URL from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.to_owned())
    }

    /// Comma separated list of allowed origins, or `*`
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.to_owned())
    }
}
