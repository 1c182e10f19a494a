// ABOUTME: Configuration module for the registry server
// ABOUTME: Environment-driven server settings and store connection settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Store URL and pool settings
pub mod database;
/// Server-wide configuration loaded from the environment
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{AppBehaviorConfig, CorsConfig, Environment, ServerConfig};
