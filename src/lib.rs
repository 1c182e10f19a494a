// ABOUTME: Main library entry point for the Oilwatch restaurant registry server
// ABOUTME: Restaurant submission and name search with cooking-oil allergy risk annotation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Oilwatch Server
//!
//! An HTTP service where users register restaurants along with the cooking
//! oil they use, and search registered restaurants by name. Every search hit
//! carries an allergy-risk verdict derived from its oil type.
//!
//! ## Architecture
//!
//! - **Core** (`oilwatch-core`): oil catalog, risk classifier, record types, errors
//! - **Stores** (`database_plugins`): `SQLite` and in-memory backends behind `RestaurantStore`
//! - **Services**: submission validation, search ordering and annotation
//! - **Routes**: axum routers, assembled with middleware in `server`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use oilwatch_server::config::ServerConfig;
//! use oilwatch_server::database_plugins::factory::Database;
//! use oilwatch_server::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database).await?;
//!     let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
//!     oilwatch_server::server::serve(resources).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Environment lookups and defaults
pub mod constants;

/// Store abstraction and backends
pub mod database_plugins;

/// Error types shared with the core crate
pub mod errors;

/// Logging setup and structured helpers
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared state injected into routers
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Domain services
pub mod services;

pub use oilwatch_core::models;
