// ABOUTME: Shared server resources created once at startup and injected into every router
// ABOUTME: Holds the store handle and configuration, and builds services on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::ServerConfig;
use crate::database_plugins::factory::Database;
use crate::database_plugins::RestaurantStore;
use crate::services::{SearchService, SubmissionService};
use std::sync::Arc;

/// Process-wide state shared by handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Store handle
    pub store: Arc<dyn RestaurantStore>,
    /// Human-readable backend name for logs
    pub backend_info: &'static str,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap a freshly created store and configuration
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let backend_info = database.backend_info();
        Self {
            store: Arc::new(database),
            backend_info,
            config,
        }
    }

    /// Use an arbitrary store implementation
    #[must_use]
    pub fn with_store(store: Arc<dyn RestaurantStore>, config: Arc<ServerConfig>) -> Self {
        Self {
            store,
            backend_info: "custom",
            config,
        }
    }

    /// Submission service over the shared store
    #[must_use]
    pub fn submission_service(&self) -> SubmissionService {
        SubmissionService::new(Arc::clone(&self.store))
    }

    /// Search service over the shared store
    #[must_use]
    pub fn search_service(&self) -> SearchService {
        SearchService::new(Arc::clone(&self.store))
    }
}
