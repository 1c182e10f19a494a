// ABOUTME: Restaurant submission logic: validate the fields, then persist exactly one record
// ABOUTME: Validation failures never reach the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database_plugins::RestaurantStore;
use crate::logging::AppLogger;
use chrono::{DateTime, Utc};
use oilwatch_core::errors::RegistryError;
use oilwatch_core::models::{NewRestaurant, RestaurantRecord};
use std::sync::Arc;
use tracing::error;

/// Creates restaurant records
#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn RestaurantStore>,
}

impl SubmissionService {
    /// Service over the given store
    #[must_use]
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    /// Register a restaurant submitted now
    ///
    /// # Errors
    ///
    /// See [`Self::submit_at`]
    pub async fn submit(
        &self,
        name: &str,
        oil_type: &str,
    ) -> Result<RestaurantRecord, RegistryError> {
        self.submit_at(name, oil_type, None).await
    }

    /// Register a restaurant with an explicit submission date
    ///
    /// No deduplication: submitting the same name twice creates two records.
    ///
    /// # Errors
    ///
    /// `MissingField` or `InvalidOilType` when validation fails (the store is
    /// not touched), `StoreUnavailable` or `StoreOperationFailed` when the
    /// store cannot persist the record
    pub async fn submit_at(
        &self,
        name: &str,
        oil_type: &str,
        submitted_date: Option<DateTime<Utc>>,
    ) -> Result<RestaurantRecord, RegistryError> {
        let new = NewRestaurant::validate(name, oil_type, submitted_date).inspect_err(|e| {
            AppLogger::log_submission(name, oil_type, false, Some(&e.to_string()));
        })?;

        let record = self.store.create_restaurant(&new).await.map_err(|e| {
            error!(error = %e, restaurant.name = %new.name(), "Failed to store restaurant");
            RegistryError::from(e)
        })?;

        AppLogger::log_submission(&record.name, record.oil_type.as_str(), true, None);
        Ok(record)
    }
}
