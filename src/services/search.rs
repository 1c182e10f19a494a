// ABOUTME: Restaurant search: substring lookup, newest-first ordering, and risk annotation
// ABOUTME: Distinguishes an empty result from a failed search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::database_plugins::RestaurantStore;
use crate::logging::AppLogger;
use oilwatch_core::errors::RegistryError;
use oilwatch_core::models::RestaurantWithRisk;
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

/// Result of a successful search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one match, newest submission first
    Found(Vec<RestaurantWithRisk>),
    /// The query matched nothing
    NoMatches,
}

impl SearchOutcome {
    /// Number of matches
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Found(results) => results.len(),
            Self::NoMatches => 0,
        }
    }

    /// Whether nothing matched
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatches)
    }

    /// Matches as a list, empty for `NoMatches`
    #[must_use]
    pub fn into_results(self) -> Vec<RestaurantWithRisk> {
        match self {
            Self::Found(results) => results,
            Self::NoMatches => Vec::new(),
        }
    }
}

/// Finds restaurants by name
#[derive(Clone)]
pub struct SearchService {
    store: Arc<dyn RestaurantStore>,
}

impl SearchService {
    /// Service over the given store
    #[must_use]
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    /// Restaurants whose name contains `query`, ignoring case
    ///
    /// Blank queries are rejected; otherwise the query is matched literally,
    /// surrounding whitespace included. Results are ordered by
    /// submission date, newest first; equal dates keep the store's order.
    ///
    /// # Errors
    ///
    /// `EmptyQuery` for a blank query (the store is not touched),
    /// `StoreUnavailable` or `StoreOperationFailed` when the lookup fails
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, RegistryError> {
        if query.trim().is_empty() {
            return Err(RegistryError::EmptyQuery);
        }

        let started = Instant::now();
        let mut records = self
            .store
            .find_restaurants_by_name(query)
            .await
            .map_err(|e| {
                error!(error = %e, search.query = %query, "Restaurant search failed");
                RegistryError::from(e)
            })?;

        records.sort_by(|a, b| b.submitted_date.cmp(&a.submitted_date));
        let results: Vec<RestaurantWithRisk> =
            records.into_iter().map(RestaurantWithRisk::from).collect();

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_search(query, results.len(), elapsed_ms);

        if results.is_empty() {
            Ok(SearchOutcome::NoMatches)
        } else {
            Ok(SearchOutcome::Found(results))
        }
    }
}
