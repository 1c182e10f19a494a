// ABOUTME: Route handlers for the restaurant registry REST API
// ABOUTME: Submission, name search with risk annotation, the oil-type catalog, and the store self test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Restaurant routes
//!
//! Every response carries `success`. Failures use the `AppError` envelope
//! `{"success": false, "error": "...", "code": "..."}`.

use crate::constants::{messages, self_test};
use crate::errors::{AppError, RegistryError};
use crate::resources::ServerResources;
use crate::services::SearchOutcome;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use oilwatch_core::models::{OilType, RiskAssessment};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};

/// Body of `POST /restaurants`
///
/// Absent fields deserialize as `None` and are reported as missing by
/// validation rather than as a malformed body.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    /// Restaurant name
    #[serde(default)]
    pub name: Option<String>,
    /// One of the catalog labels
    #[serde(default)]
    pub oil_type: Option<String>,
}

/// Query string of `GET /restaurants/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Name fragment
    #[serde(default)]
    pub name: Option<String>,
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct RegistryResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Payload
    pub data: T,
    /// Number of items in `data`, for list payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Informational message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<T> RegistryResponse<T> {
    fn data(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: None,
        }
    }

    const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// One entry of the oil-type catalog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OilTypeEntry {
    /// Canonical label
    pub oil_type: OilType,
    /// Verdict for the label
    pub risk: RiskAssessment,
}

/// Restaurant routes implementation
pub struct RestaurantRoutes;

impl RestaurantRoutes {
    /// Create all restaurant routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/restaurants", post(Self::handle_create))
            .route("/restaurants/search", get(Self::handle_search))
            .route("/restaurants/oil-types", get(Self::handle_oil_types))
            .route("/restaurants/self-test", post(Self::handle_self_test))
            .with_state(resources)
    }

    /// Handle restaurant submission
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<CreateRestaurantRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|rejection| {
            warn!(error = %rejection.body_text(), "Rejected malformed restaurant submission");
            AppError::invalid_format(rejection.body_text())
        })?;

        let record = resources
            .submission_service()
            .submit(
                request.name.as_deref().unwrap_or_default(),
                request.oil_type.as_deref().unwrap_or_default(),
            )
            .await
            .map_err(|e| log_failure("create restaurant", e))?;

        Ok((StatusCode::CREATED, Json(RegistryResponse::data(record))).into_response())
    }

    /// Handle restaurant search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<SearchQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(|rejection| {
            warn!(error = %rejection.body_text(), "Rejected malformed search query");
            AppError::invalid_format(rejection.body_text())
        })?;

        let outcome = resources
            .search_service()
            .search(query.name.as_deref().unwrap_or_default())
            .await
            .map_err(|e| log_failure("search restaurants", e))?;

        let body = match outcome {
            SearchOutcome::Found(results) => {
                let count = results.len();
                RegistryResponse::data(results).with_count(count)
            }
            SearchOutcome::NoMatches => {
                RegistryResponse::data(Vec::new()).with_message(messages::NO_MATCHES)
            }
        };

        Ok((StatusCode::OK, Json(body)).into_response())
    }

    /// List the oil-type catalog with each label's verdict
    async fn handle_oil_types() -> Response {
        let entries: Vec<OilTypeEntry> = OilType::ALL
            .into_iter()
            .map(|oil_type| OilTypeEntry {
                oil_type,
                risk: RiskAssessment::from(oil_type),
            })
            .collect();
        let count = entries.len();

        (
            StatusCode::OK,
            Json(RegistryResponse::data(entries).with_count(count)),
        )
            .into_response()
    }

    /// Create a fixed record to prove the store round-trips
    async fn handle_self_test(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        if !resources.config.app_behavior.enable_self_test {
            return Err(AppError::not_found("Route /restaurants/self-test"));
        }

        let record = resources
            .submission_service()
            .submit(self_test::RESTAURANT_NAME, self_test::OIL_TYPE)
            .await
            .map_err(|e| log_failure("self test", e))?;

        Ok((
            StatusCode::CREATED,
            Json(RegistryResponse::data(record).with_message(messages::SELF_TEST_OK)),
        )
            .into_response())
    }
}

/// Log a service failure at the route boundary and convert it for the response
fn log_failure(operation: &str, err: RegistryError) -> AppError {
    if err.is_client_error() {
        warn!(operation, error = %err, "Request rejected");
    } else {
        error!(operation, error = %err, "Store failure");
    }
    AppError::from(err)
}
