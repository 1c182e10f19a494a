// ABOUTME: HTTP tests for the liveness and readiness endpoints
// ABOUTME: Readiness reflects whether the store answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::stores::{resources_with_store, sqlite_resources, FailingStore};
use oilwatch_server::config::ServerConfig;
use oilwatch_server::routes::HealthRoutes;
use oilwatch_server::server::build_router;
use serde_json::Value;

#[tokio::test]
async fn test_health_is_always_ok() {
    let resources = resources_with_store(FailingStore::unavailable(), ServerConfig::for_testing());
    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_reports_backend_and_count() {
    let resources = sqlite_resources().await;
    resources
        .submission_service()
        .submit("Joe's Diner", "Peanut")
        .await
        .unwrap();

    let response = AxumTestRequest::get("/ready")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["backend"], "SQLite");
    assert_eq!(body["restaurants"], 1);
}

#[tokio::test]
async fn test_ready_is_503_when_store_fails() {
    let resources = resources_with_store(FailingStore::unavailable(), ServerConfig::for_testing());
    let response = AxumTestRequest::get("/ready")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "unavailable");
    assert!(body["error"].as_str().unwrap().contains("store offline"));
}
