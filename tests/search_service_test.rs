// ABOUTME: Integration tests for SearchService matching, ordering and risk annotation
// ABOUTME: Runs against both the SQLite and in-memory stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chrono::{DateTime, Duration, Utc};
use helpers::stores::{CountingStore, FailingStore};
use oilwatch_core::errors::RegistryError;
use oilwatch_core::models::{RiskColor, RiskLevel};
use oilwatch_server::config::DatabaseConfig;
use oilwatch_server::database_plugins::factory::Database;
use oilwatch_server::database_plugins::memory::MemoryDatabase;
use oilwatch_server::database_plugins::RestaurantStore;
use oilwatch_server::services::{SearchOutcome, SearchService, SubmissionService};
use std::sync::Arc;

fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .with_timezone(&Utc)
}

async fn stores() -> Vec<(&'static str, Arc<dyn RestaurantStore>)> {
    let sqlite: Arc<dyn RestaurantStore> = Arc::new(
        Database::new(&DatabaseConfig::sqlite_memory())
            .await
            .unwrap(),
    );
    let memory: Arc<dyn RestaurantStore> = Arc::new(MemoryDatabase::new());
    vec![("sqlite", sqlite), ("memory", memory)]
}

#[tokio::test]
async fn test_joes_diner_scenario() {
    for (backend, store) in stores().await {
        let submissions = SubmissionService::new(Arc::clone(&store));
        submissions.submit("Joe's Diner", "Peanut").await.unwrap();

        let outcome = SearchService::new(store).search("joe").await.unwrap();
        let SearchOutcome::Found(results) = outcome else {
            panic!("{backend}: expected a match");
        };
        assert_eq!(results.len(), 1, "{backend}");
        assert_eq!(results[0].restaurant.name, "Joe's Diner");
        assert_eq!(results[0].risk.risk_level, RiskLevel::High);
        assert_eq!(results[0].risk.color, RiskColor::Red);
    }
}

#[tokio::test]
async fn test_two_joes_are_annotated_and_newest_first() {
    for (backend, store) in stores().await {
        let submissions = SubmissionService::new(Arc::clone(&store));
        submissions
            .submit_at("Joe's Diner", "Peanut", Some(at("2024-05-01T09:00:00Z")))
            .await
            .unwrap();
        submissions
            .submit_at("Joe's Pizza", "Olive", Some(at("2024-05-02T09:00:00Z")))
            .await
            .unwrap();

        let search = SearchService::new(store);
        for query in ["joe", "JOE", "Joe"] {
            let results = search.search(query).await.unwrap().into_results();
            assert_eq!(results.len(), 2, "{backend} {query}");
            assert_eq!(results[0].restaurant.name, "Joe's Pizza");
            assert_eq!(results[0].risk.risk_level, RiskLevel::Low);
            assert_eq!(results[0].risk.color, RiskColor::Green);
            assert_eq!(results[1].restaurant.name, "Joe's Diner");
            assert_eq!(results[1].risk.risk_level, RiskLevel::High);
            assert_eq!(results[1].risk.color, RiskColor::Red);
        }
    }
}

#[tokio::test]
async fn test_results_are_newest_first() {
    for (backend, store) in stores().await {
        let submissions = SubmissionService::new(Arc::clone(&store));
        submissions
            .submit_at("Golden Wok", "Sesame", Some(at("2024-01-01T00:00:00Z")))
            .await
            .unwrap();
        submissions
            .submit_at("Golden Grill", "Corn", Some(at("2024-03-01T00:00:00Z")))
            .await
            .unwrap();
        submissions
            .submit_at("Golden Fry", "Vegetable", Some(at("2024-02-01T00:00:00Z")))
            .await
            .unwrap();

        let results = SearchService::new(store)
            .search("GOLDEN")
            .await
            .unwrap()
            .into_results();
        let names: Vec<_> = results.iter().map(|r| r.restaurant.name.as_str()).collect();
        assert_eq!(
            names,
            ["Golden Grill", "Golden Fry", "Golden Wok"],
            "{backend}"
        );
        for pair in results.windows(2) {
            assert!(pair[0].restaurant.submitted_date >= pair[1].restaurant.submitted_date);
        }
    }
}

#[tokio::test]
async fn test_equal_dates_keep_insertion_order() {
    for (backend, store) in stores().await {
        let submissions = SubmissionService::new(Arc::clone(&store));
        let when = Some(at("2024-06-01T12:00:00Z"));
        for name in ["Taco One", "Taco Two", "Taco Three"] {
            submissions.submit_at(name, "Corn", when).await.unwrap();
        }
        submissions
            .submit_at("Taco Late", "Corn", when.map(|w| w + Duration::hours(1)))
            .await
            .unwrap();

        let results = SearchService::new(store)
            .search("taco")
            .await
            .unwrap()
            .into_results();
        let names: Vec<_> = results.iter().map(|r| r.restaurant.name.as_str()).collect();
        assert_eq!(
            names,
            ["Taco Late", "Taco One", "Taco Two", "Taco Three"],
            "{backend}"
        );
    }
}

#[tokio::test]
async fn test_match_is_literal_substring() {
    for (backend, store) in stores().await {
        let submissions = SubmissionService::new(Arc::clone(&store));
        submissions.submit("100% Vegan_Bistro", "Olive").await.unwrap();
        submissions.submit("Main Street Cafe", "Canola").await.unwrap();
        submissions.submit("Café Münster", "Walnut").await.unwrap();

        let search = SearchService::new(store);
        assert_eq!(search.search("0% v").await.unwrap().len(), 1, "{backend}");
        assert_eq!(search.search("_bis").await.unwrap().len(), 1, "{backend}");
        assert_eq!(search.search("%").await.unwrap().len(), 1, "{backend}");
        assert!(search.search("m.in").await.unwrap().is_empty(), "{backend}");
        assert!(search.search("street cafe$").await.unwrap().is_empty(), "{backend}");
        assert_eq!(search.search("CAFÉ MÜN").await.unwrap().len(), 1, "{backend}");
        assert_eq!(search.search(" street ").await.unwrap().len(), 1, "{backend}");
        assert!(search.search("  street ").await.unwrap().is_empty(), "{backend}");
    }
}

#[tokio::test]
async fn test_surrounding_whitespace_is_part_of_the_query() {
    for (backend, store) in stores().await {
        SubmissionService::new(Arc::clone(&store))
            .submit("Joe's Diner", "Peanut")
            .await
            .unwrap();

        let search = SearchService::new(store);
        assert!(search.search("joe ").await.unwrap().is_empty(), "{backend}");
        assert!(search.search(" joe").await.unwrap().is_empty(), "{backend}");
        assert_eq!(search.search("joe's ").await.unwrap().len(), 1, "{backend}");
    }
}

#[tokio::test]
async fn test_no_matches_is_a_success() {
    for (backend, store) in stores().await {
        SubmissionService::new(Arc::clone(&store))
            .submit("Joe's Diner", "Peanut")
            .await
            .unwrap();
        let outcome = SearchService::new(store).search("pizza").await.unwrap();
        assert_eq!(outcome, SearchOutcome::NoMatches, "{backend}");
        assert!(outcome.into_results().is_empty());
    }
}

#[tokio::test]
async fn test_blank_query_never_reaches_the_store() {
    let store = CountingStore::new();
    let search = SearchService::new(store.clone());

    for query in ["", " ", "\t\n  "] {
        assert_eq!(
            search.search(query).await.unwrap_err(),
            RegistryError::EmptyQuery
        );
    }
    assert_eq!(store.finds(), 0);
}

#[tokio::test]
async fn test_search_is_a_pure_read() {
    let store = CountingStore::new();
    SubmissionService::new(store.clone())
        .submit("Joe's Diner", "Peanut")
        .await
        .unwrap();

    let search = SearchService::new(store.clone());
    let first = search.search("diner").await.unwrap();
    let second = search.search("diner").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(store.creates(), 1);
    assert_eq!(store.count_restaurants().await.unwrap(), 1);
}

#[tokio::test]
async fn test_store_failure_is_not_an_empty_result() {
    let search = SearchService::new(FailingStore::unavailable());
    let err = search.search("joe").await.unwrap_err();
    assert!(matches!(err, RegistryError::StoreUnavailable { .. }));
}
