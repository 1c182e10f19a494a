// ABOUTME: Process-local restaurant store backed by a vector behind an async RwLock
// ABOUTME: Used for DATABASE_URL=memory: and for tests that need no SQL engine

use super::{fold_name, RestaurantStore};
use async_trait::async_trait;
use chrono::Utc;
use oilwatch_core::errors::DatabaseError;
use oilwatch_core::models::{NewRestaurant, RestaurantRecord};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory store; clones share the same records
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    records: Arc<RwLock<Vec<RestaurantRecord>>>,
}

impl MemoryDatabase {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantStore for MemoryDatabase {
    async fn migrate(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn create_restaurant(
        &self,
        restaurant: &NewRestaurant,
    ) -> Result<RestaurantRecord, DatabaseError> {
        let record = restaurant.clone().into_record(Uuid::new_v4(), Utc::now());
        self.records.write().await.push(record.clone());
        debug!(restaurant.id = %record.id, "Stored restaurant in memory");
        Ok(record)
    }

    async fn find_restaurants_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<RestaurantRecord>, DatabaseError> {
        let needle = fold_name(fragment);
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| fold_name(&record.name).contains(&needle))
            .cloned()
            .collect())
    }

    async fn count_restaurants(&self) -> Result<u64, DatabaseError> {
        let len = self.records.read().await.len();
        Ok(u64::try_from(len).unwrap_or(u64::MAX))
    }
}
