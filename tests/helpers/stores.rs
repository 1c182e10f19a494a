// ABOUTME: Store doubles and resource builders shared by integration tests
// ABOUTME: A call-counting store, an always-failing store, and ready-made ServerResources

use async_trait::async_trait;
use oilwatch_core::errors::DatabaseError;
use oilwatch_core::models::{NewRestaurant, RestaurantRecord};
use oilwatch_server::config::ServerConfig;
use oilwatch_server::database_plugins::factory::Database;
use oilwatch_server::database_plugins::memory::MemoryDatabase;
use oilwatch_server::database_plugins::RestaurantStore;
use oilwatch_server::resources::ServerResources;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Memory store that records how often each method is called
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryDatabase,
    creates: AtomicUsize,
    finds: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.creates() + self.finds()
    }
}

#[async_trait]
impl RestaurantStore for CountingStore {
    async fn migrate(&self) -> Result<(), DatabaseError> {
        self.inner.migrate().await
    }

    async fn create_restaurant(
        &self,
        restaurant: &NewRestaurant,
    ) -> Result<RestaurantRecord, DatabaseError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create_restaurant(restaurant).await
    }

    async fn find_restaurants_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<RestaurantRecord>, DatabaseError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find_restaurants_by_name(fragment).await
    }

    async fn count_restaurants(&self) -> Result<u64, DatabaseError> {
        self.inner.count_restaurants().await
    }
}

/// Store whose every call fails with the given error
pub struct FailingStore {
    error: DatabaseError,
}

impl FailingStore {
    pub fn new(error: DatabaseError) -> Arc<Self> {
        Arc::new(Self { error })
    }

    pub fn unavailable() -> Arc<Self> {
        Self::new(DatabaseError::ConnectionFailed {
            context: "store offline".to_owned(),
        })
    }
}

#[async_trait]
impl RestaurantStore for FailingStore {
    async fn migrate(&self) -> Result<(), DatabaseError> {
        Err(self.error.clone())
    }

    async fn create_restaurant(
        &self,
        _restaurant: &NewRestaurant,
    ) -> Result<RestaurantRecord, DatabaseError> {
        Err(self.error.clone())
    }

    async fn find_restaurants_by_name(
        &self,
        _fragment: &str,
    ) -> Result<Vec<RestaurantRecord>, DatabaseError> {
        Err(self.error.clone())
    }

    async fn count_restaurants(&self) -> Result<u64, DatabaseError> {
        Err(self.error.clone())
    }
}

/// Resources over a fresh in-memory `SQLite` store with the self test enabled
pub async fn sqlite_resources() -> Arc<ServerResources> {
    let config = ServerConfig::for_testing();
    let database = Database::new(&config.database)
        .await
        .expect("in-memory SQLite store");
    Arc::new(ServerResources::new(database, Arc::new(config)))
}

/// Resources over an arbitrary store
pub fn resources_with_store(
    store: Arc<dyn RestaurantStore>,
    config: ServerConfig,
) -> Arc<ServerResources> {
    Arc::new(ServerResources::with_store(store, Arc::new(config)))
}
