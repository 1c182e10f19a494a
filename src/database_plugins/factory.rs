// ABOUTME: Store factory for runtime backend selection
// ABOUTME: Picks SQLite or the process-local store from DATABASE_URL and delegates the store trait
//! Store factory
//!
//! The backend is chosen once at startup from the parsed `DatabaseUrl`; the
//! resulting `Database` is shared behind an `Arc` for the life of the process.

use super::memory::MemoryDatabase;
use super::sqlite::SqliteDatabase;
use super::RestaurantStore;
use crate::config::{DatabaseConfig, DatabaseUrl};
use async_trait::async_trait;
use oilwatch_core::errors::DatabaseError;
use oilwatch_core::models::{NewRestaurant, RestaurantRecord};
use tracing::info;

/// Supported store types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// `SQLite`, file-backed or in-memory
    SQLite,
    /// Process-local vector
    Memory,
}

/// Store instance wrapper that delegates to the selected implementation
#[derive(Clone)]
pub enum Database {
    /// `SQLite` store
    SQLite(SqliteDatabase),
    /// Process-local store
    Memory(MemoryDatabase),
}

impl Database {
    /// Get a descriptive string for the current store backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite",
            Self::Memory(_) => "In-Memory (non-persistent)",
        }
    }

    /// Get the store type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
            Self::Memory(_) => DatabaseType::Memory,
        }
    }

    /// Create a store from configuration and bring its schema up to date
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db_type = detect_database_type(&config.url);
        info!(url = %config.url, backend = ?db_type, "Initializing restaurant store");

        let db = match db_type {
            DatabaseType::SQLite => Self::SQLite(SqliteDatabase::new(config).await?),
            DatabaseType::Memory => Self::Memory(MemoryDatabase::new()),
        };

        info!("Restaurant store initialized: {}", db.backend_info());
        Ok(db)
    }
}

/// Map a parsed store URL to a backend
#[must_use]
pub const fn detect_database_type(url: &DatabaseUrl) -> DatabaseType {
    match url {
        DatabaseUrl::SQLite { .. } | DatabaseUrl::SQLiteMemory => DatabaseType::SQLite,
        DatabaseUrl::Memory => DatabaseType::Memory,
    }
}

#[async_trait]
impl RestaurantStore for Database {
    async fn migrate(&self) -> Result<(), DatabaseError> {
        match self {
            Self::SQLite(db) => db.migrate().await,
            Self::Memory(db) => db.migrate().await,
        }
    }

    async fn create_restaurant(
        &self,
        restaurant: &NewRestaurant,
    ) -> Result<RestaurantRecord, DatabaseError> {
        match self {
            Self::SQLite(db) => db.create_restaurant(restaurant).await,
            Self::Memory(db) => db.create_restaurant(restaurant).await,
        }
    }

    async fn find_restaurants_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<RestaurantRecord>, DatabaseError> {
        match self {
            Self::SQLite(db) => db.find_restaurants_by_name(fragment).await,
            Self::Memory(db) => db.find_restaurants_by_name(fragment).await,
        }
    }

    async fn count_restaurants(&self) -> Result<u64, DatabaseError> {
        match self {
            Self::SQLite(db) => db.count_restaurants().await,
            Self::Memory(db) => db.count_restaurants().await,
        }
    }
}
