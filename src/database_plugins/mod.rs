// ABOUTME: Store abstraction layer for the restaurant registry
// ABOUTME: Plugin architecture with SQLite and process-local memory backends behind one trait

use async_trait::async_trait;
use oilwatch_core::errors::DatabaseError;
use oilwatch_core::models::{NewRestaurant, RestaurantRecord};

/// Runtime store selection
pub mod factory;
/// Process-local store
pub mod memory;
/// `SQLite` store
pub mod sqlite;

/// Table name used in logs and schema
pub const RESTAURANTS_TABLE: &str = "restaurants";

/// Core store abstraction
///
/// Records are append-only: there is no update or delete. Every method returns
/// owned snapshots so callers never hold a reference into the store.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Create tables and indexes if they do not exist yet
    async fn migrate(&self) -> Result<(), DatabaseError>;

    /// Persist a validated submission and return the stored record
    ///
    /// The store assigns the id and fills in the submission date when the
    /// request carries none.
    async fn create_restaurant(
        &self,
        restaurant: &NewRestaurant,
    ) -> Result<RestaurantRecord, DatabaseError>;

    /// All records whose name contains `fragment`, ignoring case
    ///
    /// `fragment` is matched literally. Results come back in the store's
    /// natural order; callers impose their own.
    async fn find_restaurants_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<RestaurantRecord>, DatabaseError>;

    /// Number of stored records
    async fn count_restaurants(&self) -> Result<u64, DatabaseError>;
}

/// Case folding shared by every backend so substring matching agrees across them
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
