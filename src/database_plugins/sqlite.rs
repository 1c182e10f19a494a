// ABOUTME: SQLite restaurant store built on an sqlx connection pool
// ABOUTME: Owns the restaurants schema, bounds every call with a timeout, and decodes rows into records
//! `SQLite` store implementation
//!
//! Names are stored twice: as submitted, and case-folded in `name_folded` so
//! substring search can use `instr()` and never interprets `%` or `_`.

use super::{fold_name, RestaurantStore, RESTAURANTS_TABLE};
use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::logging::AppLogger;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use oilwatch_core::errors::DatabaseError;
use oilwatch_core::models::{NewRestaurant, OilType, RestaurantRecord};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite, SqlitePool};
use std::future::Future;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// `SQLite` store
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
    operation_timeout: Duration,
}

impl SqliteDatabase {
    /// Connect to the configured `SQLite` database and run migrations
    ///
    /// File databases are created (along with their parent directory) when
    /// missing. An in-memory database is pinned to a single connection that
    /// never expires, since each connection would otherwise see its own empty
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a `SQLite` URL, the connection
    /// fails, or the schema cannot be created
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = match &config.url {
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        DatabaseError::ConnectionFailed {
                            context: format!("cannot create {}: {e}", parent.display()),
                        }
                    })?;
                }
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .busy_timeout(config.acquire_timeout());
                SqlitePoolOptions::new()
                    .max_connections(config.max_connections)
                    .acquire_timeout(config.acquire_timeout())
                    .connect_with(options)
                    .await?
            }
            DatabaseUrl::SQLiteMemory => {
                let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .acquire_timeout(config.acquire_timeout())
                    .connect_with(options)
                    .await?
            }
            DatabaseUrl::Memory => {
                return Err(DatabaseError::ConnectionFailed {
                    context: format!("{} is not a SQLite URL", config.url),
                });
            }
        };

        let db = Self {
            pool,
            operation_timeout: config.operation_timeout(),
        };
        db.migrate().await?;
        info!(url = %config.url, "SQLite store ready");
        Ok(db)
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run `fut` under the operation timeout, logging how long it took
    async fn bounded<T, F>(&self, operation: &str, fut: F) -> Result<T, DatabaseError>
    where
        T: Send,
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        let started = Instant::now();
        let result = match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(inner) => inner.map_err(DatabaseError::from),
            Err(_) => Err(DatabaseError::Timeout {
                context: format!(
                    "{operation} did not complete within {}s",
                    self.operation_timeout.as_secs()
                ),
            }),
        };
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_database_operation(operation, RESTAURANTS_TABLE, result.is_ok(), elapsed_ms);
        result
    }

    fn row_to_record(row: &SqliteRow) -> Result<RestaurantRecord, DatabaseError> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let oil_type: String = row.try_get("oil_type")?;
        let submitted_date: String = row.try_get("submitted_date")?;

        Ok(RestaurantRecord {
            id: Uuid::parse_str(&id).map_err(|e| DatabaseError::InvalidData {
                context: format!("restaurant id '{id}': {e}"),
            })?,
            name,
            oil_type: OilType::from_canonical(&oil_type).ok_or_else(|| {
                DatabaseError::InvalidData {
                    context: format!("restaurant {id} has unknown oil type '{oil_type}'"),
                }
            })?,
            submitted_date: parse_timestamp(&submitted_date).map_err(|e| {
                DatabaseError::InvalidData {
                    context: format!("restaurant {id} submitted_date '{submitted_date}': {e}"),
                }
            })?,
        })
    }
}

/// Fixed-width RFC 3339 in UTC with microseconds, so text order is time order
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}

fn oil_type_check_list() -> String {
    OilType::ALL
        .iter()
        .map(|oil| format!("'{}'", oil.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl RestaurantStore for SqliteDatabase {
    async fn migrate(&self) -> Result<(), DatabaseError> {
        let create_table = format!(
            r"
            CREATE TABLE IF NOT EXISTS {RESTAURANTS_TABLE} (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL CHECK (length(trim(name)) > 0),
                name_folded TEXT NOT NULL,
                oil_type TEXT NOT NULL CHECK (oil_type IN ({})),
                submitted_date TEXT NOT NULL
            )
            ",
            oil_type_check_list()
        );

        sqlx::query(&create_table)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::MigrationFailed {
                context: format!("create {RESTAURANTS_TABLE}: {e}"),
            })?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_restaurants_submitted_date ON restaurants(submitted_date)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed {
            context: format!("create submitted_date index: {e}"),
        })?;

        debug!("Restaurant schema is up to date");
        Ok(())
    }

    async fn create_restaurant(
        &self,
        restaurant: &NewRestaurant,
    ) -> Result<RestaurantRecord, DatabaseError> {
        let record = restaurant.clone().into_record(Uuid::new_v4(), Utc::now());

        self.bounded(
            "insert",
            sqlx::query(
                r"
                INSERT INTO restaurants (id, name, name_folded, oil_type, submitted_date)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(record.id.to_string())
            .bind(&record.name)
            .bind(fold_name(&record.name))
            .bind(record.oil_type.as_str())
            .bind(format_timestamp(&record.submitted_date))
            .execute(&self.pool),
        )
        .await?;

        Ok(record)
    }

    async fn find_restaurants_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<RestaurantRecord>, DatabaseError> {
        let rows = self
            .bounded(
                "search",
                sqlx::query(
                    r"
                    SELECT id, name, oil_type, submitted_date
                    FROM restaurants
                    WHERE instr(name_folded, $1) > 0
                    ORDER BY submitted_date DESC, rowid ASC
                    ",
                )
                .bind(fold_name(fragment))
                .fetch_all(&self.pool),
            )
            .await?;

        rows.iter().map(Self::row_to_record).collect()
    }

    async fn count_restaurants(&self) -> Result<u64, DatabaseError> {
        let count: i64 = self
            .bounded(
                "count",
                sqlx::query_scalar("SELECT COUNT(*) FROM restaurants").fetch_one(&self.pool),
            )
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
