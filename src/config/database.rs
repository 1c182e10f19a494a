// ABOUTME: Store configuration types for SQLite and in-process stores
// ABOUTME: Parses DATABASE_URL and the pool and timeout settings that go with it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::environment::parse_env;
use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::time::Duration;

/// Type-safe store location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite`, scoped to the lifetime of the pool
    SQLiteMemory,
    /// Process-local store with no SQL engine behind it
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// `memory:` selects the process-local store, `sqlite::memory:` an
    /// in-memory `SQLite` database, `sqlite:<path>` a file. Anything else is
    /// treated as a `SQLite` file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or names no path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }
        if s == "memory:" {
            return Ok(Self::Memory);
        }
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            return match path_str {
                ":memory:" => Ok(Self::SQLiteMemory),
                "" => Err(AppError::config(format!(
                    "DATABASE_URL '{s}' does not name a database file"
                ))),
                path => Ok(Self::SQLite {
                    path: PathBuf::from(path.strip_prefix("//").unwrap_or(path)),
                }),
            };
        }
        // Fallback: treat as SQLite file path
        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".into(),
            Self::Memory => "memory:".into(),
        }
    }

    /// Check if records vanish when the process exits
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory | Self::SQLiteMemory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/oilwatch.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Store connection and pool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Where records live
    pub url: DatabaseUrl,
    /// Maximum pooled connections for file-backed `SQLite`
    pub max_connections: u32,
    /// How long to wait for a pooled connection
    pub acquire_timeout_secs: u64,
    /// Upper bound on any single store call
    pub operation_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
            acquire_timeout_secs: defaults::DATABASE_ACQUIRE_TIMEOUT_SECS,
            operation_timeout_secs: defaults::DATABASE_OPERATION_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    /// Load store configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a store environment variable is invalid
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            url: DatabaseUrl::parse_url(&env_config::database_url())?,
            max_connections: parse_env(
                "DATABASE_MAX_CONNECTIONS",
                defaults::DATABASE_MAX_CONNECTIONS,
            )?,
            acquire_timeout_secs: parse_env(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                defaults::DATABASE_ACQUIRE_TIMEOUT_SECS,
            )?,
            operation_timeout_secs: parse_env(
                "DATABASE_OPERATION_TIMEOUT_SECS",
                defaults::DATABASE_OPERATION_TIMEOUT_SECS,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// In-memory `SQLite` configuration with default limits
    #[must_use]
    pub fn sqlite_memory() -> Self {
        Self {
            url: DatabaseUrl::SQLiteMemory,
            ..Self::default()
        }
    }

    /// Reject zero-sized pools and zero timeouts
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error naming the offending setting
    pub fn validate(&self) -> AppResult<()> {
        if self.max_connections == 0 {
            return Err(AppError::config_invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1",
            ));
        }
        if self.acquire_timeout_secs == 0 {
            return Err(AppError::config_invalid(
                "DATABASE_ACQUIRE_TIMEOUT_SECS must be at least 1",
            ));
        }
        if self.operation_timeout_secs == 0 {
            return Err(AppError::config_invalid(
                "DATABASE_OPERATION_TIMEOUT_SECS must be at least 1",
            ));
        }
        Ok(())
    }

    /// Acquire timeout as a `Duration`
    #[must_use]
    pub const fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Operation timeout as a `Duration`
    #[must_use]
    pub const fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }
}
