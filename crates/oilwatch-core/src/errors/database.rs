// ABOUTME: Structured error types for restaurant store operations
// ABOUTME: Provides store-level errors with context, plus sqlx conversion behind a feature flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use thiserror::Error;

/// Failures raised by a `RestaurantStore` implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    /// Could not connect or acquire a connection
    #[error("Database connection failed: {context}")]
    ConnectionFailed {
        /// Underlying failure
        context: String,
    },

    /// Operation exceeded the configured time budget
    #[error("Database operation timed out: {context}")]
    Timeout {
        /// Operation that stalled
        context: String,
    },

    /// Query rejected or failed while executing
    #[error("Database query failed: {context}")]
    QueryError {
        /// Underlying failure
        context: String,
    },

    /// A stored row could not be decoded into a record
    #[error("Invalid data in database: {context}")]
    InvalidData {
        /// What was wrong
        context: String,
    },

    /// Schema setup failed
    #[error("Database migration failed: {context}")]
    MigrationFailed {
        /// Underlying failure
        context: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        let context = error.to_string();
        match error {
            sqlx::Error::PoolTimedOut => Self::Timeout { context },
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                Self::ConnectionFailed { context }
            }
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => Self::InvalidData { context },
            _ => Self::QueryError { context },
        }
    }
}
