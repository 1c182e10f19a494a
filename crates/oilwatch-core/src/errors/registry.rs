// ABOUTME: Error taxonomy returned by the submission and search services
// ABOUTME: Separates client-input failures from store failures and maps both onto AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Registry Error Types
//!
//! - `RegistryError` - what the services report to their callers
//! - Conversion into `AppError` for HTTP response formatting

use super::database::DatabaseError;
use super::{AppError, ErrorCode};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// A field that must be present and non-blank on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// Restaurant name
    Name,
    /// Declared oil type
    OilType,
}

impl RequiredField {
    /// JSON field name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::OilType => "oilType",
        }
    }
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures reported by the submission and search services
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required submission field was empty or absent
    #[error("{}", missing_field_message(.field))]
    MissingField {
        /// Which field
        field: RequiredField,
    },

    /// Oil type outside the catalog
    #[error("{value} is not a valid oil type")]
    InvalidOilType {
        /// Trimmed label as submitted
        value: String,
    },

    /// Explicit submission date cannot be stored as fixed-width RFC 3339
    #[error("Submitted date {value} is outside the supported range (years 0000-9999)")]
    SubmittedDateOutOfRange {
        /// Date as supplied
        value: String,
    },

    /// Search term empty or whitespace-only
    #[error("Search name is required")]
    EmptyQuery,

    /// The store could not be reached or did not answer in time
    #[error("{context}")]
    StoreUnavailable {
        /// Message from the underlying failure
        context: String,
    },

    /// The store answered with an error
    #[error("{context}")]
    StoreOperationFailed {
        /// Message from the underlying failure
        context: String,
    },
}

const fn missing_field_message(field: &RequiredField) -> &'static str {
    match field {
        RequiredField::Name => "Restaurant name is required",
        RequiredField::OilType => "Oil type is required",
    }
}

impl RegistryError {
    /// Whether the caller sent bad input (as opposed to an infrastructure failure)
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidOilType { .. }
                | Self::SubmittedDateOutOfRange { .. }
                | Self::EmptyQuery
        )
    }

    /// Error code used when surfacing over HTTP
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidOilType { .. } | Self::SubmittedDateOutOfRange { .. } => {
                ErrorCode::InvalidInput
            }
            Self::EmptyQuery => ErrorCode::InvalidQuery,
            Self::StoreUnavailable { .. } => ErrorCode::StorageError,
            Self::StoreOperationFailed { .. } => ErrorCode::DatabaseError,
        }
    }
}

impl From<DatabaseError> for RegistryError {
    fn from(error: DatabaseError) -> Self {
        let context = error.to_string();
        match error {
            DatabaseError::ConnectionFailed { .. } | DatabaseError::Timeout { .. } => {
                Self::StoreUnavailable { context }
            }
            DatabaseError::QueryError { .. }
            | DatabaseError::InvalidData { .. }
            | DatabaseError::MigrationFailed { .. } => Self::StoreOperationFailed { context },
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(error: RegistryError) -> Self {
        Self::new(error.error_code(), error.to_string())
    }
}
