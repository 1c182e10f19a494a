// ABOUTME: Restaurant record shapes: validated creation request, stored record, and search result
// ABOUTME: Name trimming, required-field checks, and oil-type validation happen here before any store access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::oil::OilType;
use super::risk::RiskAssessment;
use crate::errors::{RegistryError, RequiredField};
use chrono::{DateTime, Datelike, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamps are kept at microsecond precision so a record returned from
/// `create` compares equal to the same record read back from any store.
const TIMESTAMP_SUBSEC_DIGITS: u16 = 6;

/// Years that render as four unsigned digits in RFC 3339
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A persisted restaurant submission
///
/// Immutable once created. Values handed to callers are owned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Trimmed, non-empty restaurant name
    pub name: String,
    /// Declared cooking oil
    pub oil_type: OilType,
    /// When the submission was recorded
    pub submitted_date: DateTime<Utc>,
}

/// A validated creation request
///
/// Can only be built through [`NewRestaurant::validate`], so a store never
/// sees an empty name or an unknown oil type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    name: String,
    oil_type: OilType,
    submitted_date: Option<DateTime<Utc>>,
}

impl NewRestaurant {
    /// Validate raw submission fields
    ///
    /// Required fields are checked first (name, then oil type); the oil type
    /// must then match a canonical label exactly once trimmed.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for an empty or whitespace-only field,
    /// `InvalidOilType` for a label outside the catalog, and
    /// `SubmittedDateOutOfRange` for an explicit date outside years 0000-9999
    pub fn validate(
        name: &str,
        oil_type: &str,
        submitted_date: Option<DateTime<Utc>>,
    ) -> Result<Self, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::MissingField {
                field: RequiredField::Name,
            });
        }
        if oil_type.trim().is_empty() {
            return Err(RegistryError::MissingField {
                field: RequiredField::OilType,
            });
        }
        let oil_type = oil_type.parse::<OilType>()?;
        if let Some(date) = submitted_date.filter(|d| !SUPPORTED_YEARS.contains(&d.year())) {
            return Err(RegistryError::SubmittedDateOutOfRange {
                value: date.to_rfc3339(),
            });
        }

        Ok(Self {
            name: name.to_owned(),
            oil_type,
            submitted_date,
        })
    }

    /// Trimmed name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical oil type
    #[must_use]
    pub const fn oil_type(&self) -> OilType {
        self.oil_type
    }

    /// Explicit submission date, if the caller supplied one
    #[must_use]
    pub const fn submitted_date(&self) -> Option<DateTime<Utc>> {
        self.submitted_date
    }

    /// Materialize the stored record once the store has picked an id
    ///
    /// `now` is used when no explicit date was supplied.
    #[must_use]
    pub fn into_record(self, id: Uuid, now: DateTime<Utc>) -> RestaurantRecord {
        RestaurantRecord {
            id,
            name: self.name,
            oil_type: self.oil_type,
            submitted_date: self
                .submitted_date
                .unwrap_or(now)
                .trunc_subsecs(TIMESTAMP_SUBSEC_DIGITS),
        }
    }
}

/// A search hit: the stored record flattened together with its risk verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantWithRisk {
    /// Stored record
    #[serde(flatten)]
    pub restaurant: RestaurantRecord,
    /// Verdict derived from the record's oil type
    pub risk: RiskAssessment,
}

impl From<RestaurantRecord> for RestaurantWithRisk {
    fn from(restaurant: RestaurantRecord) -> Self {
        let risk = super::risk::classify(restaurant.oil_type.as_str());
        Self { restaurant, risk }
    }
}
