// ABOUTME: Allergy-risk tiers derived from a restaurant's declared cooking oil
// ABOUTME: Pure, total classify function plus the fixed message and color per tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Risk classification
//!
//! A risk verdict depends on nothing but the oil label. It is computed on every
//! search response and never persisted.
//!
//! ```rust
//! use oilwatch_core::models::{classify, RiskColor, RiskLevel};
//!
//! let risk = classify("  PEANUT ");
//! assert_eq!(risk.risk_level, RiskLevel::High);
//! assert_eq!(risk.color, RiskColor::Red);
//!
//! assert_eq!(classify("ketchup").risk_level, RiskLevel::Unknown);
//! ```

use super::oil::OilType;
use crate::constants::risk_messages;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Allergy-risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Peanut oil
    High,
    /// Vegetable or mixed oil
    Medium,
    /// Oils with lower allergenic potential
    Low,
    /// Label not recognized
    Unknown,
}

impl RiskLevel {
    /// Label used in JSON payloads and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }

    /// Fixed explanation shown next to the tier
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::High => risk_messages::HIGH,
            Self::Medium => risk_messages::MEDIUM,
            Self::Low => risk_messages::LOW,
            Self::Unknown => risk_messages::UNKNOWN,
        }
    }

    /// Presentation tag for the tier
    #[must_use]
    pub const fn color(&self) -> RiskColor {
        match self {
            Self::High => RiskColor::Red,
            Self::Medium => RiskColor::Orange,
            Self::Low => RiskColor::Green,
            Self::Unknown => RiskColor::Gray,
        }
    }

    /// Full assessment for the tier
    #[must_use]
    pub const fn assessment(self) -> RiskAssessment {
        RiskAssessment {
            risk_level: self,
            message: self.message(),
            color: self.color(),
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation color attached to a risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    /// High
    Red,
    /// Medium
    Orange,
    /// Low
    Green,
    /// Unknown
    Gray,
}

/// Risk verdict attached to each search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Tier
    pub risk_level: RiskLevel,
    /// Fixed explanation for the tier
    pub message: &'static str,
    /// Presentation tag for the tier
    pub color: RiskColor,
}

impl From<OilType> for RiskAssessment {
    fn from(oil: OilType) -> Self {
        oil.risk_level().assessment()
    }
}

/// Classify an oil label into a risk verdict
///
/// Total: every input yields a verdict. Surrounding whitespace and letter case
/// are ignored; anything outside the oil catalog is `Unknown`.
#[must_use]
pub fn classify(oil_type: &str) -> RiskAssessment {
    OilType::from_label_insensitive(oil_type)
        .map_or_else(|| RiskLevel::Unknown.assessment(), RiskAssessment::from)
}
