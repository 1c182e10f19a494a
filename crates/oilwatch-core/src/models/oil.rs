// ABOUTME: Closed enumeration of the fourteen cooking-oil labels accepted by the registry
// ABOUTME: Canonical label parsing, case-insensitive lookup, and the oil-to-risk-tier mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::risk::RiskLevel;
use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Cooking oil declared by a restaurant
///
/// Serialized using the canonical, case-sensitive label (`"Mixed/Other"` for
/// [`OilType::MixedOther`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OilType {
    /// Peanut oil
    Peanut,
    /// Canola oil
    Canola,
    /// Generic vegetable oil
    Vegetable,
    /// Olive oil
    Olive,
    /// Coconut oil
    Coconut,
    /// Sunflower oil
    Sunflower,
    /// Sesame oil
    Sesame,
    /// Avocado oil
    Avocado,
    /// Grapeseed oil
    Grapeseed,
    /// Walnut oil
    Walnut,
    /// Almond oil
    Almond,
    /// Corn oil
    Corn,
    /// Soybean oil
    Soybean,
    /// Blend or unspecified oil
    #[serde(rename = "Mixed/Other")]
    MixedOther,
}

impl OilType {
    /// Every oil type, in catalog order
    pub const ALL: [Self; 14] = [
        Self::Peanut,
        Self::Canola,
        Self::Vegetable,
        Self::Olive,
        Self::Coconut,
        Self::Sunflower,
        Self::Sesame,
        Self::Avocado,
        Self::Grapeseed,
        Self::Walnut,
        Self::Almond,
        Self::Corn,
        Self::Soybean,
        Self::MixedOther,
    ];

    /// Canonical label, as stored and as accepted on submission
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Peanut => "Peanut",
            Self::Canola => "Canola",
            Self::Vegetable => "Vegetable",
            Self::Olive => "Olive",
            Self::Coconut => "Coconut",
            Self::Sunflower => "Sunflower",
            Self::Sesame => "Sesame",
            Self::Avocado => "Avocado",
            Self::Grapeseed => "Grapeseed",
            Self::Walnut => "Walnut",
            Self::Almond => "Almond",
            Self::Corn => "Corn",
            Self::Soybean => "Soybean",
            Self::MixedOther => "Mixed/Other",
        }
    }

    /// Exact, case-sensitive match against the canonical labels
    #[must_use]
    pub fn from_canonical(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|oil| oil.as_str() == label)
    }

    /// Lenient lookup: surrounding whitespace is ignored and case is folded
    #[must_use]
    pub fn from_label_insensitive(label: &str) -> Option<Self> {
        let folded = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|oil| oil.as_str().to_lowercase() == folded)
    }

    /// Allergy-risk tier for this oil
    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        match self {
            Self::Peanut => RiskLevel::High,
            Self::Vegetable | Self::MixedOther => RiskLevel::Medium,
            Self::Canola
            | Self::Olive
            | Self::Coconut
            | Self::Sunflower
            | Self::Sesame
            | Self::Avocado
            | Self::Grapeseed
            | Self::Walnut
            | Self::Almond
            | Self::Corn
            | Self::Soybean => RiskLevel::Low,
        }
    }
}

impl Display for OilType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OilType {
    type Err = RegistryError;

    /// Parses a submitted label: trimmed, then matched case-sensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_canonical(trimmed).ok_or_else(|| RegistryError::InvalidOilType {
            value: trimmed.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_labels_are_unique_and_round_trip() {
        for oil in OilType::ALL {
            assert_eq!(OilType::from_canonical(oil.as_str()), Some(oil));
        }
        let mut labels: Vec<_> = OilType::ALL.iter().map(OilType::as_str).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 14);
    }

    #[test]
    fn test_from_str_trims_but_stays_case_sensitive() {
        assert_eq!(" Peanut ".parse::<OilType>().ok(), Some(OilType::Peanut));
        assert!(matches!(
            "peanut".parse::<OilType>(),
            Err(RegistryError::InvalidOilType { value }) if value == "peanut"
        ));
    }

    #[test]
    fn test_mixed_other_serde_label() {
        let json = serde_json::to_string(&OilType::MixedOther).unwrap();
        assert_eq!(json, "\"Mixed/Other\"");
        let parsed: OilType = serde_json::from_str("\"Mixed/Other\"").unwrap();
        assert_eq!(parsed, OilType::MixedOther);
    }

    #[test]
    fn test_insensitive_lookup() {
        assert_eq!(
            OilType::from_label_insensitive("  mIXED/other\t"),
            Some(OilType::MixedOther)
        );
        assert_eq!(OilType::from_label_insensitive("ketchup"), None);
        assert_eq!(OilType::from_label_insensitive(""), None);
    }
}
