// ABOUTME: Training-intensity category labels assigned by the rule cascade
// ABOUTME: Defines precedence order, display order, display names, and parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Training-intensity category for a single run
///
/// Variants are declared in rule precedence order, so the derived `Ord`
/// matches the order in which the cascade evaluates them. Use
/// [`CategoryLabel::INTENSITY_ORDER`] for reports, which list categories from
/// easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryLabel {
    /// Best effort close to a known race personal best
    #[serde(rename = "Race", alias = "race")]
    Race,
    /// Near-maximal heart rate or a very fast kilometer
    #[serde(rename = "VO₂ Max Intervals", alias = "vo2_max_intervals")]
    Vo2MaxIntervals,
    /// Sustained hard effort at threshold heart rate and pace
    #[serde(rename = "Lactate Threshold", alias = "lactate_threshold")]
    LactateThreshold,
    /// Short run at low heart rate
    #[serde(rename = "Recovery", alias = "recovery")]
    Recovery,
    /// Long run
    #[serde(rename = "Endurance", alias = "endurance")]
    Endurance,
    /// Moderate-distance run at aerobic heart rate
    #[serde(rename = "General Aerobic", alias = "general_aerobic")]
    GeneralAerobic,
    /// No rule matched
    #[serde(rename = "Other", alias = "other")]
    Other,
}

impl CategoryLabel {
    /// Order in which the classification rules are evaluated
    pub const PRECEDENCE: [Self; 7] = [
        Self::Race,
        Self::Vo2MaxIntervals,
        Self::LactateThreshold,
        Self::Recovery,
        Self::Endurance,
        Self::GeneralAerobic,
        Self::Other,
    ];

    /// Display order for reports, from easiest to hardest, with `Other` last
    pub const INTENSITY_ORDER: [Self; 7] = [
        Self::Recovery,
        Self::GeneralAerobic,
        Self::Endurance,
        Self::LactateThreshold,
        Self::Vo2MaxIntervals,
        Self::Race,
        Self::Other,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Race => "Race",
            Self::Vo2MaxIntervals => "VO₂ Max Intervals",
            Self::LactateThreshold => "Lactate Threshold",
            Self::Recovery => "Recovery",
            Self::Endurance => "Endurance",
            Self::GeneralAerobic => "General Aerobic",
            Self::Other => "Other",
        }
    }

    /// Stable snake_case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Race => "race",
            Self::Vo2MaxIntervals => "vo2_max_intervals",
            Self::LactateThreshold => "lactate_threshold",
            Self::Recovery => "recovery",
            Self::Endurance => "endurance",
            Self::GeneralAerobic => "general_aerobic",
            Self::Other => "other",
        }
    }

    /// Aerobic base-building categories (general aerobic, recovery, endurance)
    #[must_use]
    pub const fn is_base_training(self) -> bool {
        matches!(
            self,
            Self::GeneralAerobic | Self::Recovery | Self::Endurance
        )
    }

    /// Quality sessions (lactate threshold, VO2 max intervals)
    #[must_use]
    pub const fn is_quality_session(self) -> bool {
        matches!(self, Self::LactateThreshold | Self::Vo2MaxIntervals)
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl FromStr for CategoryLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::PRECEDENCE
            .into_iter()
            .find(|label| {
                label.display_name().eq_ignore_ascii_case(trimmed)
                    || label.as_str().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown run category: '{trimmed}'. Valid options: race, vo2_max_intervals, \
                     lactate_threshold, recovery, endurance, general_aerobic, other"
                ))
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_follows_precedence() {
        let mut labels = CategoryLabel::INTENSITY_ORDER;
        labels.sort();
        assert_eq!(labels, CategoryLabel::PRECEDENCE);
    }

    #[test]
    fn test_parse_display_and_snake_case() {
        assert_eq!(
            "VO₂ Max Intervals".parse::<CategoryLabel>().unwrap(),
            CategoryLabel::Vo2MaxIntervals
        );
        assert_eq!(
            "general_aerobic".parse::<CategoryLabel>().unwrap(),
            CategoryLabel::GeneralAerobic
        );
        assert!("tempo".parse::<CategoryLabel>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&CategoryLabel::LactateThreshold).unwrap();
        assert_eq!(json, "\"Lactate Threshold\"");
        let parsed: CategoryLabel = serde_json::from_str("\"recovery\"").unwrap();
        assert_eq!(parsed, CategoryLabel::Recovery);
    }

    #[test]
    fn test_training_groups() {
        let base: Vec<_> = CategoryLabel::PRECEDENCE
            .into_iter()
            .filter(|label| label.is_base_training())
            .collect();
        assert_eq!(
            base,
            vec![
                CategoryLabel::Recovery,
                CategoryLabel::Endurance,
                CategoryLabel::GeneralAerobic
            ]
        );
        assert!(CategoryLabel::Vo2MaxIntervals.is_quality_session());
        assert!(!CategoryLabel::Race.is_quality_session());
    }
}
