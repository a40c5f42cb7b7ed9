// ABOUTME: Personal-best registry holding known race paces and paces tracked from a batch
// ABOUTME: Tracked bests are the fastest 5K and 10K best efforts observed across all records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pfitz_core::models::{ActivityRecord, BestEffortDistance};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Known and tracked personal-best paces for one batch
///
/// Known paces are asserted by configuration; tracked paces are derived from
/// the batch and stay `None` when no record has an effort at that distance.
/// The registry is built once per batch and is read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalBestRegistry {
    known_5k_pace: f64,
    known_10k_pace: f64,
    tracked_5k_pace: Option<f64>,
    tracked_10k_pace: Option<f64>,
}

impl PersonalBestRegistry {
    /// Derive tracked bests from `batch`
    ///
    /// Pure function of its inputs: deriving twice from the same batch yields
    /// identical registries.
    #[must_use]
    pub fn derive(batch: &[ActivityRecord], known_5k_pace: f64, known_10k_pace: f64) -> Self {
        let registry = Self {
            known_5k_pace,
            known_10k_pace,
            tracked_5k_pace: fastest_effort(batch, BestEffortDistance::FiveKilometers),
            tracked_10k_pace: fastest_effort(batch, BestEffortDistance::TenKilometers),
        };

        debug!(
            records = batch.len(),
            known_5k_pace,
            known_10k_pace,
            tracked_5k_pace = ?registry.tracked_5k_pace,
            tracked_10k_pace = ?registry.tracked_10k_pace,
            "Derived personal-best registry"
        );
        registry
    }

    /// Known 5 km race pace (min/km)
    #[must_use]
    pub const fn known_5k_pace(&self) -> f64 {
        self.known_5k_pace
    }

    /// Known 10 km race pace (min/km)
    #[must_use]
    pub const fn known_10k_pace(&self) -> f64 {
        self.known_10k_pace
    }

    /// Fastest 5 km best effort in the batch
    #[must_use]
    pub const fn tracked_5k_pace(&self) -> Option<f64> {
        self.tracked_5k_pace
    }

    /// Fastest 10 km best effort in the batch
    #[must_use]
    pub const fn tracked_10k_pace(&self) -> Option<f64> {
        self.tracked_10k_pace
    }

    /// Known pace for a race distance; `None` for distances without a known PB
    #[must_use]
    pub const fn known_pace(&self, distance: BestEffortDistance) -> Option<f64> {
        match distance {
            BestEffortDistance::FiveKilometers => Some(self.known_5k_pace),
            BestEffortDistance::TenKilometers => Some(self.known_10k_pace),
            BestEffortDistance::OneKilometer | BestEffortDistance::TwoMiles => None,
        }
    }

    /// Tracked pace for a race distance; `None` when untracked
    #[must_use]
    pub const fn tracked_pace(&self, distance: BestEffortDistance) -> Option<f64> {
        match distance {
            BestEffortDistance::FiveKilometers => self.tracked_5k_pace,
            BestEffortDistance::TenKilometers => self.tracked_10k_pace,
            BestEffortDistance::OneKilometer | BestEffortDistance::TwoMiles => None,
        }
    }

    /// Emit the registry at `info` level, one event per distance
    pub fn log_summary(&self) {
        for distance in [
            BestEffortDistance::FiveKilometers,
            BestEffortDistance::TenKilometers,
        ] {
            let known = self.known_pace(distance);
            match self.tracked_pace(distance) {
                Some(tracked) => info!(
                    distance = distance.label(),
                    known_pace = ?known,
                    tracked_pace = tracked,
                    "Personal best"
                ),
                None => info!(
                    distance = distance.label(),
                    known_pace = ?known,
                    "Personal best (tracked best not available)"
                ),
            }
        }
    }
}

/// Minimum (fastest) best-effort pace for `distance` across the batch
fn fastest_effort(batch: &[ActivityRecord], distance: BestEffortDistance) -> Option<f64> {
    batch
        .iter()
        .filter_map(|record| record.best_effort(distance))
        .filter(|pace| pace.is_finite())
        .reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfitz_core::models::ActivityRecordBuilder;

    fn run_with(distance: BestEffortDistance, pace: f64) -> ActivityRecord {
        ActivityRecordBuilder::new(10.0, 50.0)
            .best_effort(distance, pace)
            .build()
    }

    #[test]
    fn test_tracked_is_minimum_pace() {
        let batch = vec![
            run_with(BestEffortDistance::FiveKilometers, 4.6),
            run_with(BestEffortDistance::FiveKilometers, 4.3),
            ActivityRecordBuilder::new(6.0, 33.0).build(),
            run_with(BestEffortDistance::FiveKilometers, 4.9),
        ];

        let registry = PersonalBestRegistry::derive(&batch, 4.0, 4.2);
        assert_eq!(registry.tracked_5k_pace(), Some(4.3));
        assert_eq!(registry.tracked_10k_pace(), None);
    }

    #[test]
    fn test_empty_batch_leaves_tracked_undefined() {
        let registry = PersonalBestRegistry::derive(&[], 4.0, 4.2);
        assert_eq!(registry.tracked_5k_pace(), None);
        assert_eq!(registry.tracked_10k_pace(), None);
        assert!((registry.known_5k_pace() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_known_pace_only_for_race_distances() {
        let registry = PersonalBestRegistry::derive(&[], 4.0, 4.2);
        assert_eq!(registry.known_pace(BestEffortDistance::OneKilometer), None);
        assert_eq!(
            registry.known_pace(BestEffortDistance::TenKilometers),
            Some(4.2)
        );
    }
}
