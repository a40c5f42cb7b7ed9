// ABOUTME: Per-category descriptive statistics over a labeled batch
// ABOUTME: Counts plus mean distance, pace, and average heart rate over non-missing values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::batch::LabeledActivity;
use pfitz_core::constants::limits::SUMMARY_DECIMALS;
use pfitz_core::models::CategoryLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for one category
///
/// Means are rounded to two decimals and are `None` when no record in the
/// category has a value for the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryStatistics {
    /// Number of records labelled with the category
    pub count: usize,
    /// Mean distance (km)
    pub mean_distance_km: Option<f64>,
    /// Mean pace (min/km)
    pub mean_pace_min_per_km: Option<f64>,
    /// Mean of average heart rates (bpm); records without heart-rate data are skipped
    pub mean_average_heartrate: Option<f64>,
}

/// Statistics keyed by category, in precedence order
///
/// Categories absent from the batch have no entry.
pub type CategorySummary = BTreeMap<CategoryLabel, CategoryStatistics>;

#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    samples: usize,
}

impl Mean {
    fn push(&mut self, value: f64) {
        if value.is_finite() {
            self.sum += value;
            self.samples += 1;
        }
    }

    fn value(self) -> Option<f64> {
        let scale = 10f64.powi(SUMMARY_DECIMALS);
        (self.samples > 0).then(|| (self.sum / self.samples as f64 * scale).round() / scale)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    count: usize,
    distance: Mean,
    pace: Mean,
    heart_rate: Mean,
}

impl Accumulator {
    fn push(&mut self, activity: &LabeledActivity) {
        let record = &activity.record;
        self.count += 1;
        self.distance.push(record.distance_km());
        self.pace.push(record.pace_min_per_km());
        if let Some(bpm) = record.average_heartrate().filter(|bpm| *bpm > 0.0) {
            self.heart_rate.push(bpm);
        }
    }

    fn finish(self) -> CategoryStatistics {
        CategoryStatistics {
            count: self.count,
            mean_distance_km: self.distance.value(),
            mean_pace_min_per_km: self.pace.value(),
            mean_average_heartrate: self.heart_rate.value(),
        }
    }
}

/// Group a labeled batch by category and compute statistics
#[must_use]
pub fn summarize(labeled: &[LabeledActivity]) -> CategorySummary {
    let mut groups: BTreeMap<CategoryLabel, Accumulator> = BTreeMap::new();
    for activity in labeled {
        groups.entry(activity.category).or_default().push(activity);
    }

    groups
        .into_iter()
        .map(|(category, accumulator)| (category, accumulator.finish()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfitz_core::models::ActivityRecordBuilder;

    fn labeled(distance_km: f64, hr: Option<f64>, category: CategoryLabel) -> LabeledActivity {
        LabeledActivity {
            record: ActivityRecordBuilder::new(distance_km, distance_km * 6.0)
                .average_heartrate_opt(hr)
                .build(),
            category,
        }
    }

    #[test]
    fn test_heart_rate_mean_skips_missing_and_zero() {
        let batch = vec![
            labeled(10.0, Some(150.0), CategoryLabel::GeneralAerobic),
            labeled(8.0, None, CategoryLabel::GeneralAerobic),
            labeled(9.0, Some(0.0), CategoryLabel::GeneralAerobic),
            labeled(11.0, Some(140.0), CategoryLabel::GeneralAerobic),
        ];

        let summary = summarize(&batch);
        let stats = summary[&CategoryLabel::GeneralAerobic];
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean_average_heartrate, Some(145.0));
        assert_eq!(stats.mean_distance_km, Some(9.5));
        assert_eq!(stats.mean_pace_min_per_km, Some(6.0));
    }

    #[test]
    fn test_means_round_to_two_decimals() {
        let batch = vec![
            labeled(5.0, Some(131.2), CategoryLabel::Recovery),
            labeled(5.0, Some(128.9), CategoryLabel::Recovery),
            labeled(6.0, Some(127.0), CategoryLabel::Recovery),
        ];
        let stats = summarize(&batch)[&CategoryLabel::Recovery];
        // 16 / 3 and 387.1 / 3
        assert_eq!(stats.mean_distance_km, Some(5.33));
        assert_eq!(stats.mean_average_heartrate, Some(129.03));
    }

    #[test]
    fn test_no_heart_rate_data_yields_none() {
        let batch = vec![labeled(14.0, None, CategoryLabel::Endurance)];
        let summary = summarize(&batch);
        assert_eq!(summary[&CategoryLabel::Endurance].mean_average_heartrate, None);
    }

    #[test]
    fn test_empty_batch_has_no_entries() {
        assert!(summarize(&[]).is_empty());
    }
}
