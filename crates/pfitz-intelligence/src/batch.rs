// ABOUTME: Batch classifier deriving the personal-best registry once, then labelling every record
// ABOUTME: Sequential and rayon-parallel paths both preserve input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{AthleteProfile, ClassifierConfig, RuleThresholds};
use crate::personal_bests::PersonalBestRegistry;
use crate::rule_engine::RuleEngine;
use pfitz_core::models::{ActivityRecord, CategoryLabel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A record paired with its assigned category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledActivity {
    /// Source record, unchanged
    #[serde(flatten)]
    pub record: ActivityRecord,
    /// Assigned category
    #[serde(rename = "run_type")]
    pub category: CategoryLabel,
}

/// Output of classifying one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedBatch {
    /// Registry the batch was classified against
    pub registry: PersonalBestRegistry,
    /// Labeled records in input order
    pub activities: Vec<LabeledActivity>,
}

impl ClassifiedBatch {
    /// Number of classified records
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// True when the batch was empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Labels in input order
    pub fn labels(&self) -> impl Iterator<Item = CategoryLabel> + '_ {
        self.activities.iter().map(|activity| activity.category)
    }

    /// Number of records per category; absent categories are not listed
    #[must_use]
    pub fn counts(&self) -> BTreeMap<CategoryLabel, usize> {
        let mut counts = BTreeMap::new();
        for label in self.labels() {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }
}

/// Applies the rule engine to every record of a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchClassifier {
    athlete: AthleteProfile,
    engine: RuleEngine,
    parallel: bool,
}

impl BatchClassifier {
    /// Classifier for a validated configuration
    #[must_use]
    pub const fn new(config: &ClassifierConfig) -> Self {
        Self {
            athlete: config.athlete,
            engine: RuleEngine::new(config.thresholds),
            parallel: config.parallel,
        }
    }

    /// Classifier from an athlete profile and explicit thresholds
    #[must_use]
    pub const fn from_parts(athlete: AthleteProfile, thresholds: RuleThresholds) -> Self {
        Self {
            athlete,
            engine: RuleEngine::new(thresholds),
            parallel: false,
        }
    }

    /// Classify using the path selected by configuration
    #[must_use]
    pub fn classify(&self, batch: &[ActivityRecord]) -> ClassifiedBatch {
        if self.parallel {
            self.classify_all_parallel(batch)
        } else {
            self.classify_all(batch)
        }
    }

    /// Classify sequentially, preserving input order
    #[must_use]
    pub fn classify_all(&self, batch: &[ActivityRecord]) -> ClassifiedBatch {
        let registry = self.derive_registry(batch);
        let max_hr = self.athlete.max_heart_rate_bpm;

        let activities = batch
            .iter()
            .map(|record| self.label(record, &registry, max_hr))
            .collect();

        Self::finish(registry, activities)
    }

    /// Classify on the rayon thread pool; output order matches input order
    #[must_use]
    pub fn classify_all_parallel(&self, batch: &[ActivityRecord]) -> ClassifiedBatch {
        let registry = self.derive_registry(batch);
        let max_hr = self.athlete.max_heart_rate_bpm;

        let activities = batch
            .par_iter()
            .map(|record| self.label(record, &registry, max_hr))
            .collect();

        Self::finish(registry, activities)
    }

    fn derive_registry(&self, batch: &[ActivityRecord]) -> PersonalBestRegistry {
        PersonalBestRegistry::derive(
            batch,
            self.athlete.known_5k_pace_min_per_km,
            self.athlete.known_10k_pace_min_per_km,
        )
    }

    fn label(
        &self,
        record: &ActivityRecord,
        registry: &PersonalBestRegistry,
        max_hr: u32,
    ) -> LabeledActivity {
        LabeledActivity {
            record: record.clone(),
            category: self.engine.classify(record, registry, max_hr),
        }
    }

    fn finish(
        registry: PersonalBestRegistry,
        activities: Vec<LabeledActivity>,
    ) -> ClassifiedBatch {
        let batch = ClassifiedBatch {
            registry,
            activities,
        };

        info!(runs = batch.len(), "Classified batch");
        for (category, count) in batch.counts() {
            debug!(category = category.as_str(), count, "Category count");
        }
        batch
    }
}

/// Classify a batch with default thresholds
///
/// Derives the registry from `batch` once, then labels each record in order.
#[must_use]
pub fn classify_all(
    batch: &[ActivityRecord],
    known_5k_pace: f64,
    known_10k_pace: f64,
    max_hr: u32,
) -> Vec<LabeledActivity> {
    let athlete = AthleteProfile::new(known_5k_pace, known_10k_pace, max_hr);
    BatchClassifier::from_parts(athlete, RuleThresholds::default())
        .classify_all(batch)
        .activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfitz_core::models::{ActivityRecordBuilder, BestEffortDistance};

    fn sample_batch() -> Vec<ActivityRecord> {
        vec![
            ActivityRecordBuilder::new(5.0, 20.0)
                .best_effort(BestEffortDistance::FiveKilometers, 4.0)
                .build(),
            ActivityRecordBuilder::new(14.0, 70.0).build(),
            ActivityRecordBuilder::new(6.0, 36.0)
                .average_heartrate(120)
                .build(),
            ActivityRecordBuilder::new(6.0, 30.0)
                .average_heartrate(0)
                .build(),
        ]
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let labels: Vec<_> = classify_all(&sample_batch(), 4.0, 4.2, 191)
            .into_iter()
            .map(|activity| activity.category)
            .collect();

        assert_eq!(
            labels,
            vec![
                CategoryLabel::Race,
                CategoryLabel::Endurance,
                CategoryLabel::Recovery,
                CategoryLabel::Other
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let classifier =
            BatchClassifier::from_parts(AthleteProfile::new(4.0, 4.2, 191), RuleThresholds::default());
        let batch: Vec<_> = sample_batch().into_iter().cycle().take(64).collect();

        assert_eq!(
            classifier.classify_all(&batch),
            classifier.classify_all_parallel(&batch)
        );
    }

    #[test]
    fn test_records_are_not_modified() {
        let batch = sample_batch();
        let classified = classify_all(&batch, 4.0, 4.2, 191);
        for (source, labeled) in batch.iter().zip(&classified) {
            assert_eq!(source, &labeled.record);
        }
    }

    #[test]
    fn test_counts_skip_absent_categories() {
        let classifier =
            BatchClassifier::from_parts(AthleteProfile::new(4.0, 4.2, 191), RuleThresholds::default());
        let counts = classifier.classify_all(&sample_batch()).counts();
        assert_eq!(counts.len(), 4);
        assert!(!counts.contains_key(&CategoryLabel::GeneralAerobic));
    }
}
