// ABOUTME: Ordered rule cascade assigning one training-intensity category per run
// ABOUTME: Race, VO2 max, threshold, recovery, endurance, general aerobic, then Other as fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classification rule cascade
//!
//! Rule conditions overlap, so the first rule that fires in
//! [`CategoryLabel::PRECEDENCE`] order wins. Higher-intensity categories are
//! checked first: a short, fast interval session also satisfies the recovery
//! distance bound and must still be labelled as intervals.
//!
//! Heart-rate percentages are zero when the record has no heart-rate data or
//! the maximum heart rate is zero. A zero average percentage never qualifies
//! as Recovery.

use crate::config::RuleThresholds;
use crate::personal_bests::PersonalBestRegistry;
use pfitz_core::constants::units::PERCENTAGE_MULTIPLIER;
use pfitz_core::models::{ActivityRecord, BestEffortDistance, CategoryLabel};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Heart rate of a run as a percentage of the athlete's maximum
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeartRateIntensity {
    /// Average heart rate as % of max (0 when no data)
    pub average_percent: f64,
    /// Peak heart rate as % of max (0 when no data)
    pub max_percent: f64,
}

impl HeartRateIntensity {
    /// Normalize a record's heart rates against `max_hr` bpm
    #[must_use]
    pub fn of(record: &ActivityRecord, max_hr: u32) -> Self {
        Self {
            average_percent: percent_of_max(record.average_heartrate(), max_hr),
            max_percent: percent_of_max(record.max_heartrate(), max_hr),
        }
    }
}

fn percent_of_max(bpm: Option<f64>, max_hr: u32) -> f64 {
    match bpm {
        Some(bpm) if bpm > 0.0 && max_hr > 0 => bpm / f64::from(max_hr) * PERCENTAGE_MULTIPLIER,
        _ => 0.0,
    }
}

/// Whether a best-effort pace is within `tolerance` of a known pace
///
/// Inapplicable (false) when the effort is absent or the known pace is unset.
fn within_tolerance(effort: Option<f64>, known: f64, tolerance: f64) -> bool {
    known > 0.0 && effort.is_some_and(|pace| pace <= known + tolerance)
}

/// Full result of running the cascade on one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEvaluation {
    /// Winning category
    pub category: CategoryLabel,
    /// Normalized heart rates used by the rules
    pub intensity: HeartRateIntensity,
    /// Every category whose raw condition holds, in precedence order
    ///
    /// Always ends with `Other`.
    pub matched: Vec<CategoryLabel>,
}

/// Rule cascade parameterized by its thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RuleEngine {
    thresholds: RuleThresholds,
}

impl RuleEngine {
    /// Engine using the given thresholds
    #[must_use]
    pub const fn new(thresholds: RuleThresholds) -> Self {
        Self { thresholds }
    }

    /// Label one record; total and side-effect free
    #[must_use]
    pub fn classify(
        &self,
        record: &ActivityRecord,
        registry: &PersonalBestRegistry,
        max_hr: u32,
    ) -> CategoryLabel {
        let intensity = HeartRateIntensity::of(record, max_hr);
        let category = CategoryLabel::PRECEDENCE
            .into_iter()
            .find(|label| self.rule_fires(*label, record, registry, &intensity))
            .unwrap_or(CategoryLabel::Other);

        trace!(
            distance_km = record.distance_km(),
            duration_min = record.duration_min(),
            avg_hr_pct = intensity.average_percent,
            max_hr_pct = intensity.max_percent,
            category = category.as_str(),
            "Classified run"
        );
        category
    }

    /// Evaluate every rule, reporting the winner and all raw matches
    #[must_use]
    pub fn evaluate(
        &self,
        record: &ActivityRecord,
        registry: &PersonalBestRegistry,
        max_hr: u32,
    ) -> RuleEvaluation {
        let intensity = HeartRateIntensity::of(record, max_hr);
        let matched: Vec<CategoryLabel> = CategoryLabel::PRECEDENCE
            .into_iter()
            .filter(|label| self.rule_fires(*label, record, registry, &intensity))
            .collect();

        RuleEvaluation {
            category: matched.first().copied().unwrap_or(CategoryLabel::Other),
            intensity,
            matched,
        }
    }

    fn rule_fires(
        &self,
        label: CategoryLabel,
        record: &ActivityRecord,
        registry: &PersonalBestRegistry,
        intensity: &HeartRateIntensity,
    ) -> bool {
        match label {
            CategoryLabel::Race => self.is_race(record, registry),
            CategoryLabel::Vo2MaxIntervals => self.is_vo2_max_intervals(record, registry, intensity),
            CategoryLabel::LactateThreshold => {
                self.is_lactate_threshold(record, registry, intensity)
            }
            CategoryLabel::Recovery => self.is_recovery(record, intensity),
            CategoryLabel::Endurance => self.is_endurance(record),
            CategoryLabel::GeneralAerobic => self.is_general_aerobic(record, intensity),
            CategoryLabel::Other => true,
        }
    }

    /// 5 km or 10 km best effort close to the known race pace
    fn is_race(&self, record: &ActivityRecord, registry: &PersonalBestRegistry) -> bool {
        let tolerance = self.thresholds.race_pace_tolerance;
        within_tolerance(
            record.best_effort(BestEffortDistance::FiveKilometers),
            registry.known_5k_pace(),
            tolerance,
        ) || within_tolerance(
            record.best_effort(BestEffortDistance::TenKilometers),
            registry.known_10k_pace(),
            tolerance,
        )
    }

    /// Near-maximal heart rate, or a 1 km best effort near known 5 km pace
    fn is_vo2_max_intervals(
        &self,
        record: &ActivityRecord,
        registry: &PersonalBestRegistry,
        intensity: &HeartRateIntensity,
    ) -> bool {
        intensity.max_percent >= self.thresholds.vo2_max_hr_percent
            || within_tolerance(
                record.best_effort(BestEffortDistance::OneKilometer),
                registry.known_5k_pace(),
                self.thresholds.vo2_pace_tolerance,
            )
    }

    /// High peak heart rate AND a 2 mile best effort near known 10 km pace
    fn is_lactate_threshold(
        &self,
        record: &ActivityRecord,
        registry: &PersonalBestRegistry,
        intensity: &HeartRateIntensity,
    ) -> bool {
        intensity.max_percent >= self.thresholds.threshold_max_hr_percent
            && within_tolerance(
                record.best_effort(BestEffortDistance::TwoMiles),
                registry.known_10k_pace(),
                self.thresholds.threshold_pace_tolerance,
            )
    }

    fn is_recovery(&self, record: &ActivityRecord, intensity: &HeartRateIntensity) -> bool {
        record.distance_km() <= self.thresholds.recovery_max_distance_km
            && intensity.average_percent > 0.0
            && intensity.average_percent < self.thresholds.recovery_avg_hr_percent_ceiling
    }

    fn is_endurance(&self, record: &ActivityRecord) -> bool {
        record.distance_km() >= self.thresholds.endurance_min_distance_km
            && record.duration_min() >= self.thresholds.endurance_min_duration_min
    }

    fn is_general_aerobic(&self, record: &ActivityRecord, intensity: &HeartRateIntensity) -> bool {
        let t = &self.thresholds;
        (t.aerobic_min_distance_km..t.aerobic_max_distance_km).contains(&record.distance_km())
            && record.duration_min() >= t.aerobic_min_duration_min
            && (t.aerobic_avg_hr_percent_floor..=t.aerobic_avg_hr_percent_ceiling)
                .contains(&intensity.average_percent)
    }
}

/// Label one record with default thresholds
#[must_use]
pub fn classify(
    record: &ActivityRecord,
    registry: &PersonalBestRegistry,
    max_hr: u32,
) -> CategoryLabel {
    RuleEngine::default().classify(record, registry, max_hr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfitz_core::models::ActivityRecordBuilder;

    const MAX_HR: u32 = 191;

    fn registry() -> PersonalBestRegistry {
        PersonalBestRegistry::derive(&[], 4.0, 4.2)
    }

    #[test]
    fn test_heart_rate_percentages() {
        let record = ActivityRecordBuilder::new(8.0, 40.0)
            .average_heartrate(150)
            .max_heartrate(191)
            .build();
        let intensity = HeartRateIntensity::of(&record, MAX_HR);
        assert!((intensity.max_percent - 100.0).abs() < 1e-9);
        assert!((intensity.average_percent - 78.534_031).abs() < 1e-5);
    }

    #[test]
    fn test_fractional_heart_rate_is_not_rounded() {
        // 133.6 / 191 = 69.95%, under the recovery ceiling
        let record = ActivityRecordBuilder::new(6.0, 36.0)
            .average_heartrate(133.6)
            .build();
        let intensity = HeartRateIntensity::of(&record, MAX_HR);
        assert!(intensity.average_percent < 70.0);
        assert_eq!(
            classify(&record, &registry(), MAX_HR),
            CategoryLabel::Recovery
        );
    }

    #[test]
    fn test_zero_max_hr_suppresses_percentages() {
        let record = ActivityRecordBuilder::new(5.0, 30.0)
            .average_heartrate(120)
            .max_heartrate(150)
            .build();
        assert_eq!(
            HeartRateIntensity::of(&record, 0),
            HeartRateIntensity::default()
        );
    }

    #[test]
    fn test_threshold_requires_both_conditions() {
        // 2 mile effort fast enough, max HR only 84%
        let record = ActivityRecordBuilder::new(10.0, 48.0)
            .max_heartrate(160)
            .best_effort(BestEffortDistance::TwoMiles, 4.5)
            .build();
        assert_ne!(
            classify(&record, &registry(), MAX_HR),
            CategoryLabel::LactateThreshold
        );

        let record = ActivityRecordBuilder::new(10.0, 48.0)
            .max_heartrate(170)
            .best_effort(BestEffortDistance::TwoMiles, 4.5)
            .build();
        assert_eq!(
            classify(&record, &registry(), MAX_HR),
            CategoryLabel::LactateThreshold
        );
    }

    #[test]
    fn test_recovery_ceiling_is_exclusive() {
        // 70% of 200 bpm exactly
        let record = ActivityRecordBuilder::new(6.0, 36.0)
            .average_heartrate(140)
            .build();
        let label = classify(&record, &registry(), 200);
        assert_eq!(label, CategoryLabel::GeneralAerobic);
    }

    #[test]
    fn test_evaluate_lists_all_matches() {
        let record = ActivityRecordBuilder::new(5.0, 20.0)
            .average_heartrate(120)
            .best_effort(BestEffortDistance::FiveKilometers, 4.0)
            .build();
        let evaluation = RuleEngine::default().evaluate(&record, &registry(), MAX_HR);
        assert_eq!(evaluation.category, CategoryLabel::Race);
        assert_eq!(
            evaluation.matched,
            vec![
                CategoryLabel::Race,
                CategoryLabel::Recovery,
                CategoryLabel::Other
            ]
        );
    }

    #[test]
    fn test_overridden_tolerance_changes_race_boundary() {
        let record = ActivityRecordBuilder::new(5.0, 21.5)
            .best_effort(BestEffortDistance::FiveKilometers, 4.3)
            .build();
        assert_ne!(
            classify(&record, &registry(), MAX_HR),
            CategoryLabel::Race
        );

        let engine = RuleEngine::new(RuleThresholds {
            race_pace_tolerance: 0.35,
            ..RuleThresholds::default()
        });
        assert_eq!(
            engine.classify(&record, &registry(), MAX_HR),
            CategoryLabel::Race
        );
    }
}
