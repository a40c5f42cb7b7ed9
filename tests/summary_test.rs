// ABOUTME: Integration tests for per-category summaries and training insights
// ABOUTME: Validates counts, means over present values, group shares, weekly volume, and PB progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{classifier, sample_training_log};
use chrono::NaiveDate;
use pfitz_classifier::intelligence::{
    summarize, LabeledActivity, PersonalBestProgression, TrainingDistribution, TrainingVolume,
};
use pfitz_classifier::models::{ActivityRecordBuilder, BestEffortDistance, CategoryLabel};

fn recovery_run(distance_km: f64, hr: u32) -> LabeledActivity {
    LabeledActivity {
        record: ActivityRecordBuilder::new(distance_km, distance_km * 6.5)
            .average_heartrate(hr)
            .build(),
        category: CategoryLabel::Recovery,
    }
}

#[test]
fn test_three_recovery_runs() {
    let batch = vec![
        recovery_run(5.0, 120),
        recovery_run(6.0, 124),
        recovery_run(7.0, 128),
    ];

    let summary = summarize(&batch);
    assert_eq!(summary.len(), 1);

    let stats = &summary[&CategoryLabel::Recovery];
    assert_eq!(stats.count, 3);
    assert!((stats.mean_distance_km.unwrap() - 6.0).abs() < 1e-9);
    assert!((stats.mean_average_heartrate.unwrap() - 124.0).abs() < 1e-9);
    assert!(!summary.contains_key(&CategoryLabel::Race));
    assert!(!summary.contains_key(&CategoryLabel::Other));
}

#[test]
fn test_counts_add_up_to_batch_size() {
    let classified = classifier().classify_all(&sample_training_log());
    let summary = summarize(&classified.activities);

    let total: usize = summary.values().map(|stats| stats.count).sum();
    assert_eq!(total, classified.len());
    assert_eq!(summary[&CategoryLabel::GeneralAerobic].count, 2);
}

#[test]
fn test_heart_rate_mean_ignores_runs_without_data() {
    let classified = classifier().classify_all(&sample_training_log());
    let summary = summarize(&classified.activities);

    // The only endurance run has no heart-rate data
    assert_eq!(
        summary[&CategoryLabel::Endurance].mean_average_heartrate,
        None
    );
    // The only "Other" run reports 0 bpm, which counts as missing
    assert_eq!(summary[&CategoryLabel::Other].mean_average_heartrate, None);
    assert_eq!(summary[&CategoryLabel::Other].mean_distance_km, Some(6.0));
}

#[test]
fn test_training_distribution_for_sample_log() {
    let classified = classifier().classify_all(&sample_training_log());
    let distribution = TrainingDistribution::from_activities(&classified.activities);

    assert_eq!(distribution.total_runs, 8);
    assert_eq!(distribution.base_training.count, 4);
    assert!((distribution.base_training.percentage - 50.0).abs() < 1e-9);
    assert_eq!(distribution.quality_sessions.count, 2);
    assert_eq!(distribution.races.count, 1);
    assert_eq!(distribution.unclassified.count, 1);
    assert_eq!(
        distribution.needs_investigation[0].record.name(),
        Some("Lunch run")
    );

    let order: Vec<_> = distribution.shares.iter().map(|s| s.category).collect();
    assert_eq!(order, CategoryLabel::INTENSITY_ORDER.to_vec());
}

#[test]
fn test_weekly_volume_for_sample_log() {
    let volume = TrainingVolume::from_records(&sample_training_log());

    // 2024-05-01 is a Wednesday: the log spans the weeks of 04-29 and 05-06
    let weeks: Vec<_> = volume
        .weeks
        .iter()
        .map(|week| (week.week_start, week.runs, week.distance_km))
        .collect();
    assert_eq!(
        weeks,
        vec![
            (NaiveDate::from_ymd_opt(2024, 4, 29).unwrap(), 4, 47.0),
            (NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(), 4, 30.5),
        ]
    );
    assert!((volume.mean_weekly_km.unwrap() - 38.75).abs() < 1e-9);
    assert!((volume.gap_to_target_km.unwrap() - 9.25).abs() < 1e-9);
    assert!((volume.median_pace.unwrap() - 5.1).abs() < 1e-9);
}

#[test]
fn test_five_k_progression_for_sample_log() {
    let progression = PersonalBestProgression::from_records(
        &sample_training_log(),
        BestEffortDistance::FiveKilometers,
    );

    let bests: Vec<_> = progression
        .points
        .iter()
        .map(|point| point.best_pace)
        .collect();
    assert_eq!(bests, vec![5.1, 4.0]);
    assert_eq!(progression.improvements().count(), 2);
}
