// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, the reference athlete profile, and a sample training log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pfitz_classifier`

use chrono::NaiveDate;
use pfitz_classifier::intelligence::{AthleteProfile, BatchClassifier, RuleThresholds};
use pfitz_classifier::models::{ActivityRecord, ActivityRecordBuilder, BestEffortDistance};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Known 5K pace of the reference athlete (min/km)
pub const KNOWN_5K: f64 = 4.0;
/// Known 10K pace of the reference athlete (min/km)
pub const KNOWN_10K: f64 = 4.2;
/// Maximum heart rate of the reference athlete (bpm)
pub const MAX_HR: u32 = 191;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference athlete: 20:00 5K, 42:00 10K, max HR 191
pub const fn athlete() -> AthleteProfile {
    AthleteProfile::new(KNOWN_5K, KNOWN_10K, MAX_HR)
}

/// Sequential classifier for the reference athlete with default thresholds
pub fn classifier() -> BatchClassifier {
    BatchClassifier::from_parts(athlete(), RuleThresholds::default())
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

/// Varied training over nine days, oldest first
pub fn sample_training_log() -> Vec<ActivityRecord> {
    vec![
        // Recovery: short, 120 bpm (63%)
        ActivityRecordBuilder::new(6.0, 38.0)
            .name("Recovery jog")
            .date(day(1))
            .average_heartrate(120)
            .max_heartrate(135)
            .build(),
        // General aerobic: 10 km at 145 bpm (76%)
        ActivityRecordBuilder::new(10.0, 52.0)
            .name("Steady 10")
            .date(day(2))
            .average_heartrate(145)
            .max_heartrate(160)
            .best_effort(BestEffortDistance::FiveKilometers, 5.1)
            .build(),
        // VO2 max: 1 km repeat at 3.95
        ActivityRecordBuilder::new(9.0, 45.0)
            .name("5x1k")
            .date(day(3))
            .average_heartrate(155)
            .max_heartrate(178)
            .best_effort(BestEffortDistance::OneKilometer, 3.95)
            .build(),
        // Endurance: long run without a heart-rate strap
        ActivityRecordBuilder::new(22.0, 121.0)
            .name("Long run")
            .date(day(5))
            .build(),
        // Lactate threshold: 2 mile effort at 4.5, peak 170 bpm (89%)
        ActivityRecordBuilder::new(11.0, 55.0)
            .name("Tempo")
            .date(day(6))
            .average_heartrate(158)
            .max_heartrate(170)
            .best_effort(BestEffortDistance::TwoMiles, 4.5)
            .build(),
        // Other: watch lost heart rate
        ActivityRecordBuilder::new(6.0, 30.0)
            .name("Lunch run")
            .date(day(7))
            .average_heartrate(0)
            .build(),
        // Race: parkrun at known 5K pace
        ActivityRecordBuilder::new(5.0, 20.0)
            .name("Parkrun")
            .date(day(8))
            .average_heartrate(176)
            .max_heartrate(181)
            .best_effort(BestEffortDistance::FiveKilometers, 4.0)
            .build(),
        // General aerobic
        ActivityRecordBuilder::new(8.5, 45.0)
            .name("Easy aerobic")
            .date(day(9))
            .average_heartrate(140)
            .max_heartrate(152)
            .build(),
    ]
}

/// Temporary directory that removes itself on drop
pub fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
