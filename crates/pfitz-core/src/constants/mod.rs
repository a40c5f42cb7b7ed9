// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Rule-cascade thresholds, unit conversions, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Classification thresholds live in [`classification`]; they are
//! the defaults for the overridable configuration in `pfitz-intelligence`.

/// Training-intensity classification thresholds
pub mod classification;

/// Environment variable names read by the configuration layer
pub mod env_config;

/// Unit conversion and measurement constants
pub mod units {
    /// Percentage multiplier
    pub const PERCENTAGE_MULTIPLIER: f64 = 100.0;
    /// Kilometers in two statute miles
    pub const TWO_MILES_KM: f64 = 3.218_688;
}

/// Default limits
pub mod limits {
    /// Highest plausible maximum heart rate accepted by configuration (bpm)
    pub const MAX_PLAUSIBLE_HEART_RATE_BPM: u32 = 250;
    /// Allowed gap between a record's reported pace and duration / distance (min/km)
    pub const PACE_CONSISTENCY_TOLERANCE: f64 = 0.05;
    /// Number of recent classifications shown in reports
    pub const DEFAULT_RECENT_RUNS: usize = 10;
    /// Number of recent "Other" runs listed for investigation
    pub const OTHER_RUNS_TO_INVESTIGATE: usize = 5;
    /// Decimal places used when deriving pace from duration and distance
    pub const PACE_DECIMALS: i32 = 2;
    /// Decimal places of the per-category means in summaries
    pub const SUMMARY_DECIMALS: i32 = 2;
}

/// Training volume targets
pub mod volume {
    /// Weekly distance target of a Pfitzinger base-building block (km)
    pub const BASE_WEEKLY_TARGET_KM: f64 = 48.0;
    /// Trailing weeks averaged for the current weekly volume
    pub const RECENT_WEEKS: usize = 4;
    /// Trailing runs averaged for the current pace
    pub const CURRENT_PACE_RUNS: usize = 5;
}
