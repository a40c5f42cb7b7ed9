// ABOUTME: Default thresholds for the training-intensity rule cascade
// ABOUTME: Pace tolerances against known personal bests plus heart-rate, distance, and duration bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pace tolerances are expressed in min/km and were chosen as fixed
//! second-offsets (10 s, 5 s, 25 s per km) against the athlete's known race
//! paces. Heart-rate values are percentages of the configured maximum.

/// Race detection against known personal bests
pub mod race {
    /// 5 km / 10 km best effort within this many min/km of the known PB (+10 s/km)
    pub const PB_PACE_TOLERANCE: f64 = 0.17;
}

/// VO2 max interval detection
pub mod vo2_max {
    /// Max heart rate percentage that marks an interval session
    pub const MAX_HR_PERCENT_FLOOR: f64 = 95.0;
    /// 1 km best effort within this many min/km of the known 5 km PB (+5 s/km)
    pub const ONE_KM_PACE_TOLERANCE: f64 = 0.083;
}

/// Lactate threshold detection
pub mod lactate_threshold {
    /// Max heart rate percentage required for a threshold session
    pub const MAX_HR_PERCENT_FLOOR: f64 = 85.0;
    /// 2 mile best effort within this many min/km of the known 10 km PB (+25 s/km)
    pub const TWO_MILE_PACE_TOLERANCE: f64 = 0.42;
}

/// Recovery run bounds
pub mod recovery {
    /// Longest distance still considered a recovery run (km, inclusive)
    pub const MAX_DISTANCE_KM: f64 = 8.0;
    /// Average heart rate percentage ceiling (exclusive)
    pub const AVG_HR_PERCENT_CEILING: f64 = 70.0;
}

/// Endurance (long run) bounds
pub mod endurance {
    /// Minimum distance (km, inclusive)
    pub const MIN_DISTANCE_KM: f64 = 12.0;
    /// Minimum moving duration (minutes, inclusive)
    pub const MIN_DURATION_MIN: f64 = 60.0;
}

/// General aerobic run bounds
pub mod general_aerobic {
    /// Minimum distance (km, inclusive)
    pub const MIN_DISTANCE_KM: f64 = 3.0;
    /// Maximum distance (km, exclusive)
    pub const MAX_DISTANCE_KM: f64 = 12.0;
    /// Minimum moving duration (minutes, inclusive)
    pub const MIN_DURATION_MIN: f64 = 15.0;
    /// Average heart rate percentage floor (inclusive)
    pub const AVG_HR_PERCENT_FLOOR: f64 = 70.0;
    /// Average heart rate percentage ceiling (inclusive)
    pub const AVG_HR_PERCENT_CEILING: f64 = 81.0;
}
