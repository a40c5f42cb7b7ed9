// ABOUTME: Activity record model with best-effort paces and a builder
// ABOUTME: Records are immutable inputs; validation enforces the upstream data contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{limits, units};
use crate::errors::{AppError, AppResult};

/// Standard sub-distances for which a run may report a best effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestEffortDistance {
    /// 1 kilometer
    OneKilometer,
    /// 2 statute miles
    TwoMiles,
    /// 5 kilometers
    FiveKilometers,
    /// 10 kilometers
    TenKilometers,
}

impl BestEffortDistance {
    /// All tracked distances, shortest first
    pub const ALL: [Self; 4] = [
        Self::OneKilometer,
        Self::TwoMiles,
        Self::FiveKilometers,
        Self::TenKilometers,
    ];

    /// Length of the distance in kilometers
    #[must_use]
    pub const fn kilometers(self) -> f64 {
        match self {
            Self::OneKilometer => 1.0,
            Self::TwoMiles => units::TWO_MILES_KM,
            Self::FiveKilometers => 5.0,
            Self::TenKilometers => 10.0,
        }
    }

    /// Short human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneKilometer => "1K",
            Self::TwoMiles => "2 mile",
            Self::FiveKilometers => "5K",
            Self::TenKilometers => "10K",
        }
    }

    /// Column name used by activity datasets
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::OneKilometer => "1k_pace_min_per_km",
            Self::TwoMiles => "2_mile_pace_min_per_km",
            Self::FiveKilometers => "5k_pace_min_per_km",
            Self::TenKilometers => "10k_pace_min_per_km",
        }
    }
}

/// Fastest paces (min/km) a run contains over each standard sub-distance
///
/// An absent value means the run contains no qualifying effort at that distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BestEfforts {
    /// Fastest continuous 1 km
    #[serde(
        rename = "1k_pace_min_per_km",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    one_km: Option<f64>,
    /// Fastest continuous 2 miles
    #[serde(
        rename = "2_mile_pace_min_per_km",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    two_mile: Option<f64>,
    /// Fastest continuous 5 km
    #[serde(
        rename = "5k_pace_min_per_km",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    five_km: Option<f64>,
    /// Fastest continuous 10 km
    #[serde(
        rename = "10k_pace_min_per_km",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    ten_km: Option<f64>,
}

impl BestEfforts {
    /// Best-effort pace over `distance`, if the run contains one
    #[must_use]
    pub const fn pace(&self, distance: BestEffortDistance) -> Option<f64> {
        match distance {
            BestEffortDistance::OneKilometer => self.one_km,
            BestEffortDistance::TwoMiles => self.two_mile,
            BestEffortDistance::FiveKilometers => self.five_km,
            BestEffortDistance::TenKilometers => self.ten_km,
        }
    }

    /// Returns a copy with the pace for `distance` set
    #[must_use]
    pub const fn with_pace(mut self, distance: BestEffortDistance, pace: Option<f64>) -> Self {
        match distance {
            BestEffortDistance::OneKilometer => self.one_km = pace,
            BestEffortDistance::TwoMiles => self.two_mile = pace,
            BestEffortDistance::FiveKilometers => self.five_km = pace,
            BestEffortDistance::TenKilometers => self.ten_km = pace,
        }
        self
    }

    /// True when no distance has a recorded best effort
    #[must_use]
    pub fn is_empty(&self) -> bool {
        BestEffortDistance::ALL
            .iter()
            .all(|distance| self.pace(*distance).is_none())
    }
}

/// One observed run
///
/// Fields are private so a record cannot be modified once built; use the
/// accessor methods to read and [`ActivityRecordBuilder`] to construct.
///
/// # Examples
///
/// ```rust
/// use pfitz_core::models::{ActivityRecordBuilder, BestEffortDistance};
///
/// let record = ActivityRecordBuilder::new(5.0, 20.0)
///     .name("Parkrun")
///     .average_heartrate(172)
///     .max_heartrate(186)
///     .best_effort(BestEffortDistance::FiveKilometers, 4.0)
///     .build();
///
/// assert!((record.pace_min_per_km() - 4.0).abs() < f64::EPSILON);
/// assert!(record.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    distance_km: f64,
    duration_min: f64,
    pace_min_per_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_heartrate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_heartrate: Option<f64>,
    #[serde(flatten)]
    best_efforts: BestEfforts,
}

impl ActivityRecord {
    /// Activity title, if known
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Calendar date of the run, if known
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Distance covered in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Moving duration in minutes
    #[must_use]
    pub const fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Average pace in minutes per kilometer
    #[must_use]
    pub const fn pace_min_per_km(&self) -> f64 {
        self.pace_min_per_km
    }

    /// Average heart rate (bpm) as reported; zero means no data
    ///
    /// Kept at full precision. Round only for display.
    #[must_use]
    pub const fn average_heartrate(&self) -> Option<f64> {
        self.average_heartrate
    }

    /// Maximum heart rate (bpm) as reported; zero means no data
    #[must_use]
    pub const fn max_heartrate(&self) -> Option<f64> {
        self.max_heartrate
    }

    /// Best-effort paces contained in this run
    #[must_use]
    pub const fn best_efforts(&self) -> &BestEfforts {
        &self.best_efforts
    }

    /// Best-effort pace for a single distance
    #[must_use]
    pub const fn best_effort(&self, distance: BestEffortDistance) -> Option<f64> {
        self.best_efforts.pace(distance)
    }

    /// True when an average heart rate above zero was recorded
    #[must_use]
    pub fn has_heart_rate_data(&self) -> bool {
        self.average_heartrate.is_some_and(|bpm| bpm > 0.0)
    }

    /// Pace implied by duration and distance
    #[must_use]
    pub fn derived_pace(&self) -> f64 {
        self.duration_min / self.distance_km
    }

    /// Whether the reported pace matches duration / distance within `tolerance` min/km
    #[must_use]
    pub fn pace_is_consistent(&self, tolerance: f64) -> bool {
        (self.pace_min_per_km - self.derived_pace()).abs() <= tolerance
    }

    /// Check the contract upstream collaborators must satisfy
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if distance, duration or pace is not a finite
    /// positive number, if any best-effort pace present is not, or if a heart
    /// rate lies outside 0 to 250 bpm.
    pub fn validate(&self) -> AppResult<()> {
        require_positive("distance_km", self.distance_km)?;
        require_positive("duration_min", self.duration_min)?;
        require_positive("pace_min_per_km", self.pace_min_per_km)?;
        require_heart_rate("average_heartrate", self.average_heartrate)?;
        require_heart_rate("max_heartrate", self.max_heartrate)?;

        for distance in BestEffortDistance::ALL {
            if let Some(pace) = self.best_effort(distance) {
                require_positive(distance.field_name(), pace)?;
            }
        }
        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!(
            "{field} must be a finite positive number, got {value}"
        )))
    }
}

fn require_heart_rate(field: &str, bpm: Option<f64>) -> AppResult<()> {
    let ceiling = f64::from(limits::MAX_PLAUSIBLE_HEART_RATE_BPM);
    match bpm {
        Some(bpm) if !(bpm.is_finite() && (0.0..=ceiling).contains(&bpm)) => {
            Err(AppError::out_of_range(format!(
                "{field} must be between 0 and {ceiling} bpm, got {bpm}"
            )))
        }
        _ => Ok(()),
    }
}

/// Round a derived pace to reporting precision
fn round_pace(pace: f64) -> f64 {
    let scale = 10f64.powi(limits::PACE_DECIMALS);
    (pace * scale).round() / scale
}

/// Builder for [`ActivityRecord`]
///
/// Pace defaults to `duration_min / distance_km` rounded to two decimals.
#[derive(Debug, Clone)]
pub struct ActivityRecordBuilder {
    record: ActivityRecord,
}

impl ActivityRecordBuilder {
    /// Creates a builder with the required distance and duration
    #[must_use]
    pub fn new(distance_km: f64, duration_min: f64) -> Self {
        let pace_min_per_km = if distance_km > 0.0 {
            round_pace(duration_min / distance_km)
        } else {
            0.0
        };

        Self {
            record: ActivityRecord {
                name: None,
                date: None,
                distance_km,
                duration_min,
                pace_min_per_km,
                average_heartrate: None,
                max_heartrate: None,
                best_efforts: BestEfforts::default(),
            },
        }
    }

    /// Sets the activity title
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = Some(name.into());
        self
    }

    /// Sets the activity title (optional)
    #[must_use]
    pub fn name_opt(mut self, name: Option<String>) -> Self {
        self.record.name = name;
        self
    }

    /// Sets the calendar date
    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.record.date = Some(date);
        self
    }

    /// Sets the calendar date (optional)
    #[must_use]
    pub const fn date_opt(mut self, date: Option<NaiveDate>) -> Self {
        self.record.date = date;
        self
    }

    /// Overrides the derived pace with a reported value
    #[must_use]
    pub const fn pace_min_per_km(mut self, pace: f64) -> Self {
        self.record.pace_min_per_km = pace;
        self
    }

    /// Sets the average heart rate
    #[must_use]
    pub fn average_heartrate(mut self, bpm: impl Into<f64>) -> Self {
        self.record.average_heartrate = Some(bpm.into());
        self
    }

    /// Sets the average heart rate (optional)
    #[must_use]
    pub const fn average_heartrate_opt(mut self, bpm: Option<f64>) -> Self {
        self.record.average_heartrate = bpm;
        self
    }

    /// Sets the maximum heart rate
    #[must_use]
    pub fn max_heartrate(mut self, bpm: impl Into<f64>) -> Self {
        self.record.max_heartrate = Some(bpm.into());
        self
    }

    /// Sets the maximum heart rate (optional)
    #[must_use]
    pub const fn max_heartrate_opt(mut self, bpm: Option<f64>) -> Self {
        self.record.max_heartrate = bpm;
        self
    }

    /// Sets the best-effort pace for one distance
    #[must_use]
    pub const fn best_effort(mut self, distance: BestEffortDistance, pace: f64) -> Self {
        self.record.best_efforts = self.record.best_efforts.with_pace(distance, Some(pace));
        self
    }

    /// Replaces all best-effort paces
    #[must_use]
    pub const fn best_efforts(mut self, best_efforts: BestEfforts) -> Self {
        self.record.best_efforts = best_efforts;
        self
    }

    /// Builds the record
    #[must_use]
    pub fn build(self) -> ActivityRecord {
        self.record
    }
}
