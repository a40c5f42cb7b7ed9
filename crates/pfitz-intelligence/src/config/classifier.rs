// ABOUTME: Athlete profile and rule threshold configuration for the classification cascade
// ABOUTME: Defaults come from named constants, overrides from PFITZ_* environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classifier configuration
//!
//! The athlete profile has no defaults: known personal bests and maximum heart
//! rate describe one athlete and must always be supplied by the caller. Rule
//! thresholds default to the documented cascade boundaries and can each be
//! overridden.

use super::error::ConfigError;
use pfitz_core::constants::classification::{
    endurance, general_aerobic, lactate_threshold, race, recovery, vo2_max,
};
use pfitz_core::constants::{env_config, limits};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Read and parse an optional environment variable
///
/// Unset variables yield `Ok(None)`; set but unparseable values are an error.
fn env_override<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{name}: '{raw}'"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

/// Overwrite `target` when the environment variable is set
fn apply_override<T: FromStr>(target: &mut T, name: &'static str) -> Result<(), ConfigError> {
    if let Some(value) = env_override(name)? {
        *target = value;
    }
    Ok(())
}

fn explicit_or_env<T: FromStr>(explicit: Option<T>, name: &'static str) -> Result<T, ConfigError> {
    match explicit {
        Some(value) => Ok(value),
        None => env_override(name)?.ok_or(ConfigError::MissingField(name)),
    }
}

fn require_positive_pace(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(field))
    }
}

fn require_non_negative(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(field))
    }
}

fn require_percentage(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(field))
    }
}

/// Athlete-level constants the cascade is judged against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Established 5 km race pace (min/km)
    pub known_5k_pace_min_per_km: f64,
    /// Established 10 km race pace (min/km)
    pub known_10k_pace_min_per_km: f64,
    /// Maximum heart rate used to normalize observed heart rates (bpm)
    pub max_heart_rate_bpm: u32,
}

impl AthleteProfile {
    /// Create a profile from explicit values
    #[must_use]
    pub const fn new(
        known_5k_pace_min_per_km: f64,
        known_10k_pace_min_per_km: f64,
        max_heart_rate_bpm: u32,
    ) -> Self {
        Self {
            known_5k_pace_min_per_km,
            known_10k_pace_min_per_km,
            max_heart_rate_bpm,
        }
    }

    /// Load the athlete profile from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if any of `PFITZ_KNOWN_5K_PACE`,
    /// `PFITZ_KNOWN_10K_PACE` or `PFITZ_MAX_HEART_RATE` is unset, and
    /// `ConfigError::Parse` if a value is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None, None)
    }

    /// Combine explicit values with the environment
    ///
    /// Explicit values win; the environment fills in the rest.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`] for every value not given explicitly.
    pub fn resolve(
        known_5k_pace: Option<f64>,
        known_10k_pace: Option<f64>,
        max_heart_rate: Option<u32>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            known_5k_pace_min_per_km: explicit_or_env(known_5k_pace, env_config::KNOWN_5K_PACE)?,
            known_10k_pace_min_per_km: explicit_or_env(
                known_10k_pace,
                env_config::KNOWN_10K_PACE,
            )?,
            max_heart_rate_bpm: explicit_or_env(max_heart_rate, env_config::MAX_HEART_RATE)?,
        })
    }

    /// Validate the profile
    ///
    /// # Errors
    ///
    /// Returns an error if a pace is not a finite positive number or the
    /// maximum heart rate is zero or implausibly high.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive_pace(self.known_5k_pace_min_per_km, "known_5k_pace_min_per_km")?;
        require_positive_pace(self.known_10k_pace_min_per_km, "known_10k_pace_min_per_km")?;

        if self.max_heart_rate_bpm == 0
            || self.max_heart_rate_bpm > limits::MAX_PLAUSIBLE_HEART_RATE_BPM
        {
            return Err(ConfigError::ValueOutOfRange("max_heart_rate_bpm"));
        }
        Ok(())
    }
}

/// Tolerances and boundaries of the rule cascade
///
/// Pace tolerances are min/km added to a known personal-best pace; heart-rate
/// values are percentages of the athlete's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Race: 5 km / 10 km best effort tolerance over known PB
    pub race_pace_tolerance: f64,
    /// VO2 max: 1 km best effort tolerance over known 5 km PB
    pub vo2_pace_tolerance: f64,
    /// VO2 max: max-HR percentage floor (inclusive)
    pub vo2_max_hr_percent: f64,
    /// Lactate threshold: 2 mile best effort tolerance over known 10 km PB
    pub threshold_pace_tolerance: f64,
    /// Lactate threshold: max-HR percentage floor (inclusive)
    pub threshold_max_hr_percent: f64,
    /// Recovery: distance ceiling (km, inclusive)
    pub recovery_max_distance_km: f64,
    /// Recovery: average-HR percentage ceiling (exclusive)
    pub recovery_avg_hr_percent_ceiling: f64,
    /// Endurance: distance floor (km, inclusive)
    pub endurance_min_distance_km: f64,
    /// Endurance: duration floor (minutes, inclusive)
    pub endurance_min_duration_min: f64,
    /// General aerobic: distance floor (km, inclusive)
    pub aerobic_min_distance_km: f64,
    /// General aerobic: distance ceiling (km, exclusive)
    pub aerobic_max_distance_km: f64,
    /// General aerobic: duration floor (minutes, inclusive)
    pub aerobic_min_duration_min: f64,
    /// General aerobic: average-HR percentage floor (inclusive)
    pub aerobic_avg_hr_percent_floor: f64,
    /// General aerobic: average-HR percentage ceiling (inclusive)
    pub aerobic_avg_hr_percent_ceiling: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            race_pace_tolerance: race::PB_PACE_TOLERANCE,
            vo2_pace_tolerance: vo2_max::ONE_KM_PACE_TOLERANCE,
            vo2_max_hr_percent: vo2_max::MAX_HR_PERCENT_FLOOR,
            threshold_pace_tolerance: lactate_threshold::TWO_MILE_PACE_TOLERANCE,
            threshold_max_hr_percent: lactate_threshold::MAX_HR_PERCENT_FLOOR,
            recovery_max_distance_km: recovery::MAX_DISTANCE_KM,
            recovery_avg_hr_percent_ceiling: recovery::AVG_HR_PERCENT_CEILING,
            endurance_min_distance_km: endurance::MIN_DISTANCE_KM,
            endurance_min_duration_min: endurance::MIN_DURATION_MIN,
            aerobic_min_distance_km: general_aerobic::MIN_DISTANCE_KM,
            aerobic_max_distance_km: general_aerobic::MAX_DISTANCE_KM,
            aerobic_min_duration_min: general_aerobic::MIN_DURATION_MIN,
            aerobic_avg_hr_percent_floor: general_aerobic::AVG_HR_PERCENT_FLOOR,
            aerobic_avg_hr_percent_ceiling: general_aerobic::AVG_HR_PERCENT_CEILING,
        }
    }
}

impl RuleThresholds {
    /// Load thresholds from environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if an override is set but is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut thresholds = Self::default();

        apply_override(
            &mut thresholds.race_pace_tolerance,
            env_config::RULE_RACE_TOLERANCE,
        )?;
        apply_override(
            &mut thresholds.vo2_pace_tolerance,
            env_config::RULE_VO2_PACE_TOLERANCE,
        )?;
        apply_override(
            &mut thresholds.vo2_max_hr_percent,
            env_config::RULE_VO2_MAX_HR_PERCENT,
        )?;
        apply_override(
            &mut thresholds.threshold_pace_tolerance,
            env_config::RULE_THRESHOLD_PACE_TOLERANCE,
        )?;
        apply_override(
            &mut thresholds.threshold_max_hr_percent,
            env_config::RULE_THRESHOLD_MAX_HR_PERCENT,
        )?;
        apply_override(
            &mut thresholds.recovery_max_distance_km,
            env_config::RULE_RECOVERY_MAX_DISTANCE,
        )?;
        apply_override(
            &mut thresholds.recovery_avg_hr_percent_ceiling,
            env_config::RULE_RECOVERY_AVG_HR_PERCENT,
        )?;
        apply_override(
            &mut thresholds.endurance_min_distance_km,
            env_config::RULE_ENDURANCE_MIN_DISTANCE,
        )?;
        apply_override(
            &mut thresholds.endurance_min_duration_min,
            env_config::RULE_ENDURANCE_MIN_DURATION,
        )?;
        apply_override(
            &mut thresholds.aerobic_min_distance_km,
            env_config::RULE_AEROBIC_MIN_DISTANCE,
        )?;
        apply_override(
            &mut thresholds.aerobic_max_distance_km,
            env_config::RULE_AEROBIC_MAX_DISTANCE,
        )?;
        apply_override(
            &mut thresholds.aerobic_min_duration_min,
            env_config::RULE_AEROBIC_MIN_DURATION,
        )?;
        apply_override(
            &mut thresholds.aerobic_avg_hr_percent_floor,
            env_config::RULE_AEROBIC_AVG_HR_FLOOR,
        )?;
        apply_override(
            &mut thresholds.aerobic_avg_hr_percent_ceiling,
            env_config::RULE_AEROBIC_AVG_HR_CEILING,
        )?;

        Ok(thresholds)
    }

    /// Validate threshold values and range ordering
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance or bound is negative or not finite, a
    /// percentage is outside 0-100, or a range floor exceeds its ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative(self.race_pace_tolerance, "race_pace_tolerance")?;
        require_non_negative(self.vo2_pace_tolerance, "vo2_pace_tolerance")?;
        require_non_negative(self.threshold_pace_tolerance, "threshold_pace_tolerance")?;
        require_non_negative(self.recovery_max_distance_km, "recovery_max_distance_km")?;
        require_non_negative(self.endurance_min_distance_km, "endurance_min_distance_km")?;
        require_non_negative(self.endurance_min_duration_min, "endurance_min_duration_min")?;
        require_non_negative(self.aerobic_min_distance_km, "aerobic_min_distance_km")?;
        require_non_negative(self.aerobic_min_duration_min, "aerobic_min_duration_min")?;

        require_percentage(self.vo2_max_hr_percent, "vo2_max_hr_percent")?;
        require_percentage(self.threshold_max_hr_percent, "threshold_max_hr_percent")?;
        require_percentage(
            self.recovery_avg_hr_percent_ceiling,
            "recovery_avg_hr_percent_ceiling",
        )?;
        require_percentage(
            self.aerobic_avg_hr_percent_floor,
            "aerobic_avg_hr_percent_floor",
        )?;
        require_percentage(
            self.aerobic_avg_hr_percent_ceiling,
            "aerobic_avg_hr_percent_ceiling",
        )?;

        if self.aerobic_min_distance_km >= self.aerobic_max_distance_km {
            return Err(ConfigError::InvalidRange(
                "aerobic_min_distance_km must be below aerobic_max_distance_km",
            ));
        }
        if self.aerobic_avg_hr_percent_floor > self.aerobic_avg_hr_percent_ceiling {
            return Err(ConfigError::InvalidRange(
                "aerobic_avg_hr_percent_floor must not exceed aerobic_avg_hr_percent_ceiling",
            ));
        }
        Ok(())
    }
}

/// Complete configuration for one classification run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Athlete constants
    pub athlete: AthleteProfile,
    /// Cascade tolerances and boundaries
    pub thresholds: RuleThresholds,
    /// Classify records on the rayon thread pool
    pub parallel: bool,
}

impl ClassifierConfig {
    /// Configuration with default thresholds for the given athlete
    #[must_use]
    pub fn new(athlete: AthleteProfile) -> Self {
        Self {
            athlete,
            thresholds: RuleThresholds::default(),
            parallel: false,
        }
    }

    /// Replace the rule thresholds
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: RuleThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Enable or disable the parallel batch path
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load the full configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if the athlete profile is incomplete or any value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            athlete: AthleteProfile::from_env()?,
            thresholds: RuleThresholds::from_env()?,
            parallel: Self::parallel_from_env()?,
        })
    }

    /// Whether `PFITZ_PARALLEL` requests the parallel path (`1`, `true` or `yes`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvVar` if the value is not valid unicode.
    pub fn parallel_from_env() -> Result<bool, ConfigError> {
        match env::var(env_config::PARALLEL) {
            Ok(raw) => Ok(matches!(
                raw.trim().to_lowercase().as_str(),
                "1" | "true" | "yes"
            )),
            Err(env::VarError::NotPresent) => Ok(false),
            Err(e) => Err(ConfigError::EnvVar(e)),
        }
    }

    /// Validate athlete profile and thresholds
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.athlete.validate()?;
        self.thresholds.validate()
    }
}
