// ABOUTME: Environment variable names for athlete profile and rule threshold overrides
// ABOUTME: Read by the intelligence config layer; values are PFITZ_-prefixed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Known 5 km personal-best pace (min/km)
pub const KNOWN_5K_PACE: &str = "PFITZ_KNOWN_5K_PACE";
/// Known 10 km personal-best pace (min/km)
pub const KNOWN_10K_PACE: &str = "PFITZ_KNOWN_10K_PACE";
/// Athlete maximum heart rate (bpm)
pub const MAX_HEART_RATE: &str = "PFITZ_MAX_HEART_RATE";
/// Use the parallel batch path when set to `true`/`1`
pub const PARALLEL: &str = "PFITZ_PARALLEL";

/// Race rule pace tolerance (min/km)
pub const RULE_RACE_TOLERANCE: &str = "PFITZ_RULE_RACE_TOLERANCE";
/// VO2 max rule 1 km pace tolerance (min/km)
pub const RULE_VO2_PACE_TOLERANCE: &str = "PFITZ_RULE_VO2_PACE_TOLERANCE";
/// VO2 max rule max-HR percentage floor
pub const RULE_VO2_MAX_HR_PERCENT: &str = "PFITZ_RULE_VO2_MAX_HR_PERCENT";
/// Lactate threshold rule 2 mile pace tolerance (min/km)
pub const RULE_THRESHOLD_PACE_TOLERANCE: &str = "PFITZ_RULE_THRESHOLD_PACE_TOLERANCE";
/// Lactate threshold rule max-HR percentage floor
pub const RULE_THRESHOLD_MAX_HR_PERCENT: &str = "PFITZ_RULE_THRESHOLD_MAX_HR_PERCENT";
/// Recovery rule distance ceiling (km)
pub const RULE_RECOVERY_MAX_DISTANCE: &str = "PFITZ_RULE_RECOVERY_MAX_DISTANCE";
/// Recovery rule average-HR percentage ceiling
pub const RULE_RECOVERY_AVG_HR_PERCENT: &str = "PFITZ_RULE_RECOVERY_AVG_HR_PERCENT";
/// Endurance rule distance floor (km)
pub const RULE_ENDURANCE_MIN_DISTANCE: &str = "PFITZ_RULE_ENDURANCE_MIN_DISTANCE";
/// Endurance rule duration floor (minutes)
pub const RULE_ENDURANCE_MIN_DURATION: &str = "PFITZ_RULE_ENDURANCE_MIN_DURATION";
/// General aerobic distance floor (km)
pub const RULE_AEROBIC_MIN_DISTANCE: &str = "PFITZ_RULE_AEROBIC_MIN_DISTANCE";
/// General aerobic distance ceiling (km, exclusive)
pub const RULE_AEROBIC_MAX_DISTANCE: &str = "PFITZ_RULE_AEROBIC_MAX_DISTANCE";
/// General aerobic duration floor (minutes)
pub const RULE_AEROBIC_MIN_DURATION: &str = "PFITZ_RULE_AEROBIC_MIN_DURATION";
/// General aerobic average-HR percentage floor
pub const RULE_AEROBIC_AVG_HR_FLOOR: &str = "PFITZ_RULE_AEROBIC_AVG_HR_FLOOR";
/// General aerobic average-HR percentage ceiling
pub const RULE_AEROBIC_AVG_HR_CEILING: &str = "PFITZ_RULE_AEROBIC_AVG_HR_CEILING";
