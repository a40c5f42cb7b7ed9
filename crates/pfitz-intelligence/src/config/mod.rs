// ABOUTME: Configuration module for pfitz-intelligence crate
// ABOUTME: Re-exports athlete profile, rule thresholds, and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation error types
pub mod error;

/// Athlete profile, rule thresholds, and the combined classifier configuration
pub mod classifier;

pub use classifier::{AthleteProfile, ClassifierConfig, RuleThresholds};
pub use error::ConfigError;
