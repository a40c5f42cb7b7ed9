// ABOUTME: Training-intensity classification engine for historical running data
// ABOUTME: Personal-best registry, ordered rule cascade, batch classifier, summaries, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pfitz Intelligence
//!
//! Classifies runs into training-intensity categories with a deterministic,
//! precedence-ordered rule cascade.
//!
//! The pipeline for one batch is:
//!
//! 1. [`PersonalBestRegistry::derive`] scans the batch once for tracked bests
//! 2. [`RuleEngine::classify`] labels each record against the registry
//! 3. [`BatchClassifier`] maps the engine over the batch in input order
//! 4. [`summarize`] and [`TrainingDistribution`] aggregate the labels
//! 5. [`TrainingVolume`] and [`PersonalBestProgression`] track weekly volume
//!    and personal bests over time
//!
//! Everything here is a pure function of explicit inputs. Athlete constants
//! and rule thresholds are threaded in through [`ClassifierConfig`]; nothing
//! in the engine reads the environment.

/// Athlete profile and rule threshold configuration
pub mod config;

/// Known and tracked personal-best paces
pub mod personal_bests;

/// Ordered classification rule cascade
pub mod rule_engine;

/// Batch classification preserving input order
pub mod batch;

/// Per-category descriptive statistics
pub mod summary;

/// Training distribution, weekly volume, and personal-best progression
pub mod insights;

pub use batch::{classify_all, BatchClassifier, ClassifiedBatch, LabeledActivity};
pub use config::{AthleteProfile, ClassifierConfig, ConfigError, RuleThresholds};
pub use insights::{
    CategoryShare, GroupShare, PaceRange, PersonalBestPoint, PersonalBestProgression,
    TrainingDistribution, TrainingVolume, WeeklyVolume,
};
pub use personal_bests::PersonalBestRegistry;
pub use rule_engine::{classify, HeartRateIntensity, RuleEngine, RuleEvaluation};
pub use summary::{summarize, CategoryStatistics, CategorySummary};
