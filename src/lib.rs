// ABOUTME: Main library entry point for the Pfitz run classifier
// ABOUTME: Wires logging, dataset I/O, and report formatting around the classification engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pfitz Run Classifier
//!
//! Labels each run in a training log with one training-intensity category
//! (Race, VO2 Max Intervals, Lactate Threshold, Recovery, Endurance, General
//! Aerobic, or Other) and aggregates per-category statistics.
//!
//! ## Architecture
//!
//! - **`pfitz_core`**: records, category labels, errors, constants
//! - **`pfitz_intelligence`**: personal-best registry, rule cascade, batch
//!   classifier, summaries and training distribution
//! - **this crate**: logging setup, JSON dataset loading/saving, text and
//!   JSON report output, and the `pfitz-classify` binary
//!
//! ## Example
//!
//! ```rust
//! use pfitz_classifier::intelligence::{classify_all, summarize};
//! use pfitz_classifier::models::{ActivityRecordBuilder, CategoryLabel};
//!
//! let batch = vec![
//!     ActivityRecordBuilder::new(5.0, 30.0).average_heartrate(120).build(),
//!     ActivityRecordBuilder::new(6.0, 36.0).average_heartrate(125).build(),
//! ];
//! let labeled = classify_all(&batch, 4.0, 4.2, 191);
//! let summary = summarize(&labeled);
//! assert_eq!(summary[&CategoryLabel::Recovery].count, 2);
//! ```

/// Logging configuration and subscriber setup
pub mod logging;

/// Loading activity datasets and persisting results
pub mod dataset;

/// Text and JSON output for classification results
pub mod formatters;

/// Core types re-exported from `pfitz-core`
pub use pfitz_core::{constants, errors, models};

/// Classification engine re-exported from `pfitz-intelligence`
pub use pfitz_intelligence as intelligence;
