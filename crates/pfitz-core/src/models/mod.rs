// ABOUTME: Core data models for the Pfitz run classifier
// ABOUTME: Re-exports ActivityRecord, BestEfforts, and CategoryLabel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `ActivityRecord`: one observed run, immutable once built
//! - `BestEfforts`: fastest paces over standard sub-distances within a run
//! - `CategoryLabel`: the closed set of training-intensity categories

mod activity;
mod category;

pub use activity::{ActivityRecord, ActivityRecordBuilder, BestEffortDistance, BestEfforts};
pub use category::CategoryLabel;
