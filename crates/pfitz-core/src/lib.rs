// ABOUTME: Core types and constants for the Pfitz run classifier
// ABOUTME: Foundation crate with error handling, activity models, category labels, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pfitz Core
//!
//! Foundation crate providing shared types and constants for the Pfitz run
//! classifier. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Classification thresholds and unit constants organized by domain
//! - **models**: `ActivityRecord`, `BestEfforts`, and `CategoryLabel`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (activity records, best efforts, category labels)
pub mod models;
