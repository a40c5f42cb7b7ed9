// ABOUTME: Output format abstraction for classification results
// ABOUTME: Renders reports as human-readable text (default) or pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output format abstraction
//!
//! Report types implement both [`fmt::Display`] (text) and
//! [`serde::Serialize`] (JSON), so one call site can emit either.

/// Classification and summary report types
pub mod report;

pub use report::{ClassificationReport, SummaryReport};

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text for terminals
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

/// Format a report in the requested output format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T>(data: &T, format: OutputFormat) -> Result<String, FormatError>
where
    T: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Text => Ok(data.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        }),
    }
}
