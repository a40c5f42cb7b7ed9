// ABOUTME: Loads activity records from JSON datasets and writes classification results
// ABOUTME: Derives missing paces, validates every record, and warns on inconsistent paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity dataset I/O
//!
//! A dataset is a JSON array of run objects. Field names follow the columns
//! of the exported training log:
//!
//! ```json
//! [
//!   {
//!     "name": "Morning Run",
//!     "date": "2024-05-02",
//!     "distance_km": 10.2,
//!     "duration_min": 52.4,
//!     "pace_min_per_km": 5.14,
//!     "average_heartrate": 148.3,
//!     "max_heartrate": 171,
//!     "5k_pace_min_per_km": 4.95
//!   }
//! ]
//! ```
//!
//! `pace_min_per_km` may be omitted and is then derived from duration and
//! distance. Heart rates may be fractional and are kept as reported; the
//! rules compare the unrounded values.

use chrono::NaiveDate;
use pfitz_core::constants::limits::PACE_CONSISTENCY_TOLERANCE;
use pfitz_core::errors::{AppError, AppResult};
use pfitz_core::models::{ActivityRecord, ActivityRecordBuilder, BestEfforts};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// One run as it appears in a dataset file
#[derive(Debug, Clone, Deserialize)]
struct RawActivity {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
    distance_km: f64,
    duration_min: f64,
    #[serde(default)]
    pace_min_per_km: Option<f64>,
    #[serde(default)]
    average_heartrate: Option<f64>,
    #[serde(default)]
    max_heartrate: Option<f64>,
    #[serde(flatten)]
    best_efforts: BestEfforts,
}

impl RawActivity {
    fn into_record(self, index: usize) -> AppResult<ActivityRecord> {
        let resource_id = format!("record[{index}]");
        let mut builder = ActivityRecordBuilder::new(self.distance_km, self.duration_min)
            .name_opt(self.name)
            .date_opt(self.date)
            .average_heartrate_opt(self.average_heartrate)
            .max_heartrate_opt(self.max_heartrate)
            .best_efforts(self.best_efforts);
        if let Some(pace) = self.pace_min_per_km {
            builder = builder.pace_min_per_km(pace);
        }

        let record = builder.build();
        record
            .validate()
            .map_err(|e| e.with_resource_id(resource_id.clone()))?;

        if !record.pace_is_consistent(PACE_CONSISTENCY_TOLERANCE) {
            warn!(
                record = %resource_id,
                pace = record.pace_min_per_km(),
                derived_pace = record.derived_pace(),
                "Reported pace differs from duration / distance; keeping reported value"
            );
        }
        Ok(record)
    }
}

/// Parse a dataset from a JSON string
///
/// # Errors
///
/// Returns `SerializationError` for malformed JSON and `ValueOutOfRange`
/// (with the offending record index as resource id) for records that break
/// the input contract.
pub fn parse_activities(json: &str) -> AppResult<Vec<ActivityRecord>> {
    let raw: Vec<RawActivity> = serde_json::from_str(json)?;
    convert(raw)
}

/// Read a dataset from any reader
///
/// # Errors
///
/// See [`parse_activities`].
pub fn read_activities(reader: impl io::Read) -> AppResult<Vec<ActivityRecord>> {
    let raw: Vec<RawActivity> = serde_json::from_reader(reader)?;
    convert(raw)
}

fn convert(raw: Vec<RawActivity>) -> AppResult<Vec<ActivityRecord>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, activity)| activity.into_record(index))
        .collect()
}

/// Load a dataset file
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `StorageError` if
/// it cannot be opened, and the errors of [`parse_activities`] otherwise.
pub fn load_activities(path: &Path) -> AppResult<Vec<ActivityRecord>> {
    let file = fs::File::open(path).map_err(|e| open_error(path, e))?;
    let records = read_activities(BufReader::new(file))
        .map_err(|e| e.with_details(serde_json::json!({ "path": path.display().to_string() })))?;

    info!(path = %path.display(), records = records.len(), "Loaded activity dataset");
    Ok(records)
}

fn open_error(path: &Path, error: io::Error) -> AppError {
    let shown = path.display();
    if error.kind() == io::ErrorKind::NotFound {
        AppError::not_found(format!("Dataset {shown}")).with_source(error)
    } else {
        AppError::storage(format!("Failed to open {shown}")).with_source(error)
    }
}

/// Write any serializable value as pretty-printed JSON
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be created or written and
/// `SerializationError` if the value cannot be serialized.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let shown = path.display();
    let file = fs::File::create(path)
        .map_err(|e| AppError::storage(format!("Failed to create {shown}")).with_source(e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .flush()
        .map_err(|e| AppError::storage(format!("Failed to write {shown}")).with_source(e))?;

    debug!(path = %shown, "Wrote JSON output");
    Ok(())
}

/// Persist records in dataset format
///
/// # Errors
///
/// See [`write_json`].
pub fn save_activities(path: &Path, records: &[ActivityRecord]) -> AppResult<()> {
    write_json(path, records)?;
    info!(path = %path.display(), records = records.len(), "Saved activity dataset");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pfitz_core::errors::ErrorCode;
    use pfitz_core::models::BestEffortDistance;

    #[test]
    fn test_missing_pace_is_derived() {
        let records = parse_activities(r#"[{"distance_km": 3.0, "duration_min": 20.0}]"#).unwrap();
        assert!((records[0].pace_min_per_km() - 6.67).abs() < 1e-9);
    }

    #[test]
    fn test_best_effort_columns() {
        let json = r#"[{
            "distance_km": 8.0,
            "duration_min": 36.0,
            "pace_min_per_km": 4.5,
            "1k_pace_min_per_km": 3.9,
            "2_mile_pace_min_per_km": null
        }]"#;
        let records = parse_activities(json).unwrap();
        assert_eq!(records[0].best_effort(BestEffortDistance::OneKilometer), Some(3.9));
        assert_eq!(records[0].best_effort(BestEffortDistance::TwoMiles), None);
    }

    #[test]
    fn test_fractional_heart_rate_is_not_rounded() {
        let json = r#"[{"distance_km": 5.0, "duration_min": 30.0, "average_heartrate": 131.6}]"#;
        let records = parse_activities(json).unwrap();
        assert_eq!(records[0].average_heartrate(), Some(131.6));
    }

    #[test]
    fn test_out_of_range_heart_rate_reports_index() {
        let json = r#"[
            {"distance_km": 5.0, "duration_min": 30.0, "average_heartrate": 140},
            {"distance_km": 5.0, "duration_min": 30.0, "average_heartrate": -3}
        ]"#;
        let error = parse_activities(json).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.resource_id.as_deref(), Some("record[1]"));
    }

    #[test]
    fn test_zero_distance_is_rejected_with_index() {
        let json = r#"[
            {"distance_km": 5.0, "duration_min": 30.0},
            {"distance_km": 0.0, "duration_min": 30.0}
        ]"#;
        let error = parse_activities(json).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.resource_id.as_deref(), Some("record[1]"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let error = parse_activities("{not json").unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }
}
