// ABOUTME: Classification report combining labels, summary statistics, and training insights
// ABOUTME: Text rendering lists categories in intensity order, recent runs, volume, and personal bests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pfitz_core::constants::limits::DEFAULT_RECENT_RUNS;
use pfitz_core::constants::volume::{CURRENT_PACE_RUNS, RECENT_WEEKS};
use pfitz_core::models::{ActivityRecord, BestEffortDistance, CategoryLabel};
use pfitz_intelligence::{
    summarize, CategorySummary, ClassifiedBatch, GroupShare, LabeledActivity,
    PersonalBestProgression, PersonalBestRegistry, TrainingDistribution, TrainingVolume,
};
use serde::Serialize;
use std::fmt;

const RULE: &str = "========================================";
const NAME_WIDTH: usize = 25;
const PROGRESSION_DISTANCES: [BestEffortDistance; 2] = [
    BestEffortDistance::FiveKilometers,
    BestEffortDistance::TenKilometers,
];

/// Everything produced by classifying one batch
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    /// Personal bests the batch was classified against
    pub registry: PersonalBestRegistry,
    /// Labeled runs in input order
    pub activities: Vec<LabeledActivity>,
    /// Per-category statistics
    pub summary: CategorySummary,
    /// Category shares and training groups
    pub distribution: TrainingDistribution,
    /// Weekly volume and pace statistics
    pub volume: TrainingVolume,
    /// Running 5K and 10K bests over time
    pub progression: Vec<PersonalBestProgression>,
    #[serde(skip)]
    recent: usize,
}

impl ClassificationReport {
    /// Build the report for a classified batch
    #[must_use]
    pub fn new(batch: ClassifiedBatch) -> Self {
        let summary = summarize(&batch.activities);
        let distribution = TrainingDistribution::from_activities(&batch.activities);
        let records: Vec<&ActivityRecord> = batch
            .activities
            .iter()
            .map(|activity| &activity.record)
            .collect();
        let volume = TrainingVolume::from_records(records.iter().copied());
        let progression = PROGRESSION_DISTANCES
            .into_iter()
            .map(|distance| {
                PersonalBestProgression::from_records(records.iter().copied(), distance)
            })
            .collect();
        Self {
            registry: batch.registry,
            activities: batch.activities,
            summary,
            distribution,
            volume,
            progression,
            recent: DEFAULT_RECENT_RUNS,
        }
    }

    /// Number of most recent runs listed in the text report
    #[must_use]
    pub const fn with_recent(mut self, recent: usize) -> Self {
        self.recent = recent;
        self
    }

    /// The last `recent` runs in batch order
    #[must_use]
    pub fn recent_activities(&self) -> &[LabeledActivity] {
        let start = self.activities.len().saturating_sub(self.recent);
        &self.activities[start..]
    }

    fn write_personal_bests(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Personal Bests:")?;
        for distance in [
            BestEffortDistance::FiveKilometers,
            BestEffortDistance::TenKilometers,
        ] {
            match self.registry.known_pace(distance).filter(|pace| *pace > 0.0) {
                Some(pace) => writeln!(f, "- Known {} PB: {pace:.2} min/km", distance.label())?,
                None => writeln!(f, "- Known {} PB: not set", distance.label())?,
            }
        }
        for distance in [
            BestEffortDistance::FiveKilometers,
            BestEffortDistance::TenKilometers,
        ] {
            match self.registry.tracked_pace(distance) {
                Some(pace) => writeln!(f, "- Tracked {} best: {pace:.2} min/km", distance.label())?,
                None => writeln!(f, "- Tracked {} best: Not available", distance.label())?,
            }
        }
        Ok(())
    }

    fn write_distribution(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Run Type Classification Results ({} runs):",
            self.distribution.total_runs
        )?;
        writeln!(f, "{RULE}")?;
        for share in &self.distribution.shares {
            writeln!(
                f,
                "{:20}: {:2} runs ({:4.1}%)",
                share.category, share.count, share.percentage
            )?;
        }
        Ok(())
    }

    fn write_recent(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recent Run Classifications:")?;
        writeln!(f, "{RULE}")?;
        for activity in self.recent_activities() {
            let record = &activity.record;
            write!(
                f,
                "{}: {:NAME_WIDTH$} -> {:17} | {:.1}km",
                date_label(record, "%Y-%m-%d"),
                truncated_name(record),
                activity.category,
                record.distance_km()
            )?;
            match displayed_heart_rate(record) {
                Some(bpm) => writeln!(f, " | HR: {bpm:.0}")?,
                None => writeln!(f)?,
            }
        }
        Ok(())
    }

    fn write_insights(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distribution = &self.distribution;
        writeln!(f, "Training Distribution Insights:")?;
        writeln!(f, "{RULE}")?;
        write_group(
            f,
            "Base Training (GA+Recovery+Endurance)",
            distribution.base_training,
        )?;
        if distribution.quality_sessions.count > 0 {
            write_group(f, "Quality Sessions (LT+VO₂)", distribution.quality_sessions)?;
        }
        if distribution.races.count > 0 {
            write_group(f, "Races", distribution.races)?;
        }

        if distribution.unclassified.count > 0 {
            writeln!(f)?;
            writeln!(
                f,
                "'Other' runs need investigation: {} ({:.1}%)",
                distribution.unclassified.count, distribution.unclassified.percentage
            )?;
            writeln!(f, "   Recent 'Other' runs:")?;
            for activity in &distribution.needs_investigation {
                let record = &activity.record;
                write!(
                    f,
                    "   * {}: {:.1}km, {:.0}min",
                    date_label(record, "%m-%d"),
                    record.distance_km(),
                    record.duration_min()
                )?;
                match displayed_heart_rate(record) {
                    Some(bpm) => writeln!(f, ", HR: {bpm:.0}")?,
                    None => writeln!(f, ", No HR")?,
                }
            }
        }
        Ok(())
    }

    fn write_volume(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let volume = &self.volume;
        writeln!(f, "Training Volume:")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "- Total: {} runs, {:.1} km",
            volume.total_runs, volume.total_distance_km
        )?;
        if let Some(mean) = volume.mean_weekly_km {
            writeln!(
                f,
                "- Weekly average: {mean:.1} km over {} weeks",
                volume.weeks.len()
            )?;
        }
        if let (Some(recent), Some(gap)) = (volume.recent_weekly_km, volume.gap_to_target_km) {
            writeln!(f, "- Last {RECENT_WEEKS} weeks: {recent:.1} km/week")?;
            writeln!(
                f,
                "- Pfitz base target: {:.0} km/week (gap: {gap:.1} km/week)",
                volume.target_weekly_km
            )?;
        }
        if let Some(pace) = volume.current_pace {
            writeln!(
                f,
                "- Current pace (last {CURRENT_PACE_RUNS} runs): {pace:.2} min/km"
            )?;
        }
        if let Some(pace) = volume.median_pace {
            writeln!(f, "- Median pace: {pace:.2} min/km")?;
        }
        if let Some(range) = volume.pace_range {
            writeln!(
                f,
                "- Pace range: {:.2} - {:.2} min/km",
                range.fastest, range.slowest
            )?;
        }
        Ok(())
    }

    fn write_progression(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PB Progression:")?;
        writeln!(f, "{RULE}")?;
        for progression in &self.progression {
            let label = progression.distance.label();
            match progression.current() {
                Some(current) => writeln!(
                    f,
                    "- {label}: {:.2} min/km ({:.1} min) on {}, {} new bests in {} efforts",
                    current.best_pace,
                    current.race_time_min,
                    current.date.format("%Y-%m-%d"),
                    progression.improvements().count(),
                    progression.points.len()
                )?,
                None => writeln!(f, "- {label}: no dated efforts")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_personal_bests(f)?;
        writeln!(f)?;
        self.write_distribution(f)?;
        writeln!(f)?;
        write!(f, "{}", SummaryTable(&self.summary))?;
        if self.recent > 0 && !self.activities.is_empty() {
            writeln!(f)?;
            self.write_recent(f)?;
        }
        if !self.activities.is_empty() {
            writeln!(f)?;
            self.write_insights(f)?;
            writeln!(f)?;
            self.write_volume(f)?;
            writeln!(f)?;
            self.write_progression(f)?;
        }
        Ok(())
    }
}

/// Per-category statistics on their own
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SummaryReport {
    /// Statistics keyed by category
    pub summary: CategorySummary,
}

impl SummaryReport {
    /// Summarize a classified batch
    #[must_use]
    pub fn new(batch: &ClassifiedBatch) -> Self {
        Self {
            summary: summarize(&batch.activities),
        }
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SummaryTable(&self.summary))
    }
}

/// Aligned table of category statistics in intensity order
struct SummaryTable<'a>(&'a CategorySummary);

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary by Run Type:")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "{:20} {:>4} {:>8} {:>9} {:>7}",
            "Run type", "Runs", "Avg km", "Avg pace", "Avg HR"
        )?;
        for category in CategoryLabel::INTENSITY_ORDER {
            let Some(stats) = self.0.get(&category) else {
                continue;
            };
            writeln!(
                f,
                "{:20} {:>4} {:>8} {:>9} {:>7}",
                category,
                stats.count,
                optional(stats.mean_distance_km, 1),
                optional(stats.mean_pace_min_per_km, 2),
                optional(stats.mean_average_heartrate, 0),
            )?;
        }
        Ok(())
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, label: &str, group: GroupShare) -> fmt::Result {
    writeln!(
        f,
        "{label}: {} runs ({:.1}%)",
        group.count, group.percentage
    )
}

fn optional(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.decimals$}"))
}

fn date_label(record: &ActivityRecord, pattern: &str) -> String {
    record
        .date()
        .map_or_else(|| "----".to_owned(), |date| date.format(pattern).to_string())
}

fn truncated_name(record: &ActivityRecord) -> String {
    record
        .name()
        .unwrap_or("(unnamed)")
        .chars()
        .take(NAME_WIDTH)
        .collect()
}

fn displayed_heart_rate(record: &ActivityRecord) -> Option<f64> {
    record.average_heartrate().filter(|bpm| *bpm > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfitz_core::models::ActivityRecordBuilder;
    use pfitz_intelligence::{AthleteProfile, BatchClassifier, RuleThresholds};

    fn report() -> ClassificationReport {
        let batch = vec![
            ActivityRecordBuilder::new(5.0, 30.0)
                .name("Easy shakeout")
                .average_heartrate(120)
                .build(),
            ActivityRecordBuilder::new(6.0, 30.0).build(),
            ActivityRecordBuilder::new(14.0, 70.0).build(),
        ];
        let classifier = BatchClassifier::from_parts(
            AthleteProfile::new(4.0, 4.2, 191),
            RuleThresholds::default(),
        );
        ClassificationReport::new(classifier.classify_all(&batch))
    }

    #[test]
    fn test_text_lists_categories_in_intensity_order() {
        let text = report().to_string();
        let recovery = text.find("Recovery            :");
        let endurance = text.find("Endurance           :");
        let other = text.find("Other               :");
        assert!(recovery < endurance && endurance < other);
        assert!(recovery.is_some());
        assert!(text.contains("Tracked 5K best: Not available"));
        assert!(text.contains("'Other' runs need investigation: 1"));
    }

    #[test]
    fn test_recent_window() {
        let report = report().with_recent(2);
        assert_eq!(report.recent_activities().len(), 2);
        assert_eq!(
            report.recent_activities()[0].category,
            CategoryLabel::Other
        );
    }

    #[test]
    fn test_summary_table_marks_missing_means() {
        let text = SummaryReport::new(&ClassifiedBatch {
            registry: report().registry,
            activities: report().activities,
        })
        .to_string();
        let endurance_row = text
            .lines()
            .find(|line| line.starts_with("Endurance"))
            .unwrap_or_default();
        assert!(endurance_row.trim_end().ends_with('-'));
    }
}
