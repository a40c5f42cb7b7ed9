// ABOUTME: Training insights over a batch: category distribution, weekly volume, and PB progression
// ABOUTME: Category shares in intensity order, volume against the base target, and running personal bests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training insights for athlete intelligence
//!
//! Base training groups general aerobic, recovery and endurance runs; quality
//! sessions group lactate threshold and VO2 max intervals. Runs labelled
//! `Other` matched no rule and are surfaced for investigation.
//!
//! Weekly volume and personal-best progression need dates. Undated runs count
//! toward totals and paces only.

use crate::batch::LabeledActivity;
use chrono::{Datelike, Days, NaiveDate};
use pfitz_core::constants::limits::OTHER_RUNS_TO_INVESTIGATE;
use pfitz_core::constants::units::PERCENTAGE_MULTIPLIER;
use pfitz_core::constants::volume::{BASE_WEEKLY_TARGET_KM, CURRENT_PACE_RUNS, RECENT_WEEKS};
use pfitz_core::models::{ActivityRecord, BestEffortDistance, CategoryLabel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * PERCENTAGE_MULTIPLIER
    }
}

/// Count and share of one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category
    pub category: CategoryLabel,
    /// Runs in the category
    pub count: usize,
    /// Share of all runs (0-100)
    pub percentage: f64,
}

/// Count and share of a group of categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupShare {
    /// Runs in the group
    pub count: usize,
    /// Share of all runs (0-100)
    pub percentage: f64,
}

impl GroupShare {
    fn of(activities: &[LabeledActivity], member: impl Fn(CategoryLabel) -> bool) -> Self {
        let count = activities
            .iter()
            .filter(|activity| member(activity.category))
            .count();
        Self {
            count,
            percentage: percentage(count, activities.len()),
        }
    }
}

/// How a batch of runs is spread across training categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDistribution {
    /// Runs in the batch
    pub total_runs: usize,
    /// Present categories in intensity order
    pub shares: Vec<CategoryShare>,
    /// General aerobic, recovery and endurance
    pub base_training: GroupShare,
    /// Lactate threshold and VO2 max intervals
    pub quality_sessions: GroupShare,
    /// Races
    pub races: GroupShare,
    /// Runs no rule matched
    pub unclassified: GroupShare,
    /// Most recent unclassified runs, oldest first
    pub needs_investigation: Vec<LabeledActivity>,
}

impl TrainingDistribution {
    /// Distribution listing the default number of unclassified runs
    #[must_use]
    pub fn from_activities(activities: &[LabeledActivity]) -> Self {
        Self::with_investigation_limit(activities, OTHER_RUNS_TO_INVESTIGATE)
    }

    /// Distribution listing at most `limit` recent unclassified runs
    ///
    /// "Recent" follows batch order: the last records are the most recent.
    #[must_use]
    pub fn with_investigation_limit(activities: &[LabeledActivity], limit: usize) -> Self {
        let total_runs = activities.len();

        let shares = CategoryLabel::INTENSITY_ORDER
            .into_iter()
            .filter_map(|category| {
                let count = activities
                    .iter()
                    .filter(|activity| activity.category == category)
                    .count();
                (count > 0).then(|| CategoryShare {
                    category,
                    count,
                    percentage: percentage(count, total_runs),
                })
            })
            .collect();

        let others: Vec<&LabeledActivity> = activities
            .iter()
            .filter(|activity| activity.category == CategoryLabel::Other)
            .collect();
        let needs_investigation = others
            .iter()
            .skip(others.len().saturating_sub(limit))
            .map(|activity| (*activity).clone())
            .collect();

        Self {
            total_runs,
            shares,
            base_training: GroupShare::of(activities, CategoryLabel::is_base_training),
            quality_sessions: GroupShare::of(activities, CategoryLabel::is_quality_session),
            races: GroupShare::of(activities, |category| category == CategoryLabel::Race),
            unclassified: GroupShare::of(activities, |category| category == CategoryLabel::Other),
            needs_investigation,
        }
    }

    /// Share of a single category, if present
    #[must_use]
    pub fn share(&self, category: CategoryLabel) -> Option<&CategoryShare> {
        self.shares.iter().find(|share| share.category == category)
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of already sorted values
fn median(sorted: &[f64]) -> Option<f64> {
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        len if len % 2 == 1 => Some(sorted[mid]),
        _ => Some((sorted[mid - 1] + sorted[mid]) / 2.0),
    }
}

/// Monday of the week containing `date`
fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(offset).unwrap_or(date)
}

/// Distance run in one calendar week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Runs in the week
    pub runs: usize,
    /// Total distance (km)
    pub distance_km: f64,
}

/// Fastest and slowest average pace (min/km)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceRange {
    /// Lowest pace
    pub fastest: f64,
    /// Highest pace
    pub slowest: f64,
}

/// Training volume and pace against the base-building target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingVolume {
    /// Runs in the batch
    pub total_runs: usize,
    /// Distance over all runs (km)
    pub total_distance_km: f64,
    /// Weeks with at least one dated run, oldest first
    pub weeks: Vec<WeeklyVolume>,
    /// Mean distance over `weeks`
    pub mean_weekly_km: Option<f64>,
    /// Mean distance over the last four of `weeks`
    pub recent_weekly_km: Option<f64>,
    /// Weekly base-building target (km)
    pub target_weekly_km: f64,
    /// Target minus recent weekly distance; negative once above target
    pub gap_to_target_km: Option<f64>,
    /// Mean pace of the last five runs in batch order
    pub current_pace: Option<f64>,
    /// Median pace over all runs
    pub median_pace: Option<f64>,
    /// Pace extremes over all runs
    pub pace_range: Option<PaceRange>,
}

impl TrainingVolume {
    /// Volume statistics for a batch of runs in batch order
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ActivityRecord>) -> Self {
        let records: Vec<&ActivityRecord> = records.into_iter().collect();

        let mut by_week: BTreeMap<NaiveDate, WeeklyVolume> = BTreeMap::new();
        for record in &records {
            let Some(date) = record.date() else {
                continue;
            };
            let start = week_start(date);
            let week = by_week.entry(start).or_insert(WeeklyVolume {
                week_start: start,
                runs: 0,
                distance_km: 0.0,
            });
            week.runs += 1;
            week.distance_km += record.distance_km();
        }
        let weeks: Vec<WeeklyVolume> = by_week.into_values().collect();
        let weekly_km: Vec<f64> = weeks.iter().map(|week| week.distance_km).collect();
        let recent_weekly_km = mean(&weekly_km[weekly_km.len().saturating_sub(RECENT_WEEKS)..]);

        let mut paces: Vec<f64> = records
            .iter()
            .map(|record| record.pace_min_per_km())
            .collect();
        let current_pace = mean(&paces[paces.len().saturating_sub(CURRENT_PACE_RUNS)..]);
        paces.sort_by(f64::total_cmp);

        Self {
            total_runs: records.len(),
            total_distance_km: records.iter().map(|record| record.distance_km()).sum(),
            mean_weekly_km: mean(&weekly_km),
            recent_weekly_km,
            target_weekly_km: BASE_WEEKLY_TARGET_KM,
            gap_to_target_km: recent_weekly_km.map(|km| BASE_WEEKLY_TARGET_KM - km),
            current_pace,
            median_pace: median(&paces),
            pace_range: paces
                .first()
                .zip(paces.last())
                .map(|(fastest, slowest)| PaceRange {
                    fastest: *fastest,
                    slowest: *slowest,
                }),
            weeks,
        }
    }
}

/// One dated effort in a personal-best progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalBestPoint {
    /// Date of the run
    pub date: NaiveDate,
    /// Best effort the run contains (min/km)
    pub effort_pace: f64,
    /// Fastest effort up to and including this run (min/km)
    pub best_pace: f64,
    /// `best_pace` held over the whole distance (minutes)
    pub race_time_min: f64,
}

/// Running best over time for one distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalBestProgression {
    /// Distance tracked
    pub distance: BestEffortDistance,
    /// Dated runs with an effort at `distance`, oldest first
    pub points: Vec<PersonalBestPoint>,
}

impl PersonalBestProgression {
    /// Running minimum of the best efforts at `distance`, ordered by date
    ///
    /// Runs on the same date keep their batch order.
    #[must_use]
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a ActivityRecord>,
        distance: BestEffortDistance,
    ) -> Self {
        let mut efforts: Vec<(NaiveDate, f64)> = records
            .into_iter()
            .filter_map(|record| record.date().zip(record.best_effort(distance)))
            .filter(|(_, pace)| pace.is_finite())
            .collect();
        efforts.sort_by_key(|(date, _)| *date);

        let mut best = f64::INFINITY;
        let points = efforts
            .into_iter()
            .map(|(date, effort_pace)| {
                best = best.min(effort_pace);
                PersonalBestPoint {
                    date,
                    effort_pace,
                    best_pace: best,
                    race_time_min: best * distance.kilometers(),
                }
            })
            .collect();

        Self { distance, points }
    }

    /// Latest point, holding the fastest effort so far
    #[must_use]
    pub fn current(&self) -> Option<&PersonalBestPoint> {
        self.points.last()
    }

    /// Points at which the best improved, oldest first
    pub fn improvements(&self) -> impl Iterator<Item = &PersonalBestPoint> + '_ {
        let mut previous = f64::INFINITY;
        self.points.iter().filter(move |point| {
            let improved = point.best_pace < previous;
            previous = point.best_pace;
            improved
        })
    }
}
