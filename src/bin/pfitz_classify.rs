// ABOUTME: pfitz-classify - command-line front end for the run classifier
// ABOUTME: Loads a JSON training log, labels every run, and prints reports or writes JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify a training log and print the full report
//! pfitz-classify classify --input runs.json --known-5k 4.0 --known-10k 4.2 --max-hr 191
//!
//! # Athlete values may come from the environment instead
//! PFITZ_KNOWN_5K_PACE=4.0 PFITZ_KNOWN_10K_PACE=4.2 PFITZ_MAX_HEART_RATE=191 \
//!     pfitz-classify classify --input runs.json --output classified.json
//!
//! # Per-category statistics only, as JSON
//! pfitz-classify summary --input runs.json --json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pfitz_classifier::constants::limits::DEFAULT_RECENT_RUNS;
use pfitz_classifier::dataset;
use pfitz_classifier::formatters::{
    format_output, ClassificationReport, OutputFormat, SummaryReport,
};
use pfitz_classifier::intelligence::{
    AthleteProfile, BatchClassifier, ClassifiedBatch, ClassifierConfig, RuleThresholds,
};
use pfitz_classifier::logging::LoggingConfig;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pfitz-classify",
    version,
    about = "Classify runs by training intensity",
    long_about = "Labels every run in a JSON training log as Race, VO₂ Max Intervals, \
                  Lactate Threshold, Recovery, Endurance, General Aerobic or Other, and \
                  summarizes the training distribution."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify every run and print the full report
    Classify {
        #[command(flatten)]
        run: RunArgs,

        /// Write the classified runs, summary and insights as JSON
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Classify on all cores
        #[arg(long)]
        parallel: bool,

        /// Number of most recent runs to list
        #[arg(long, default_value_t = DEFAULT_RECENT_RUNS)]
        recent: usize,
    },

    /// Print per-category summary statistics
    Summary {
        #[command(flatten)]
        run: RunArgs,
    },
}

/// Arguments shared by every subcommand
#[derive(Args)]
struct RunArgs {
    /// Training log (JSON array of runs)
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Known 5K race pace in min/km [env: PFITZ_KNOWN_5K_PACE]
    #[arg(long = "known-5k", value_name = "MIN_PER_KM")]
    known_5k: Option<f64>,

    /// Known 10K race pace in min/km [env: PFITZ_KNOWN_10K_PACE]
    #[arg(long = "known-10k", value_name = "MIN_PER_KM")]
    known_10k: Option<f64>,

    /// Maximum heart rate in bpm [env: PFITZ_MAX_HEART_RATE]
    #[arg(long = "max-hr", value_name = "BPM")]
    max_hr: Option<u32>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Resolve the configuration: flags first, then `PFITZ_*` variables
    fn config(&self, parallel: bool) -> Result<ClassifierConfig> {
        let athlete = AthleteProfile::resolve(self.known_5k, self.known_10k, self.max_hr)
            .context("Athlete profile is incomplete")?;
        let config = ClassifierConfig::new(athlete)
            .with_thresholds(RuleThresholds::from_env()?)
            .with_parallel(parallel || ClassifierConfig::parallel_from_env()?);
        config.validate().context("Invalid classifier configuration")?;
        Ok(config)
    }

    fn classify(&self, parallel: bool) -> Result<ClassifiedBatch> {
        let config = self.config(parallel)?;
        let records = dataset::load_activities(&self.input)?;

        let batch = BatchClassifier::new(&config).classify(&records);
        batch.registry.log_summary();
        Ok(batch)
    }
}

fn classify(run: &RunArgs, output: Option<&Path>, parallel: bool, recent: usize) -> Result<()> {
    let report = ClassificationReport::new(run.classify(parallel)?).with_recent(recent);

    println!("{}", format_output(&report, run.output_format())?);

    if let Some(path) = output {
        dataset::write_json(path, &report)?;
        info!(path = %path.display(), "Classified data saved");
    }
    Ok(())
}

fn summary(run: &RunArgs) -> Result<()> {
    let report = SummaryReport::new(&run.classify(false)?);
    println!("{}", format_output(&report, run.output_format())?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    match cli.command {
        Command::Classify {
            run,
            output,
            parallel,
            recent,
        } => classify(&run, output.as_deref(), parallel, recent),
        Command::Summary { run } => summary(&run),
    }
}
