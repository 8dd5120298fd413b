//! Command-line interface for cowguess.

use crate::config::{Config, OutputFormat};
use clap::Parser;
use cowguess_core::DuplicateDetector;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cowguess")]
#[command(about = "Validate Bulls and Cows guesses and benchmark duplicate-digit detectors")]
#[command(version)]
pub struct Cli {
    /// Calls per sample string for each detector
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Number of timed rounds the iterations are split into
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Number of untimed warmup calls
    #[arg(long)]
    pub warmup_iterations: Option<u64>,

    /// Detector to compare the fastest one against (default: the runner-up)
    #[arg(long)]
    pub baseline: Option<DuplicateDetector>,

    /// Confidence level for the significance test (0.0-1.0)
    #[arg(long)]
    pub confidence_level: Option<f64>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Skip the startup benchmark
    #[arg(long)]
    pub skip_bench: bool,

    /// Exit after the report instead of reading guesses
    #[arg(long)]
    pub no_interactive: bool,

    /// Say why a rejected guess is invalid
    #[arg(long)]
    pub explain: bool,

    /// Path to config file (default: .cowguess.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values. Flags only ever
    /// switch their setting on.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(iterations) = self.iterations {
            config.benchmark.iterations = iterations;
        }

        if let Some(rounds) = self.rounds {
            config.benchmark.rounds = rounds;
        }

        if let Some(warmup_iterations) = self.warmup_iterations {
            config.benchmark.warmup_iterations = warmup_iterations;
        }

        if let Some(baseline) = self.baseline {
            config.benchmark.baseline = Some(baseline);
        }

        if let Some(confidence_level) = self.confidence_level {
            config.benchmark.confidence_level = confidence_level;
        }

        if let Some(format) = self.format {
            config.report.format = format;
        }

        if self.no_color {
            config.report.colors = false;
        }

        if self.explain {
            config.report.explain = true;
        }
    }
}
