//! Configuration loading for cowguess.
//!
//! Supports loading configuration from TOML files, with defaults for every
//! setting.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use cowguess_core::{DuplicateDetector, DEFAULT_ITERATIONS};
use cowguess_harness::RunSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for cowguess.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the startup benchmark.
    pub benchmark: BenchmarkConfig,
    /// Settings for the report and the interactive loop.
    pub report: ReportConfig,
}

/// Configuration for the startup benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Calls per sample string for each strategy.
    pub iterations: u64,
    /// Number of timed rounds the iterations are split into.
    pub rounds: u32,
    /// Untimed calls before measuring.
    pub warmup_iterations: u64,
    /// Strategy the fastest one is compared against (default: the runner-up).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<DuplicateDetector>,
    /// Confidence level for the significance test (e.g., 0.95 for 95% confidence).
    pub confidence_level: f64,
}

/// How the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Configuration for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: OutputFormat,
    /// Use colors in human-readable output.
    pub colors: bool,
    /// Say why a rejected guess is invalid.
    pub explain: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            rounds: 10,
            warmup_iterations: 1_000,
            baseline: None,
            confidence_level: 0.95,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            colors: true,
            explain: false,
        }
    }
}

impl BenchmarkConfig {
    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            iterations: self.iterations,
            rounds: self.rounds,
            warmup_iterations: self.warmup_iterations,
        }
    }
}

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".cowguess.toml";

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `.cowguess.toml` from the current directory, or use defaults if it
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_or_default() -> Result<Config> {
        let path = Path::new(DEFAULT_CONFIG_FILE);

        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from the specified path, or try the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the specified file cannot be read or parsed.
    pub fn load_from(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load_or_default(),
        }
    }

    /// Reject values the benchmark cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.benchmark.rounds == 0 {
            bail!("benchmark.rounds must be at least 1");
        }
        let level = self.benchmark.confidence_level;
        if !(level > 0.0 && level < 1.0) {
            bail!("benchmark.confidence_level must be between 0 and 1 (exclusive), got {level}");
        }
        Ok(())
    }
}
