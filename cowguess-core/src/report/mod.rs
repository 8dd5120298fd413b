use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::check::CaseCheck;
use crate::detector::DuplicateDetector;
use crate::sample::BenchmarkSample;
use crate::stats::BenchmarkSummary;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A pattern detector and the pattern it searches with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSource {
    pub detector: DuplicateDetector,
    pub pattern: String,
}

/// Everything printed at startup: patterns, self-check and benchmark results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub patterns: Vec<PatternSource>,
    pub self_check: Vec<CaseCheck>,
    /// Empty when the benchmark was skipped.
    pub samples: Vec<BenchmarkSample>,
    pub summary: Option<BenchmarkSummary>,
}

impl Report {
    pub fn new(
        self_check: Vec<CaseCheck>,
        samples: Vec<BenchmarkSample>,
        summary: Option<BenchmarkSummary>,
    ) -> Self {
        let patterns = DuplicateDetector::ALL
            .into_iter()
            .filter_map(|detector| {
                detector.pattern().map(|pattern| PatternSource {
                    detector,
                    pattern: pattern.to_string(),
                })
            })
            .collect();

        Self {
            patterns,
            self_check,
            samples,
            summary,
        }
    }

    /// True when every self-check case passed.
    pub fn self_check_passed(&self) -> bool {
        self.self_check.iter().all(CaseCheck::passed)
    }
}

pub trait Reporter: Send + Sync {
    /// Write the report to any writer.
    fn write_report(&self, writer: &mut dyn Write, report: &Report) -> Result<(), ReportError>;

    /// Write the report to stdout.
    fn report(&self, report: &Report) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        self.write_report(&mut writer, report)?;
        writer.flush()?;
        Ok(())
    }
}

mod json;
mod terminal;
pub use json::JsonReporter;
pub use terminal::TerminalReporter;
