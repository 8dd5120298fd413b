use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies which side of a timing comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    /// The strategy the fastest one is measured against.
    Reference,
    /// The fastest strategy.
    Contender,
}

/// Outcome of comparing the per-round timings of two strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Probability of seeing a difference this large by chance.
    pub p_value: f64,
    /// Whether `p_value` is below `1 - confidence_level`.
    pub statistically_significant: bool,
    /// Percent of the reference mean saved by the contender (positive = contender faster).
    pub effect_size: f64,
    pub confidence_level: f64,
    /// The faster side, if the difference is significant.
    pub winner: Option<Side>,
    /// Mean round time of the reference in nanoseconds.
    pub reference_mean_ns: f64,
    /// Mean round time of the contender in nanoseconds.
    pub contender_mean_ns: f64,
}

/// A statistical test over two sets of round timings.
pub trait StatisticalTest: Send + Sync {
    fn analyze(&self, reference: &[Duration], contender: &[Duration]) -> TestResult;
}

mod summary;
mod ttest;

pub use summary::{summarize, BenchmarkSummary, FamilyComparison, LeadComparison, StrategyTiming};
pub use ttest::WelchTTest;
