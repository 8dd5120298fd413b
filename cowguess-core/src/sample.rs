//! Benchmark workload and timing samples.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sample without any repeated character.
pub const UNIQUE_SAMPLE: &str = "no duplicate";

/// Sample with a repeated character.
pub const DUPLICATE_SAMPLE: &str = "repeated eee";

/// Default number of calls per strategy and sample.
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// The fixed pair of inputs every strategy is timed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Input with no repeated character.
    pub unique: String,
    /// Input with at least one repeated character.
    pub duplicate: String,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            unique: UNIQUE_SAMPLE.to_string(),
            duplicate: DUPLICATE_SAMPLE.to_string(),
        }
    }
}

/// Timing of one strategy over the workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkSample {
    /// Registered strategy name.
    pub strategy: String,
    pub workload: Workload,
    /// Calls per sample string; each iteration checks both strings.
    pub iterations: u64,
    /// Total measured time in nanoseconds (sum of the rounds).
    pub elapsed_ns: u64,
    /// Measured time of each round in nanoseconds.
    pub round_ns: Vec<u64>,
}

impl BenchmarkSample {
    /// Build a sample from its measured rounds.
    pub fn new(
        strategy: impl Into<String>,
        workload: Workload,
        iterations: u64,
        rounds: &[Duration],
    ) -> Self {
        let round_ns: Vec<u64> = rounds.iter().map(|d| d.as_nanos() as u64).collect();
        Self {
            strategy: strategy.into(),
            workload,
            iterations,
            elapsed_ns: round_ns.iter().sum(),
            round_ns,
        }
    }

    /// Get the total elapsed time as a `Duration`.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    /// Get the per-round timings as `Duration`s.
    pub fn rounds(&self) -> Vec<Duration> {
        self.round_ns.iter().copied().map(Duration::from_nanos).collect()
    }

    /// Mean time of a single detector call, in nanoseconds.
    pub fn ns_per_call(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed_ns as f64 / (self.iterations * 2) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workload() {
        let workload = Workload::default();
        assert_eq!(workload.unique, "no duplicate");
        assert_eq!(workload.duplicate, "repeated eee");
    }

    #[test]
    fn test_sample_sums_rounds() {
        let rounds = [Duration::from_micros(3), Duration::from_micros(5)];
        let sample = BenchmarkSample::new("iterative-scan", Workload::default(), 100, &rounds);

        assert_eq!(sample.elapsed_ns, 8_000);
        assert_eq!(sample.elapsed(), Duration::from_micros(8));
        assert_eq!(sample.rounds(), rounds.to_vec());
        assert_eq!(sample.ns_per_call(), 40.0);
    }

    #[test]
    fn test_sample_without_iterations() {
        let sample = BenchmarkSample::new("x", Workload::default(), 0, &[Duration::ZERO]);
        assert_eq!(sample.elapsed(), Duration::ZERO);
        assert_eq!(sample.ns_per_call(), 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let sample = BenchmarkSample::new("x", Workload::default(), 1, &[Duration::from_nanos(7)]);
        let json = serde_json::to_string(&sample).unwrap();

        assert!(json.contains("\"elapsed_ns\":7"));
        assert!(json.contains("\"round_ns\":[7]"));
        assert!(json.contains("\"unique\":\"no duplicate\""));
    }
}
