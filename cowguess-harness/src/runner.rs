//! Sequential timing of registered strategies.

use std::hint::black_box;
use std::time::{Duration, Instant};

use cowguess_core::{BenchmarkSample, Workload, DEFAULT_ITERATIONS};

use crate::{HarnessError, StrategyFn, StrategyRegistry};

/// How much work each strategy gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Calls per sample string.
    pub iterations: u64,
    /// Number of timed batches the iterations are split into.
    pub rounds: u32,
    /// Untimed calls per sample string before measuring.
    pub warmup_iterations: u64,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            rounds: 10,
            warmup_iterations: 1_000,
        }
    }
}

/// Split `iterations` into round sizes that differ by at most one.
///
/// The sizes always sum to `iterations`. With iterations to spare, there are
/// never more rounds than iterations; with none, every round is empty.
pub fn round_sizes(iterations: u64, rounds: u32) -> Vec<u64> {
    let mut rounds = u64::from(rounds.max(1));
    if iterations > 0 {
        rounds = rounds.min(iterations);
    }
    let base = iterations / rounds;
    let extra = iterations % rounds;
    (0..rounds).map(|i| base + u64::from(i < extra)).collect()
}

/// Times every strategy of a registry, one strategy at a time.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    workload: Workload,
    settings: RunSettings,
}

impl BenchmarkRunner {
    pub fn new(workload: Workload, settings: RunSettings) -> Self {
        Self { workload, settings }
    }

    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Run `calls` iterations, each checking both workload strings.
    fn exercise(&self, strategy: &StrategyFn, calls: u64) {
        let unique = self.workload.unique.as_str();
        let duplicate = self.workload.duplicate.as_str();
        for _ in 0..calls {
            black_box(strategy(black_box(unique)));
            black_box(strategy(black_box(duplicate)));
        }
    }

    fn time_strategy(&self, strategy: &StrategyFn, sizes: &[u64]) -> Vec<Duration> {
        self.exercise(strategy, self.settings.warmup_iterations);
        sizes
            .iter()
            .map(|&size| {
                let start = Instant::now();
                self.exercise(strategy, size);
                start.elapsed()
            })
            .collect()
    }

    /// Benchmark every registered strategy, in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is empty or `rounds` is zero.
    pub fn run(&self, registry: &StrategyRegistry) -> Result<Vec<BenchmarkSample>, HarnessError> {
        if registry.is_empty() {
            return Err(HarnessError::EmptyRegistry);
        }
        if self.settings.rounds == 0 {
            return Err(HarnessError::ZeroRounds);
        }

        let sizes = round_sizes(self.settings.iterations, self.settings.rounds);
        let mut samples = Vec::with_capacity(registry.len());

        for (name, strategy) in registry.iter() {
            tracing::debug!(
                strategy = name,
                iterations = self.settings.iterations,
                rounds = sizes.len(),
                "benchmarking strategy"
            );
            let rounds = self.time_strategy(strategy, &sizes);
            let sample = BenchmarkSample::new(
                name,
                self.workload.clone(),
                self.settings.iterations,
                &rounds,
            );
            tracing::debug!(strategy = name, elapsed_ns = sample.elapsed_ns, "strategy done");
            samples.push(sample);
        }

        Ok(samples)
    }
}
