//! Ranking of benchmark samples: fastest strategy and its lead.

use serde::{Deserialize, Serialize};

use super::{StatisticalTest, TestResult};
use crate::detector::{DetectorFamily, DuplicateDetector};
use crate::sample::BenchmarkSample;

/// Elapsed time of one strategy, in registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyTiming {
    pub strategy: String,
    pub elapsed_ns: u64,
    pub ns_per_call: f64,
}

/// How far the fastest strategy is ahead of its reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadComparison {
    pub reference: String,
    /// True when the reference is the configured baseline rather than the runner-up.
    pub reference_is_baseline: bool,
    /// `(reference - fastest) / reference * 100`.
    pub advantage_percent: f64,
    /// Welch's test over the two strategies' rounds.
    pub significance: TestResult,
}

/// Best pattern strategy against the iterative scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyComparison {
    pub best_pattern: String,
    pub pattern_ns: u64,
    pub iterative_ns: u64,
    pub winner: DetectorFamily,
    /// Time saved by the winner, as a percentage of the slower family's time.
    pub advantage_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub timings: Vec<StrategyTiming>,
    pub fastest: String,
    /// `None` when only one strategy was measured.
    pub lead: Option<LeadComparison>,
    /// `None` unless both a pattern detector and the iterative scan were measured.
    pub family: Option<FamilyComparison>,
}

/// Percentage of `slower` saved by `faster`.
fn advantage(faster: u64, slower: u64) -> f64 {
    if slower == 0 {
        return 0.0;
    }
    (slower as f64 - faster as f64) / slower as f64 * 100.0
}

/// Index of the smallest elapsed time among `candidates`; earlier wins ties.
fn quickest<'a>(candidates: impl Iterator<Item = (usize, &'a BenchmarkSample)>) -> Option<usize> {
    candidates
        .fold(None::<(usize, u64)>, |best, (index, sample)| match best {
            Some((_, ns)) if ns <= sample.elapsed_ns => best,
            _ => Some((index, sample.elapsed_ns)),
        })
        .map(|(index, _)| index)
}

fn family_of(sample: &BenchmarkSample) -> Option<DetectorFamily> {
    sample
        .strategy
        .parse::<DuplicateDetector>()
        .ok()
        .map(DuplicateDetector::family)
}

fn compare_families(samples: &[BenchmarkSample]) -> Option<FamilyComparison> {
    let by_family = |family: DetectorFamily| {
        quickest(
            samples
                .iter()
                .enumerate()
                .filter(|(_, s)| family_of(s) == Some(family)),
        )
        .map(|i| &samples[i])
    };
    let pattern = by_family(DetectorFamily::Pattern)?;
    let iterative = by_family(DetectorFamily::Iterative)?;

    let (winner, percent) = if pattern.elapsed_ns < iterative.elapsed_ns {
        (
            DetectorFamily::Pattern,
            advantage(pattern.elapsed_ns, iterative.elapsed_ns),
        )
    } else {
        (
            DetectorFamily::Iterative,
            advantage(iterative.elapsed_ns, pattern.elapsed_ns),
        )
    };

    Some(FamilyComparison {
        best_pattern: pattern.strategy.clone(),
        pattern_ns: pattern.elapsed_ns,
        iterative_ns: iterative.elapsed_ns,
        winner,
        advantage_percent: percent,
    })
}

/// Rank `samples` and compare the fastest against a reference.
///
/// The reference is `baseline` when it names a measured strategy other than the
/// fastest, otherwise the next-fastest strategy. Returns `None` for no samples.
pub fn summarize(
    samples: &[BenchmarkSample],
    baseline: Option<&str>,
    test: &dyn StatisticalTest,
) -> Option<BenchmarkSummary> {
    let fastest_index = quickest(samples.iter().enumerate())?;
    let fastest = &samples[fastest_index];

    let baseline_index = baseline.and_then(|name| {
        samples
            .iter()
            .position(|s| s.strategy == name)
            .filter(|&i| i != fastest_index)
    });
    let reference_index = baseline_index.or_else(|| {
        quickest(
            samples
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != fastest_index),
        )
    });

    let lead = reference_index.map(|i| {
        let reference = &samples[i];
        LeadComparison {
            reference: reference.strategy.clone(),
            reference_is_baseline: baseline_index.is_some(),
            advantage_percent: advantage(fastest.elapsed_ns, reference.elapsed_ns),
            significance: test.analyze(&reference.rounds(), &fastest.rounds()),
        }
    });

    let timings = samples
        .iter()
        .map(|s| StrategyTiming {
            strategy: s.strategy.clone(),
            elapsed_ns: s.elapsed_ns,
            ns_per_call: s.ns_per_call(),
        })
        .collect();

    Some(BenchmarkSummary {
        timings,
        fastest: fastest.strategy.clone(),
        lead,
        family: compare_families(samples),
    })
}
