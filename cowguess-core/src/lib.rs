//! Core types for cowguess.
//!
//! Guess validation, the three duplicate-character detectors, the known-answer
//! self-check, and the statistics and reporters shared by the benchmark
//! harness and the CLI.

pub mod check;
pub mod detector;
pub mod report;
pub mod sample;
pub mod stats;
pub mod validator;

// Re-export main types for convenience
pub use check::{check_case, run_self_check, CaseCheck, DetectorAnswer, KNOWN_CASES};
pub use detector::{DetectorFamily, DuplicateDetector, ParseDetectorError};
pub use report::{JsonReporter, PatternSource, Report, ReportError, Reporter, TerminalReporter};
pub use sample::{BenchmarkSample, Workload, DEFAULT_ITERATIONS};
pub use stats::{
    summarize, BenchmarkSummary, FamilyComparison, LeadComparison, Side, StatisticalTest,
    StrategyTiming, TestResult, WelchTTest,
};
pub use validator::{is_four_digits, is_valid_guess, validate_guess, Guess, GuessError};
