//! cowguess: validate Bulls and Cows guesses and benchmark the duplicate-digit
//! detectors behind the validation.
//!
//! At startup the binary checks every detector against known answers, times
//! them on a fixed workload and reports the fastest. It then reads guesses
//! until an empty line.

pub mod cli;
pub mod config;
pub mod session;
pub mod startup;

// Re-export core types for convenience
pub use cowguess_core::{is_valid_guess, validate_guess, DuplicateDetector, Guess, GuessError};
pub use cowguess_harness::{BenchmarkRunner, RunSettings, StrategyRegistry};

// Re-export main types from this crate
pub use cli::Cli;
pub use config::{Config, OutputFormat};
pub use session::{Session, SessionStats, PROMPT};
pub use startup::{build_report, reporter_for};
