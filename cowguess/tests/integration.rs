//! Integration tests for cowguess.
//!
//! These drive the registry, runner, summary and reporters end to end with a
//! small iteration count, and the interactive session through in-memory I/O.

use std::io::Cursor;

use cowguess::{
    build_report, reporter_for, BenchmarkRunner, Config, DuplicateDetector, OutputFormat,
    RunSettings, Session, StrategyRegistry,
};
use cowguess_core::{summarize, Report, Reporter, TerminalReporter, WelchTTest, Workload};

fn small_config() -> Config {
    let mut config = Config::default();
    config.benchmark.iterations = 200;
    config.benchmark.rounds = 4;
    config.benchmark.warmup_iterations = 10;
    config
}

/// Every detector gets one sample, with non-negative timings that sum up.
#[test]
fn test_benchmark_covers_every_detector() {
    let report = build_report(&small_config(), false).unwrap();

    assert_eq!(report.samples.len(), DuplicateDetector::ALL.len());
    for (sample, detector) in report.samples.iter().zip(DuplicateDetector::ALL) {
        assert_eq!(sample.strategy, detector.name());
        assert_eq!(sample.iterations, 200);
        assert_eq!(sample.round_ns.len(), 4);
        assert_eq!(sample.elapsed_ns, sample.round_ns.iter().sum::<u64>());
    }

    let summary = report.summary.expect("three samples always summarize");
    assert!(DuplicateDetector::ALL
        .iter()
        .any(|d| d.name() == summary.fastest));
    let lead = summary.lead.expect("more than one strategy");
    assert_ne!(lead.reference, summary.fastest);
    assert!(lead.advantage_percent >= 0.0);
    assert!(summary.family.is_some());
}

#[test]
fn test_skip_bench_keeps_self_check() {
    let report = build_report(&small_config(), true).unwrap();

    assert!(report.samples.is_empty());
    assert!(report.summary.is_none());
    assert!(report.self_check_passed());
}

#[test]
fn test_configured_baseline_is_reference() {
    let mut config = small_config();
    config.benchmark.baseline = Some(DuplicateDetector::PatternNamedGroup);

    let report = build_report(&config, false).unwrap();
    let summary = report.summary.unwrap();
    let lead = summary.lead.unwrap();

    if summary.fastest == "pattern-named-group" {
        assert!(!lead.reference_is_baseline);
    } else {
        assert_eq!(lead.reference, "pattern-named-group");
        assert!(lead.reference_is_baseline);
    }
}

/// Benchmarking a strategy does not change what it answers.
#[test]
fn test_benchmark_does_not_change_answers() {
    let registry = StrategyRegistry::with_detectors();
    let before: Vec<_> = registry
        .list()
        .iter()
        .map(|name| registry.run(name, "repeated eee"))
        .collect();

    let runner = BenchmarkRunner::new(
        Workload::default(),
        RunSettings {
            iterations: 100,
            rounds: 2,
            warmup_iterations: 0,
        },
    );
    runner.run(&registry).unwrap();
    runner.run(&registry).unwrap();

    let after: Vec<_> = registry
        .list()
        .iter()
        .map(|name| registry.run(name, "repeated eee"))
        .collect();
    assert_eq!(before, after);
    assert!(after.iter().all(|answer| *answer == Some(true)));
}

/// A custom strategy can be benchmarked next to the built-in detectors.
#[test]
fn test_custom_strategy_in_registry() {
    let mut registry = StrategyRegistry::with_detectors();
    registry
        .register("sorted-bytes", |s: &str| {
            let mut chars: Vec<char> = s.chars().collect();
            chars.sort_unstable();
            chars.windows(2).any(|w| w[0] == w[1])
        })
        .unwrap();

    let runner = BenchmarkRunner::new(
        Workload::default(),
        RunSettings {
            iterations: 50,
            rounds: 5,
            warmup_iterations: 0,
        },
    );
    let samples = runner.run(&registry).unwrap();
    let summary = summarize(&samples, None, &WelchTTest::default()).unwrap();

    assert_eq!(samples.len(), 4);
    assert_eq!(summary.timings.len(), 4);
    assert_eq!(summary.timings[3].strategy, "sorted-bytes");
}

#[test]
fn test_terminal_report_end_to_end() {
    let report = build_report(&small_config(), false).unwrap();

    let mut buffer = Vec::new();
    TerminalReporter::without_colors()
        .write_report(&mut buffer, &report)
        .unwrap();
    let output = String::from_utf8(buffer).unwrap();

    assert!(output.contains("Patterns used to find duplicates"));
    assert!(output.contains("All detectors must agree on known inputs"));
    assert!(output.contains("Timing 200 calls on \"no duplicate\" and \"repeated eee\""));
    for detector in DuplicateDetector::ALL {
        assert!(output.contains(detector.name()));
    }
    assert!(output.contains("faster than"));
}

#[test]
fn test_json_report_end_to_end() {
    let mut config = small_config();
    config.report.format = OutputFormat::Json;
    let report = build_report(&config, false).unwrap();

    let mut buffer = Vec::new();
    reporter_for(&config.report)
        .write_report(&mut buffer, &report)
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["samples"].as_array().unwrap().len(), 3);
    assert_eq!(value["self_check"].as_array().unwrap().len(), 9);
    assert!(value["summary"]["fastest"].is_string());

    let parsed: Report = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(parsed.samples, report.samples);
}

#[test]
fn test_session_end_to_end() {
    let input = "1234\n1231\nabcd\n12345\n\n";
    let mut output = Vec::new();
    let stats = Session::new(false)
        .run(Cursor::new(input), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(stats.guesses, 4);
    assert_eq!(stats.valid, 1);
    assert!(output.contains("1234 is valid"));
    assert!(output.contains("1231 is not a number with 4 unique digits"));
    assert!(output.contains("abcd is not a number with 4 unique digits"));
    assert!(output.contains("12345 is not a number with 4 unique digits"));
}

#[test]
fn test_validator_examples() {
    assert!(!cowguess::is_valid_guess(""));
    assert!(cowguess::is_valid_guess("1234"));
    assert!(!cowguess::is_valid_guess("1231"));
    assert!(!cowguess::is_valid_guess("abcd"));
    assert!(!cowguess::is_valid_guess("12345"));
    for detector in DuplicateDetector::ALL {
        assert!(detector.has_duplicate("abba"));
        assert!(!detector.has_duplicate("abcd"));
    }
}
