//! Startup report: self-check plus the one-off benchmark.

use anyhow::{Context, Result};
use cowguess_core::{
    run_self_check, summarize, DuplicateDetector, JsonReporter, Report, Reporter,
    TerminalReporter, WelchTTest, Workload,
};
use cowguess_harness::{BenchmarkRunner, StrategyRegistry};

use crate::config::{Config, OutputFormat, ReportConfig};

/// Run the self-check and, unless `skip_bench`, benchmark every detector.
pub fn build_report(config: &Config, skip_bench: bool) -> Result<Report> {
    let self_check = run_self_check();
    if skip_bench {
        return Ok(Report::new(self_check, Vec::new(), None));
    }

    let runner = BenchmarkRunner::new(Workload::default(), config.benchmark.run_settings());
    let samples = runner
        .run(&StrategyRegistry::with_detectors())
        .context("Failed to run benchmarks")?;

    let test = WelchTTest::new(config.benchmark.confidence_level);
    let baseline = config.benchmark.baseline.map(DuplicateDetector::name);
    let summary = summarize(&samples, baseline, &test);

    Ok(Report::new(self_check, samples, summary))
}

/// The reporter for the configured output format.
pub fn reporter_for(config: &ReportConfig) -> Box<dyn Reporter> {
    match config.format {
        OutputFormat::Json => Box::new(JsonReporter),
        OutputFormat::Human if config.colors => Box::new(TerminalReporter::new()),
        OutputFormat::Human => Box::new(TerminalReporter::without_colors()),
    }
}
