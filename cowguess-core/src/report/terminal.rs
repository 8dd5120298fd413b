use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use super::{Report, ReportError, Reporter};
use crate::check::CaseCheck;
use crate::detector::{DetectorFamily, DuplicateDetector};
use crate::stats::{BenchmarkSummary, LeadComparison};

const RULE_WIDTH: usize = 78;

/// A reporter that prints the startup report as aligned text.
#[derive(Debug, Clone, Default)]
pub struct TerminalReporter {
    /// Whether to use colors in output (defaults to true).
    use_colors: bool,
}

impl TerminalReporter {
    /// Create a new terminal reporter with default settings.
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a terminal reporter with color output disabled.
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// Format a duration in nanoseconds to a human-readable string.
    fn format_time(ns: f64) -> String {
        if ns >= 1_000_000_000.0 {
            format!("{:.3} s", ns / 1_000_000_000.0)
        } else if ns >= 1_000_000.0 {
            format!("{:.3} ms", ns / 1_000_000.0)
        } else if ns >= 1_000.0 {
            format!("{:.3} us", ns / 1_000.0)
        } else {
            format!("{:.3} ns", ns)
        }
    }

    fn format_percent(percent: f64) -> String {
        format!("{:.1}%", percent)
    }

    fn paint(&self, text: String, style: fn(ColoredString) -> ColoredString) -> String {
        if self.use_colors {
            style(text.as_str().normal()).to_string()
        } else {
            text
        }
    }

    fn print_heading(&self, writer: &mut dyn Write, title: &str) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", self.paint(title.to_string(), |s| s.bold()))?;
        writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn print_patterns(&self, writer: &mut dyn Write, report: &Report) -> io::Result<()> {
        self.print_heading(writer, "Patterns used to find duplicates")?;
        for source in &report.patterns {
            writeln!(writer, "{:<24} {}", source.detector.name(), source.pattern)?;
        }
        Ok(())
    }

    fn print_case(&self, writer: &mut dyn Write, check: &CaseCheck) -> io::Result<()> {
        write!(writer, "{:<8}", check.input)?;
        for answer in &check.answers {
            let cell = format!("{:<24}", answer.found_duplicate);
            if answer.found_duplicate == check.expected {
                write!(writer, "{}", cell)?;
            } else {
                write!(writer, "{}", self.paint(cell, |s| s.red()))?;
            }
        }
        let verdict = if check.passed() {
            self.paint("pass".to_string(), |s| s.green())
        } else {
            self.paint("FAIL".to_string(), |s| s.red().bold())
        };
        writeln!(writer, "{}", verdict)
    }

    fn print_self_check(&self, writer: &mut dyn Write, report: &Report) -> io::Result<()> {
        self.print_heading(writer, "All detectors must agree on known inputs")?;
        write!(writer, "{:<8}", "Input")?;
        for detector in DuplicateDetector::ALL {
            write!(writer, "{:<24}", detector.name())?;
        }
        writeln!(writer, "Result")?;
        for check in &report.self_check {
            self.print_case(writer, check)?;
        }
        Ok(())
    }

    fn print_lead(
        &self,
        writer: &mut dyn Write,
        fastest: &str,
        lead: &LeadComparison,
    ) -> io::Result<()> {
        let against = if lead.reference_is_baseline {
            "baseline"
        } else {
            "next fastest"
        };
        let significance = &lead.significance;
        let verdict = if significance.statistically_significant {
            self.paint("significant".to_string(), |s| s.green())
        } else {
            self.paint("inconclusive".to_string(), |s| s.yellow())
        };
        writeln!(
            writer,
            "{} is {} faster than {} {} (p = {:.4}, {})",
            self.paint(fastest.to_string(), |s| s.green().bold()),
            Self::format_percent(lead.advantage_percent),
            against,
            lead.reference,
            significance.p_value,
            verdict,
        )
    }

    fn print_summary(&self, writer: &mut dyn Write, summary: &BenchmarkSummary) -> io::Result<()> {
        writeln!(writer, "{:<24} {:>14} {:>14}", "Strategy", "Elapsed", "Per call")?;
        for timing in &summary.timings {
            let row = format!(
                "{:<24} {:>14} {:>14}",
                timing.strategy,
                Self::format_time(timing.elapsed_ns as f64),
                Self::format_time(timing.ns_per_call),
            );
            if timing.strategy == summary.fastest {
                writeln!(writer, "{}", self.paint(row, |s| s.green()))?;
            } else {
                writeln!(writer, "{}", row)?;
            }
        }

        writeln!(writer)?;
        match &summary.lead {
            Some(lead) => self.print_lead(writer, &summary.fastest, lead)?,
            None => writeln!(writer, "Fastest: {}", summary.fastest)?,
        }

        if let Some(family) = &summary.family {
            let percent = Self::format_percent(family.advantage_percent);
            match family.winner {
                DetectorFamily::Pattern => writeln!(
                    writer,
                    "Pattern matching ({}) is {} faster than {}",
                    family.best_pattern,
                    percent,
                    DuplicateDetector::IterativeScan,
                )?,
                DetectorFamily::Iterative => writeln!(
                    writer,
                    "{} is {} faster than pattern matching ({})",
                    DuplicateDetector::IterativeScan,
                    percent,
                    family.best_pattern,
                )?,
            }
        }
        Ok(())
    }

    fn print_benchmark(&self, writer: &mut dyn Write, report: &Report) -> io::Result<()> {
        let Some(first) = report.samples.first() else {
            return Ok(());
        };
        let title = format!(
            "Timing {} calls on {:?} and {:?}",
            first.iterations, first.workload.unique, first.workload.duplicate
        );
        self.print_heading(writer, &title)?;

        if let Some(summary) = &report.summary {
            self.print_summary(writer, summary)?;
        }
        Ok(())
    }
}

impl Reporter for TerminalReporter {
    fn write_report(&self, writer: &mut dyn Write, report: &Report) -> Result<(), ReportError> {
        self.print_patterns(writer, report)?;
        self.print_self_check(writer, report)?;
        self.print_benchmark(writer, report)?;
        writeln!(writer)?;
        Ok(())
    }
}
