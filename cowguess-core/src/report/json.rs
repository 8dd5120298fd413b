use std::io::Write;

use super::{Report, ReportError, Reporter};

/// Writes the whole report as one pretty-printed JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn write_report(&self, writer: &mut dyn Write, report: &Report) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::run_self_check;

    #[test]
    fn test_json_report_parses_back() {
        let report = Report::new(run_self_check(), Vec::new(), None);

        let mut buffer = Vec::new();
        JsonReporter.write_report(&mut buffer, &report).unwrap();

        let parsed: Report = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.patterns.len(), 2);
    }

    #[test]
    fn test_json_report_names_detectors() {
        let report = Report::new(run_self_check(), Vec::new(), None);

        let mut buffer = Vec::new();
        JsonReporter.write_report(&mut buffer, &report).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"pattern-named-group\""));
        assert!(text.contains("\"summary\": null"));
    }
}
