//! Output formatting utilities for digit-tally

use crate::commands::collect::TallyReport;
use crate::errors::Result;
use crate::tally::Digit;
use serde::Serialize;
use std::collections::BTreeMap;

pub const REPORT_HEADER: &str = "You typed:";

#[derive(Serialize)]
struct JsonReport {
    counts: BTreeMap<u8, u64>,
    sum: u64,
    entries: u64,
}

/// Format the report for human-readable output
///
/// Always lists all nine digits, including those never typed.
#[must_use]
pub fn format_report_human(report: &TallyReport) -> String {
    use std::fmt::Write;

    let mut output = format!("{REPORT_HEADER}\n");
    for digit in Digit::all() {
        // Writing to a String cannot fail
        let _ = writeln!(
            &mut output,
            "{digit}) {} time(s)",
            report.tally.count(digit)
        );
    }
    output
}

/// Format the report for JSON output
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn format_report_json(report: &TallyReport) -> Result<String> {
    let json_report = JsonReport {
        counts: Digit::all()
            .map(|digit| (digit.value(), report.tally.count(digit)))
            .collect(),
        sum: report.tally.sum(),
        entries: report.tally.total_entries(),
    };

    Ok(serde_json::to_string_pretty(&json_report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tally::{StopReason, Tally};

    fn report_of(values: &[i64]) -> TallyReport {
        let mut tally = Tally::new();
        for &value in values {
            tally.record(Digit::new(value).unwrap());
        }
        TallyReport {
            tally,
            stop: StopReason::Zero,
        }
    }

    #[test]
    fn test_human_report_empty() {
        let output = format_report_human(&report_of(&[]));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "You typed:");
        for (i, line) in lines[1..].iter().enumerate() {
            assert_eq!(*line, format!("{}) 0 time(s)", i + 1));
        }
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_human_report_counts() {
        let output = format_report_human(&report_of(&[3, 3, 7]));

        assert!(output.contains("\n3) 2 time(s)\n"));
        assert!(output.contains("\n7) 1 time(s)\n"));
        assert!(output.contains("\n9) 0 time(s)\n"));
    }

    #[test]
    fn test_json_report() {
        let output = format_report_json(&report_of(&[3, 3, 7])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["sum"], 13);
        assert_eq!(value["entries"], 3);
        assert_eq!(value["counts"]["3"], 2);
        assert_eq!(value["counts"]["7"], 1);
        assert_eq!(value["counts"]["1"], 0);
        assert_eq!(value["counts"].as_object().unwrap().len(), 9);
    }
}
