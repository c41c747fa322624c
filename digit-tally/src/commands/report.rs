//! Full tally session: collect digits, then print the report

use crate::commands::collect::{self, TallyReport};
use crate::config::OutputFormat;
use crate::errors::Result;
use crate::utils::formatting::{format_report_human, format_report_json};
use std::io::{BufRead, Write};
use tracing::info;

/// Options controlling how a session reports its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub output_format: OutputFormat,
    /// Append `Sum: S` after a human report
    pub show_sum: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
            show_sum: false,
        }
    }
}

/// Run one session and write the report to `output`
///
/// The returned report carries the accumulated sum whether or not it was
/// printed.
///
/// # Errors
/// Returns error if reading input, writing output or JSON serialization fails
pub fn run_session<R, W>(
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
) -> Result<TallyReport>
where
    R: BufRead,
    W: Write,
{
    let report = collect::execute(input, output)?;

    match options.output_format {
        OutputFormat::Human => write!(output, "{}", format_report_human(&report))?,
        OutputFormat::Json => writeln!(output, "{}", format_report_json(&report)?)?,
    }

    // The JSON document already carries the sum
    if options.show_sum && options.output_format == OutputFormat::Human {
        writeln!(output, "Sum: {}", report.sum())?;
    }
    output.flush()?;

    info!("Session finished with sum {}", report.sum());
    Ok(report)
}
