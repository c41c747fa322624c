//! Interactive digit collection
//!
//! Prompts for digits until the user enters something that is not a digit
//! from 1 to 9, counting every digit on the way.

use crate::errors::Result;
use crate::tally::{Entry, StopReason, Tally};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const PROMPT: &str = "Input num from 1 to 9 (0 to exit):";

/// Outcome of one collection session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyReport {
    pub tally: Tally,
    pub stop: StopReason,
}

impl TallyReport {
    /// The accumulated sum of all digits entered
    #[must_use]
    pub const fn sum(&self) -> u64 {
        self.tally.sum()
    }
}

/// Execute the collection loop
///
/// Reads one line per prompt from `input`. A 0, an integer outside 1..=9,
/// text that is not an integer, or end of input ends the loop without being
/// counted.
///
/// # Errors
/// Returns error only if reading `input` or writing `output` fails
pub fn execute<R, W>(input: &mut R, output: &mut W) -> Result<TallyReport>
where
    R: BufRead,
    W: Write,
{
    let mut tally = Tally::new();
    let mut line = Vec::new();

    let stop = loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        let entry = if input.read_until(b'\n', &mut line)? == 0 {
            Entry::Stop(StopReason::EndOfInput)
        } else {
            Entry::parse(&String::from_utf8_lossy(&line))
        };

        match entry {
            Entry::Digit(digit) => {
                tally.record(digit);
                debug!("Recorded digit {} (sum now {})", digit, tally.sum());
            }
            Entry::Stop(reason) => break reason,
        }
    };

    debug_assert!(tally.is_consistent());
    info!(
        "Collection stopped: {}; {} digit(s) entered, sum {}",
        stop,
        tally.total_entries(),
        tally.sum()
    );

    Ok(TallyReport { tally, stop })
}
