//! digit-tally - interactive digit counter
//!
//! Repeatedly asks for a digit from 1 to 9, then prints how many times each
//! digit was typed once anything else is entered.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use digit_tally::{run_session, OutputFormat, SessionOptions, TallyConfig};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "digit-tally",
    version,
    about = "Count how many times each digit from 1 to 9 is typed"
)]
struct Cli {
    /// Report format
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Print the sum of all entered digits after the report
    #[arg(long)]
    show_sum: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = TallyConfig::new();

    // Use configuration with CLI overrides
    let output_format = match cli.output {
        Some(format) => format,
        None => config.output_format()?,
    };
    let options = SessionOptions {
        output_format,
        show_sum: cli.show_sum || config.show_sum,
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    if let Err(e) = run_session(&mut input, &mut output, &options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
