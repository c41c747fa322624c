//! Configuration management for digit-tally
//!
//! Defaults for the command-line flags, overridable through environment
//! variables.

use crate::errors::{Result, TallyError};
use clap::ValueEnum;
use std::env;

pub const OUTPUT_FORMAT_VAR: &str = "DIGIT_TALLY_OUTPUT";
pub const SHOW_SUM_VAR: &str = "DIGIT_TALLY_SHOW_SUM";

/// How the final report is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `You typed:` followed by one line per digit
    Human,
    /// A single JSON document
    Json,
}

/// Centralized configuration for digit-tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    /// Default output format for the report
    pub default_output_format: String,

    /// Print the accumulated sum after the report
    pub show_sum: bool,
}

impl TallyConfig {
    /// Create a new configuration instance with values from environment variables
    /// or sensible defaults if not set
    #[must_use]
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            default_output_format: lookup(OUTPUT_FORMAT_VAR)
                .unwrap_or_else(|| "human".to_string()),

            show_sum: lookup(SHOW_SUM_VAR)
                .map(|s| parse_flag(&s))
                .unwrap_or(false),
        }
    }

    /// Resolve the configured default output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        parse_output_format(&self.default_output_format)
    }
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse output format from string
pub fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
    match format_str.trim().to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        _ => Err(TallyError::InvalidOutputFormat(format_str.to_string())),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
