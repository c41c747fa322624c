//! digit-tally library
//!
//! Counts how often each digit from 1 to 9 is typed and keeps their sum.
//! This module exports the session logic for testing and library use.

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod errors;
pub mod tally;
pub mod utils;

// Re-export for easy access
pub use commands::*;
pub use config::*;
pub use errors::*;
pub use tally::*;
