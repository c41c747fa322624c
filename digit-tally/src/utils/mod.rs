//! Shared helpers for digit-tally

pub mod formatting;
