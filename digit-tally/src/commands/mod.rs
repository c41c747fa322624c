//! Command implementations for digit-tally
//!
//! Collection of digits and rendering of the final report live in their own
//! files; `run_session` ties them together.

pub mod collect;
pub mod report;

pub use collect::{TallyReport, PROMPT};
pub use report::{run_session, SessionOptions};
