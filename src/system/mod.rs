//! Process-level concerns: logging setup and summary output.
pub mod logger;
pub mod summary_output;
