//! Score types for representing schedule quality
//!
//! Scores are used to compare schedules and guide the search.
//! They are immutable and implement arithmetic operations.

mod hard_soft;


use thiserror::Error;

pub use hard_soft::HardSoftScore;

/// Error returned when a score string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid score '{input}': {reason}")]
pub struct ScoreParseError {
    input: String,
    reason: String,
}

impl ScoreParseError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
