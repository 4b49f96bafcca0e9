//! Error types for studyplan input validation

use thiserror::Error;

/// Errors raised while building planning input.
///
/// Solving itself never fails: an infeasible instance is reported through
/// its score, not through an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A task parameter is out of range (non-finite or non-positive session length)
    #[error("Invalid task '{name}': {reason}")]
    InvalidTask { name: String, reason: String },

    /// A fixed event ends before it starts
    #[error("Invalid fixed event on {date}: {reason}")]
    InvalidFixedEvent { date: chrono::NaiveDate, reason: String },

    /// Two tasks in the same planning run share a name
    #[error("Duplicate task name: {0}")]
    DuplicateTaskName(String),
}

/// Result type alias for studyplan operations
pub type Result<T> = std::result::Result<T, PlanError>;
