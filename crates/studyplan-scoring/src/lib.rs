//! Incremental constraint scoring for study schedules.
//!
//! This crate provides:
//! - The `IncrementalConstraint` trait and tuple-based `ConstraintSet`
//! - The eight scheduling rules, built by [`create_constraints`]
//! - Score directors: full recalculation, incremental, and recording (undo)
//! - Score explanation with per-constraint matches
//!
//! # Architecture
//!
//! Constraints are stateless and read the schedule directly. A single session
//! change is scored as `on_retract` before the change plus `on_insert` after
//! it, so pairwise rules cost O(n) per change instead of O(n²).

pub mod api;
pub mod constraints;
pub mod director;

pub use api::analysis::{ConstraintAnalysis, ConstraintMatch, Justification, ScoreExplanation};
pub use api::constraint_set::{ConstraintResult, ConstraintSet, IncrementalConstraint};
pub use api::weight_overrides::ConstraintWeightOverrides;

pub use constraints::{create_constraints, default_constraints, names, StudyConstraints};

pub use director::{
    IncrementalScoreDirector, RecordingScoreDirector, ScoreDirector, SimpleScoreDirector,
};
