//! Studyplan Core - Domain types and scores for study session scheduling
//!
//! This crate provides the fundamental abstractions:
//! - [`HardSoftScore`] for representing schedule quality
//! - Immutable problem facts: [`Task`], [`FixedEvent`], [`StudyWindow`]
//! - The mutable planning state: [`Session`] and [`Schedule`]

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    time_of_minute, FixedEvent, ProblemFacts, Schedule, Session, SessionInterval, StudyWindow,
    Task, UserPreferences, DEFAULT_BREAK_MINUTES, DEFAULT_STUDY_END_MINUTE,
    DEFAULT_STUDY_START_MINUTE, MAX_SESSIONS_PER_TASK, MINUTES_PER_DAY,
};
pub use error::PlanError;
pub use score::{HardSoftScore, ScoreParseError};
