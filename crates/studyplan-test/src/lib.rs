//! Shared test fixtures for studyplan crates.
//!
//! This crate provides data builders and pure helpers for testing.
//! It depends only on `studyplan-core` to avoid circular dependencies.
//!
//! - [`calendar`] - fixed reference dates and times
//! - [`schedule`] - schedule builder with tasks, events and assignments
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! studyplan-test = { workspace = true }
//! ```

pub mod calendar;
pub mod schedule;

pub use calendar::{day, time, today, tomorrow};
pub use schedule::{task, task_with_break, ScheduleBuilder};
