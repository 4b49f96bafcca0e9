//! Studyplan - schedules study sessions around fixed commitments
//!
//! The planner turns study tasks into sessions, searches for a
//! date and start time for each within a time budget, and hands back the best
//! schedule found with its score.
//!
//! # Quick start
//!
//! ```
//! use studyplan::{Planner, PlanningRequest};
//! use studyplan::studyplan_config::SolverConfig;
//! use studyplan::studyplan_core::Task;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let deadline = NaiveDate::from_ymd_opt(2025, 6, 10);
//! let request = PlanningRequest::new(vec![
//!     Task::new("Databases", 4.0, deadline, 2.0, 0.5).unwrap(),
//! ]);
//!
//! let config = SolverConfig::new().with_random_seed(7).with_step_limit(200);
//! let planner = Planner::new(config).unwrap();
//! let plan = planner.plan_on(&request, today).unwrap();
//!
//! assert_eq!(plan.sessions.len(), 2);
//! assert!(plan.score.is_feasible());
//! ```
//!
//! Logging goes through `tracing`. Enable the `console` feature (on by
//! default) and call [`console::init`] for colored solver output.

pub mod assemble;
#[cfg(feature = "console")]
pub mod console;
pub mod decompose;
pub mod input;
pub mod planner;

pub use assemble::{assemble, ScheduledSession};
pub use decompose::{Decomposer, Decomposition};
pub use input::{
    discard_future_study_sessions, fixed_events_from_calendar, tasks_from_modules, CalendarEntry,
    EntryKind, StudyModule,
};
pub use planner::{PlanResult, Planner, PlanningRequest};

pub use studyplan_config;
pub use studyplan_core;
pub use studyplan_scoring;
pub use studyplan_solver;
