//! Domain model for study session planning.
//!
//! Problem facts ([`Task`], [`FixedEvent`], [`StudyWindow`]) are immutable for a
//! planning run and shared through [`ProblemFacts`]. [`Session`] date and start
//! time are the only search variables; the [`Schedule`] owns them.

mod fixed_event;
mod preferences;
mod schedule;
mod session;
mod task;

#[cfg(test)]
mod tests;

use chrono::NaiveTime;

pub use fixed_event::FixedEvent;
pub use preferences::{StudyWindow, UserPreferences};
pub use schedule::{ProblemFacts, Schedule};
pub use session::{Session, SessionInterval};
pub use task::{Task, MAX_SESSIONS_PER_TASK};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Study window start used when preferences are absent or inverted (08:00).
pub const DEFAULT_STUDY_START_MINUTE: u32 = 8 * 60;

/// Study window end used when preferences are absent or inverted (22:00).
pub const DEFAULT_STUDY_END_MINUTE: u32 = 22 * 60;

/// Minimum gap between two sessions on the same day.
pub const DEFAULT_BREAK_MINUTES: u32 = 15;

/// Converts a minute-of-day into a time, wrapping past midnight.
pub fn time_of_minute(minute: u32) -> NaiveTime {
    let seconds = (minute % (MINUTES_PER_DAY as u32)) * 60;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default()
}

/// Minute-of-day of a time, ignoring seconds.
pub(crate) fn minute_of(time: NaiveTime) -> i64 {
    use chrono::Timelike;
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}
