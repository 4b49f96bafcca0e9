//! Study task problem fact.

use chrono::NaiveDate;

use super::MINUTES_PER_DAY;
use crate::error::{PlanError, Result};

/// Upper bound on the sessions a single task may ask for.
pub const MAX_SESSIONS_PER_TASK: usize = 10_000;

/// A unit of study work with a deadline and remaining hours.
///
/// `hours_required` is the remaining workload: hours already studied are
/// subtracted before construction. Tasks are immutable for a planning run.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use studyplan_core::Task;
///
/// let deadline = NaiveDate::from_ymd_opt(2025, 6, 11);
/// let task = Task::new("Database Systems", 7.0, deadline, 2.0, 0.5).unwrap();
/// assert_eq!(task.recommended_session_count(), 4);
/// assert_eq!(task.session_slot_length(), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTask", rename_all = "camelCase"))]
pub struct Task {
    name: String,
    hours_required: f64,
    deadline: Option<NaiveDate>,
    session_length: f64,
    break_length: f64,
}

impl Task {
    /// Creates a task.
    ///
    /// Lengths are in hours. A non-positive `hours_required` is accepted; such a
    /// task simply yields no sessions.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidTask`] if `session_length` is not finite,
    /// rounds to less than one minute or exceeds a day, if `break_length` is
    /// negative or non-finite, if `hours_required` is non-finite, or if the task
    /// would need more than [`MAX_SESSIONS_PER_TASK`] sessions.
    pub fn new(
        name: impl Into<String>,
        hours_required: f64,
        deadline: Option<NaiveDate>,
        session_length: f64,
        break_length: f64,
    ) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| PlanError::InvalidTask {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if !hours_required.is_finite() {
            return Err(invalid("hours required must be finite"));
        }
        if !session_length.is_finite() || (session_length * 60.0).round() < 1.0 {
            return Err(invalid("session length must be at least one minute"));
        }
        if session_length * 60.0 > MINUTES_PER_DAY as f64 {
            return Err(invalid("session length must fit in one day"));
        }
        if !break_length.is_finite() || break_length < 0.0 {
            return Err(invalid("break length must not be negative"));
        }
        if hours_required / session_length > MAX_SESSIONS_PER_TASK as f64 {
            return Err(invalid("too many sessions required"));
        }

        Ok(Self {
            name,
            hours_required,
            deadline,
            session_length,
            break_length,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hours_required(&self) -> f64 {
        self.hours_required
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Length of one study session in hours, break excluded.
    pub fn session_length(&self) -> f64 {
        self.session_length
    }

    pub fn break_length(&self) -> f64 {
        self.break_length
    }

    /// Session plus break, in hours.
    pub fn session_slot_length(&self) -> f64 {
        self.session_length + self.break_length
    }

    /// Session length rounded to whole minutes.
    pub fn session_minutes(&self) -> i64 {
        (self.session_length * 60.0).round() as i64
    }

    /// `ceil(hours_required / session_length)`, or 0 when nothing remains.
    ///
    /// Both lengths are rounded to whole minutes first, so a workload that is
    /// an exact multiple of the session length never gains a session from
    /// float noise.
    pub fn recommended_session_count(&self) -> usize {
        if self.hours_required <= 0.0 {
            return 0;
        }
        let required = (self.hours_required * 60.0).round() as i64;
        let per_session = self.session_minutes();
        let count = (required + per_session - 1) / per_session;
        count.max(1) as usize
    }

    /// True if the task contributes at least one session.
    pub fn is_schedulable(&self) -> bool {
        self.recommended_session_count() > 0
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTask {
    name: String,
    hours_required: f64,
    #[serde(default)]
    deadline: Option<NaiveDate>,
    session_length: f64,
    #[serde(default)]
    break_length: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTask> for Task {
    type Error = PlanError;

    fn try_from(raw: RawTask) -> Result<Self> {
        Task::new(
            raw.name,
            raw.hours_required,
            raw.deadline,
            raw.session_length,
            raw.break_length,
        )
    }
}
