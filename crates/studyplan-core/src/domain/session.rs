//! Session planning entity.

use chrono::{NaiveDate, NaiveTime};

use super::minute_of;

/// One atomic study block belonging to a task.
///
/// `date` and `start_time` are the search variables. Both start unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Session {
    /// Unique within a planning run.
    pub id: usize,
    /// Index of the owning task in [`ProblemFacts::tasks`](super::ProblemFacts).
    pub task_index: usize,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
}

impl Session {
    /// Creates an unassigned session.
    pub fn new(id: usize, task_index: usize) -> Self {
        Self {
            id,
            task_index,
            date: None,
            start_time: None,
        }
    }

    /// True when both date and start time are set.
    pub fn is_assigned(&self) -> bool {
        self.date.is_some() && self.start_time.is_some()
    }

    /// Start as minute-of-day.
    pub fn start_minute(&self) -> Option<i64> {
        self.start_time.map(minute_of)
    }
}

/// A placed session as a half-open `[start, end)` minute interval on one date.
///
/// `end` may exceed one day when a session runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionInterval {
    pub date: NaiveDate,
    pub start: i64,
    pub end: i64,
}

impl SessionInterval {
    /// True if both intervals share a date and intersect.
    #[inline]
    pub fn overlaps(&self, other: &SessionInterval) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }

    /// True if `self` ends at most `break_minutes` before `other` starts.
    #[inline]
    pub fn ends_within_break_of(&self, other: &SessionInterval, break_minutes: i64) -> bool {
        if self.date != other.date {
            return false;
        }
        let gap = other.start - self.end;
        (0..=break_minutes).contains(&gap)
    }
}
