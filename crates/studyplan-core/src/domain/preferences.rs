//! User study preferences and the resolved study window.

use chrono::NaiveTime;

use super::{minute_of, time_of_minute};
use super::{DEFAULT_BREAK_MINUTES, DEFAULT_STUDY_END_MINUTE, DEFAULT_STUDY_START_MINUTE};

/// Caller-supplied preferences. Any field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct UserPreferences {
    pub preferred_start: Option<NaiveTime>,
    pub preferred_end: Option<NaiveTime>,
    pub break_minutes: Option<u32>,
}

impl UserPreferences {
    pub fn new(preferred_start: NaiveTime, preferred_end: NaiveTime, break_minutes: u32) -> Self {
        Self {
            preferred_start: Some(preferred_start),
            preferred_end: Some(preferred_end),
            break_minutes: Some(break_minutes),
        }
    }

    /// Fills missing values from `defaults`.
    ///
    /// If the resulting start is not before the end, both bounds fall back to
    /// the defaults. The break length is kept either way.
    pub fn resolve(&self, defaults: &StudyWindow) -> StudyWindow {
        let start = self.preferred_start.unwrap_or(defaults.start);
        let end = self.preferred_end.unwrap_or(defaults.end);
        let break_minutes = self.break_minutes.unwrap_or(defaults.break_minutes);

        if start < end {
            StudyWindow {
                start,
                end,
                break_minutes,
            }
        } else {
            StudyWindow {
                start: defaults.start,
                end: defaults.end,
                break_minutes,
            }
        }
    }
}

/// The effective study window for one planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StudyWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub break_minutes: u32,
}

impl StudyWindow {
    pub fn new(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Self {
        Self {
            start,
            end,
            break_minutes,
        }
    }

    pub fn start_minute(&self) -> i64 {
        minute_of(self.start)
    }

    pub fn end_minute(&self) -> i64 {
        minute_of(self.end)
    }

    pub fn break_minutes(&self) -> i64 {
        i64::from(self.break_minutes)
    }

    /// True if `[start, end)` lies inside the window.
    pub fn contains(&self, start: i64, end: i64) -> bool {
        start >= self.start_minute() && end <= self.end_minute()
    }
}

impl Default for StudyWindow {
    /// 08:00-22:00 with a 15 minute break.
    fn default() -> Self {
        Self {
            start: time_of_minute(DEFAULT_STUDY_START_MINUTE),
            end: time_of_minute(DEFAULT_STUDY_END_MINUTE),
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}
