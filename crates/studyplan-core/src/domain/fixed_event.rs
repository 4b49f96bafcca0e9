//! Fixed calendar commitments.

use chrono::{NaiveDate, NaiveTime};

use super::minute_of;
use crate::error::{PlanError, Result};

/// An immovable calendar commitment the scheduler must avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFixedEvent", rename_all = "camelCase"))]
pub struct FixedEvent {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl FixedEvent {
    /// Creates a fixed event.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidFixedEvent`] if `end_time` precedes `start_time`.
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Result<Self> {
        if end_time < start_time {
            return Err(PlanError::InvalidFixedEvent {
                date,
                reason: format!("ends at {end_time} before it starts at {start_time}"),
            });
        }
        Ok(Self {
            date,
            start_time,
            end_time,
        })
    }

    /// A commitment blocking the whole day (00:00-23:59).
    pub fn full_day(date: NaiveDate) -> Self {
        Self {
            date,
            start_time: NaiveTime::default(),
            end_time: super::time_of_minute(23 * 60 + 59),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn start_minute(&self) -> i64 {
        minute_of(self.start_time)
    }

    pub fn end_minute(&self) -> i64 {
        minute_of(self.end_time)
    }

    /// True if `[start, end)` on `date` intersects this event.
    #[inline]
    pub fn overlaps(&self, date: NaiveDate, start: i64, end: i64) -> bool {
        self.date == date && start < self.end_minute() && end > self.start_minute()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFixedEvent {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFixedEvent> for FixedEvent {
    type Error = PlanError;

    fn try_from(raw: RawFixedEvent) -> Result<Self> {
        FixedEvent::new(raw.date, raw.start_time, raw.end_time)
    }
}
