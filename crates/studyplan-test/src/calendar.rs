//! Fixed reference calendar.
//!
//! Every fixture is planned as if today were 2025-06-01, so `day(1)` is the
//! first plannable date.

use chrono::{Duration, NaiveDate, NaiveTime};

/// The reference "today", 2025-06-01.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid reference date")
}

/// `today() + 1`, the first date in every date domain.
pub fn tomorrow() -> NaiveDate {
    day(1)
}

/// `today() + offset` days.
pub fn day(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

/// A time of day. Panics on out-of-range values.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid fixture time")
}
