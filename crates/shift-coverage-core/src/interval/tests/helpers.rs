//! Test helpers for interval tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::Interval;

/// Timestamp on a fixed reference day.
pub fn dt(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Interval on the fixed reference day from `(h, m)` to `(h, m)`.
pub fn iv(start: (u32, u32), end: (u32, u32)) -> Interval {
    Interval::new(dt(start.0, start.1), dt(end.0, end.1)).unwrap()
}
