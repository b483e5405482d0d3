//! Half-open time intervals in the local calendar.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open time interval `[start, end)` with `end > start`.
///
/// Zero- and negative-length spans are unrepresentable: [`Interval::new`]
/// returns `None` for them, so every constructed interval has positive
/// duration. All timestamps are interpreted in one consistent local
/// calendar; there is no timezone handling here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Interval {
    /// Build an interval, rejecting `end <= start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        if end > start {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Length of the interval in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }

    /// Whether the two intervals share at least one point.
    ///
    /// Adjacent intervals (one ends exactly where the other starts) do not
    /// overlap under the half-open convention.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `instant` lies inside the interval.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Extend the end of the interval. The new end must not precede the
    /// current one; used by the merger when fusing contiguous intervals.
    pub(crate) fn extend_end(&mut self, end: NaiveDateTime) {
        debug_assert!(end >= self.end);
        self.end = end;
    }

    /// Construct from endpoints the caller has already proven ordered,
    /// e.g. calendar-day bounds. Internal; external callers go through
    /// [`Interval::new`].
    pub(crate) fn from_ordered(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(end > start);
        Self { start, end }
    }
}
