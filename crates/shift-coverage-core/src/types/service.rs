//! Coverage requirements: services and their daily windows.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ids::{PropertyId, ServiceId};

/// A daily time-of-day window, e.g. `08:00`..`16:00`.
///
/// When `end <= start` the window crosses midnight: a `22:00`..`06:00`
/// window on day D runs from D 22:00 to D+1 06:00 (8 hours).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl DailyWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse a window from `HH:MM` strings as delivered by upstream APIs.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self {
            start: parse_time_of_day(start)?,
            end: parse_time_of_day(end)?,
        })
    }

    /// Whether the window runs past midnight into the next day.
    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// Window length in fractional hours, accounting for midnight crossing.
    pub fn duration_hours(&self) -> f64 {
        let seconds = if self.crosses_midnight() {
            (self.end - self.start).num_seconds() + 24 * 3600
        } else {
            (self.end - self.start).num_seconds()
        };
        seconds as f64 / 3600.0
    }
}

fn parse_time_of_day(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| EngineError::InvalidTimeOfDay {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// An expected coverage requirement for a property.
///
/// A service whose daily window failed to parse upstream is represented
/// with `window: None` and falls through to `NoRequirement` during
/// resolution; it is never a fatal error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub property_id: PropertyId,
    pub name: String,
    /// The daily time window this service requires coverage for. `None`
    /// when the upstream record was malformed (missing start or end).
    pub window: Option<DailyWindow>,
    /// Calendar dates on which the window is in force. Interpretation of an
    /// empty set is governed by [`crate::config::ApplicableDatePolicy`].
    pub applicable_dates: BTreeSet<NaiveDate>,
}

impl Service {
    pub fn new(
        id: ServiceId,
        property_id: PropertyId,
        name: impl Into<String>,
        window: Option<DailyWindow>,
    ) -> Self {
        Self {
            id,
            property_id,
            name: name.into(),
            window,
            applicable_dates: BTreeSet::new(),
        }
    }

    pub fn with_applicable_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.applicable_dates = dates.into_iter().collect();
        self
    }
}
