//! Test helpers for coverage tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::ApplicableDatePolicy;
use crate::coverage::{resolve_service_window, ReferenceWindow, WindowResolution};
use crate::types::{DailyWindow, Interval, PropertyId, Service, ServiceId};

/// The fixed day most coverage tests evaluate against.
pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

pub fn dt_on(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

pub fn dt(hour: u32, minute: u32) -> NaiveDateTime {
    dt_on(day(), hour, minute)
}

pub fn iv(start: (u32, u32), end: (u32, u32)) -> Interval {
    Interval::new(dt(start.0, start.1), dt(end.0, end.1)).unwrap()
}

/// A service on the fixed day with the given `HH:MM` window.
pub fn service_with_window(start: &str, end: &str) -> Service {
    Service::new(
        ServiceId::new(),
        PropertyId::new(),
        "Night patrol",
        Some(DailyWindow::parse(start, end).unwrap()),
    )
    .with_applicable_dates([day()])
}

/// Resolve a `HH:MM` window into a concrete [`ReferenceWindow`] on the
/// fixed day.
pub fn window(start: &str, end: &str) -> ReferenceWindow {
    match resolve_service_window(
        &service_with_window(start, end),
        day(),
        ApplicableDatePolicy::ListedDaysOnly,
    ) {
        WindowResolution::Applicable(window) => window,
        other => panic!("expected applicable window, got {:?}", other),
    }
}
