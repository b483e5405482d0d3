//! Test helpers for pipeline tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{
    DailyWindow, GuardId, PropertyId, Service, ServiceId, Shift, ShiftStatus,
};

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

pub fn dt_on(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

/// A completed shift with actual timestamps on the given date.
pub fn shift(
    guard_id: GuardId,
    property_id: PropertyId,
    service_id: Option<ServiceId>,
    date: NaiveDate,
    start: (u32, u32),
    end: (u32, u32),
) -> Shift {
    shift_between(
        guard_id,
        property_id,
        service_id,
        dt_on(date, start.0, start.1),
        dt_on(date, end.0, end.1),
    )
}

/// A completed shift spanning arbitrary timestamps, for overnight cases.
pub fn shift_between(
    guard_id: GuardId,
    property_id: PropertyId,
    service_id: Option<ServiceId>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Shift {
    Shift {
        id: crate::types::ShiftId::new(),
        guard_id,
        property_id,
        service_id,
        actual_start: Some(start),
        actual_end: Some(end),
        planned_start: None,
        planned_end: None,
        status: ShiftStatus::Completed,
        hours_worked: None,
    }
}

/// A service on the given property with a `HH:MM` window, applicable on
/// the fixed test day.
pub fn service(property_id: PropertyId, start: &str, end: &str) -> Service {
    Service::new(
        ServiceId::new(),
        property_id,
        "Patrol",
        Some(DailyWindow::parse(start, end).unwrap()),
    )
    .with_applicable_dates([day()])
}
