//! Service window resolution: turning a daily requirement into a concrete
//! reference window for one calendar day.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::ApplicableDatePolicy;
use crate::types::{Interval, Service};

/// The concrete time span a service requires coverage for on one specific
/// day. For a midnight-crossing service the window extends into the next
/// calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceWindow {
    interval: Interval,
}

impl ReferenceWindow {
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Duration of the window in fractional hours; this is the required
    /// coverage the classifier compares against.
    pub fn required_hours(&self) -> f64 {
        self.interval.duration_hours()
    }
}

/// Outcome of resolving a service against one day.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum WindowResolution {
    /// The service requires coverage on this day.
    Applicable(ReferenceWindow),
    /// The day is outside the service's applicable dates.
    NotApplicable,
    /// The service carries no usable daily window (malformed upstream
    /// record); treated as absence of a requirement, never an error.
    NoRequirement,
}

/// Resolve a service's daily window into a concrete [`ReferenceWindow`]
/// for `day`.
///
/// A window whose end does not come after its start is interpreted as
/// crossing midnight: the end lands on the following day, so a
/// `22:00`..`06:00` service on day D yields `[D 22:00, D+1 06:00)`.
pub fn resolve_service_window(
    service: &Service,
    day: NaiveDate,
    policy: ApplicableDatePolicy,
) -> WindowResolution {
    let Some(window) = service.window else {
        return WindowResolution::NoRequirement;
    };

    let applicable = match policy {
        ApplicableDatePolicy::ListedDaysOnly => service.applicable_dates.contains(&day),
        ApplicableDatePolicy::EveryDayWhenEmpty => {
            service.applicable_dates.is_empty() || service.applicable_dates.contains(&day)
        }
    };
    if !applicable {
        return WindowResolution::NotApplicable;
    }

    let start = day.and_time(window.start);
    let mut end = day.and_time(window.end);
    if window.crosses_midnight() {
        end += Duration::days(1);
    }
    // After the midnight adjustment the end is strictly after the start.
    WindowResolution::Applicable(ReferenceWindow {
        interval: Interval::from_ordered(start, end),
    })
}

/// Calendar-day bounds `[D 00:00, D+1 00:00)`.
pub fn day_bounds(day: NaiveDate) -> Interval {
    let start = day.and_time(NaiveTime::MIN);
    Interval::from_ordered(start, start + Duration::days(1))
}
