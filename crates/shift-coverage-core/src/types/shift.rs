//! Scheduled work intervals.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::{GuardId, PropertyId, ServiceId, ShiftId};
use super::interval::Interval;

/// Lifecycle status of a shift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    #[default]
    Scheduled,
    Completed,
    Voided,
    Pending,
    Other,
}

/// A scheduled work interval for one guard at one property.
///
/// Timestamps come in two flavors: what was planned and what actually
/// happened. Coverage math works on the *effective* interval, which prefers
/// actual over planned on each side (see [`Shift::effective_interval`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub guard_id: GuardId,
    pub property_id: PropertyId,
    /// The service this shift is meant to satisfy, if any.
    pub service_id: Option<ServiceId>,
    pub actual_start: Option<NaiveDateTime>,
    pub actual_end: Option<NaiveDateTime>,
    pub planned_start: Option<NaiveDateTime>,
    pub planned_end: Option<NaiveDateTime>,
    pub status: ShiftStatus,
    /// Precomputed duration from the upstream system. May disagree with the
    /// timestamps; the engine recomputes durations independently and never
    /// reads this field for coverage math.
    pub hours_worked: Option<f64>,
}

impl Shift {
    /// The interval coverage math operates on: `(actual ?? planned)` start
    /// and end. Returns `None` when either side is missing entirely or the
    /// substituted end does not come after the start (malformed record).
    pub fn effective_interval(&self) -> Option<Interval> {
        let start = self.actual_start.or(self.planned_start)?;
        let end = self.actual_end.or(self.planned_end)?;
        Interval::new(start, end)
    }

    /// Whether this shift was cancelled and must not contribute coverage.
    pub fn is_voided(&self) -> bool {
        self.status == ShiftStatus::Voided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn base_shift() -> Shift {
        Shift {
            id: ShiftId::new(),
            guard_id: GuardId::new(),
            property_id: PropertyId::new(),
            service_id: None,
            actual_start: None,
            actual_end: None,
            planned_start: None,
            planned_end: None,
            status: ShiftStatus::Scheduled,
            hours_worked: None,
        }
    }

    #[test]
    fn test_effective_interval_prefers_actual() {
        let mut shift = base_shift();
        shift.planned_start = Some(dt(8));
        shift.planned_end = Some(dt(16));
        shift.actual_start = Some(dt(9));
        let iv = shift.effective_interval().unwrap();
        assert_eq!(iv.start(), dt(9));
        assert_eq!(iv.end(), dt(16));
        println!("[PASS] test_effective_interval_prefers_actual");
    }

    #[test]
    fn test_effective_interval_missing_side() {
        let mut shift = base_shift();
        shift.actual_start = Some(dt(8));
        assert!(shift.effective_interval().is_none());
        println!("[PASS] test_effective_interval_missing_side");
    }

    #[test]
    fn test_effective_interval_rejects_inverted() {
        let mut shift = base_shift();
        shift.planned_start = Some(dt(16));
        shift.planned_end = Some(dt(8));
        assert!(shift.effective_interval().is_none());
        println!("[PASS] test_effective_interval_rejects_inverted");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ShiftStatus::Voided).unwrap();
        assert_eq!(json, "\"voided\"");
        println!("[PASS] test_status_serialization");
    }
}
