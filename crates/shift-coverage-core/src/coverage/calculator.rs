//! Coverage math: covered hours, gap extraction and overtime attribution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::interval::clip;
use crate::types::Interval;

use super::window::{day_bounds, ReferenceWindow};

/// The interval math behind one (entity, day, service) evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageBreakdown {
    /// Hours covered inside the reference window.
    pub covered_hours: f64,
    /// Uncovered sub-intervals of the reference window, in order.
    pub gaps: Vec<Interval>,
    /// Hours covered outside the reference window but inside the evaluated
    /// calendar day.
    pub overtime_hours: f64,
    /// The concrete out-of-window spans behind `overtime_hours`.
    pub overtime_spans: Vec<Interval>,
}

impl CoverageBreakdown {
    /// Sum of all reported gap durations. Together with `covered_hours`
    /// this always reconstructs the window duration exactly.
    pub fn gap_hours(&self) -> f64 {
        self.gaps.iter().map(Interval::duration_hours).sum()
    }

    /// Everything worked on the evaluated day: in-window coverage plus
    /// out-of-window overtime. This is the number the classifier compares
    /// against the required hours.
    pub fn total_worked_hours(&self) -> f64 {
        self.covered_hours + self.overtime_hours
    }
}

/// Compute covered hours, gaps and overtime for a set of merged intervals
/// against a reference window.
///
/// `merged` must be the output of [`crate::interval::merge_intervals`]:
/// sorted ascending and non-overlapping. `day` is the calendar day under
/// evaluation; coverage falling outside the window *and* outside that day
/// (a shift bleeding into the next day) is attributed to the other day's
/// computation and not counted here.
pub fn compute_coverage(
    merged: &[Interval],
    window: &ReferenceWindow,
    day: NaiveDate,
) -> CoverageBreakdown {
    let win = window.interval();

    // Walk the window start to end, accumulating in-window coverage and
    // emitting every uncovered sub-interval as a gap.
    let mut covered_hours = 0.0;
    let mut gaps = Vec::new();
    let mut cursor = win.start();
    for interval in merged {
        if let Some(inside) = clip(interval, win) {
            covered_hours += inside.duration_hours();
            if let Some(gap) = Interval::new(cursor, inside.start()) {
                gaps.push(gap);
            }
            cursor = cursor.max(inside.end());
        }
    }
    if let Some(tail) = Interval::new(cursor, win.end()) {
        gaps.push(tail);
    }

    // Overtime: the portion of each interval inside the day but outside
    // the window.
    let bounds = day_bounds(day);
    let mut overtime_spans = Vec::new();
    for interval in merged {
        if let Some(in_day) = clip(interval, &bounds) {
            if let Some(before) = Interval::new(in_day.start(), in_day.end().min(win.start())) {
                overtime_spans.push(before);
            }
            if let Some(after) = Interval::new(in_day.start().max(win.end()), in_day.end()) {
                overtime_spans.push(after);
            }
        }
    }
    let overtime_hours = overtime_spans.iter().map(Interval::duration_hours).sum();

    CoverageBreakdown {
        covered_hours,
        gaps,
        overtime_hours,
        overtime_spans,
    }
}

/// Total hours of a merged interval set clipped to one calendar day. Used
/// for the service-agnostic per-day aggregate.
pub fn covered_hours_in_day(merged: &[Interval], day: NaiveDate) -> f64 {
    let bounds = day_bounds(day);
    merged
        .iter()
        .filter_map(|interval| clip(interval, &bounds))
        .map(|clipped| clipped.duration_hours())
        .sum()
}
