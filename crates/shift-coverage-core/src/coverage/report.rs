//! Coverage report types consumed by presentation and reporting layers.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{GuardId, Interval, PropertyId, ServiceId};

use super::classifier::Classification;

/// The entity a report is grouped under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityRef {
    Property(PropertyId),
    Guard(GuardId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Property(id) => write!(f, "property:{}", id),
            EntityRef::Guard(id) => write!(f, "guard:{}", id),
        }
    }
}

/// Coverage outcome for one (entity, day, service) combination.
///
/// Ephemeral: recomputed on demand, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub entity: EntityRef,
    pub day: NaiveDate,
    /// The service evaluated, or `None` for a requirement-free report.
    pub service_id: Option<ServiceId>,
    /// Shifts that contributed at least one minute to this evaluation.
    pub shift_count: usize,
    /// Total hours worked on the day for this evaluation (in-window
    /// coverage plus out-of-window overtime).
    pub covered_hours: f64,
    pub classification: Classification,
    /// Uncovered sub-intervals of the reference window; populated only
    /// when `classification` is `Gap`.
    pub gaps: Vec<Interval>,
    /// Excess hours beyond the requirement; populated only when
    /// `classification` is `Overtime`.
    pub overtime_hours: Option<f64>,
}

impl CoverageReport {
    pub fn has_gaps(&self) -> bool {
        !self.gaps.is_empty()
    }

    /// Sum of all reported gap durations.
    pub fn total_gap_hours(&self) -> f64 {
        self.gaps.iter().map(Interval::duration_hours).sum()
    }

    /// Human-readable description of each missing sub-interval, e.g.
    /// `missing 14:00-16:00`. A bare number of missing hours is not enough
    /// for an operator; the concrete spans are the point.
    pub fn gap_summaries(&self) -> Vec<String> {
        self.gaps
            .iter()
            .map(|gap| {
                format!(
                    "missing {}-{}",
                    gap.start().format("%H:%M"),
                    gap.end().format("%H:%M")
                )
            })
            .collect()
    }

    pub fn is_flagged(&self) -> bool {
        self.classification.is_flagged()
    }
}

/// Service-agnostic roll-up for one (entity, day): raw shift and hour
/// counts, shown when no service-specific breakdown applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    pub entity: EntityRef,
    pub day: NaiveDate,
    pub shift_count: usize,
    pub total_covered_hours: f64,
}

/// All reports and aggregates for one entity across the requested range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityCoverage {
    pub entity: EntityRef,
    /// One report per (day, service) combination, day-major order.
    pub reports: Vec<CoverageReport>,
    /// One aggregate per day, ascending.
    pub aggregates: Vec<DayAggregate>,
}

impl EntityCoverage {
    /// Reports an operator should look at: gaps and overtime.
    pub fn flagged_reports(&self) -> Vec<&CoverageReport> {
        self.reports.iter().filter(|r| r.is_flagged()).collect()
    }
}

/// Count reports per classification label across a report set.
pub fn classification_counts(reports: &[CoverageReport]) -> HashMap<&'static str, usize> {
    let mut counts = HashMap::new();
    for report in reports {
        *counts.entry(report.classification.label()).or_insert(0) += 1;
    }
    counts
}
