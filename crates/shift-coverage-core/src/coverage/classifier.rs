//! Coverage classification: a total decision table over covered and
//! required hours.

use serde::{Deserialize, Serialize};

/// Outcome of evaluating one (entity, day, service) combination.
///
/// The classifier is stateless and side-effect-free; nothing here is ever
/// persisted, every outcome is recomputed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Classification {
    /// Covered hours match required hours within the tolerance.
    Complete,
    /// Covered hours fall short of required hours.
    Gap { missing_hours: f64 },
    /// Covered hours exceed required hours.
    Overtime { excess_hours: f64 },
    /// A service exists but the day is outside its applicable dates.
    NotApplicable,
    /// No usable coverage requirement exists for the entity.
    NoRequirement,
}

impl Classification {
    /// Stable lowercase label, e.g. for grouping counts.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Complete => "complete",
            Classification::Gap { .. } => "gap",
            Classification::Overtime { .. } => "overtime",
            Classification::NotApplicable => "not_applicable",
            Classification::NoRequirement => "no_requirement",
        }
    }

    /// Whether this outcome should be surfaced to an operator as a flag.
    /// `NotApplicable` and `NoRequirement` fall back to raw shift/hour
    /// display with no flag.
    pub fn is_flagged(&self) -> bool {
        matches!(
            self,
            Classification::Gap { .. } | Classification::Overtime { .. }
        )
    }
}

/// Classify covered hours against an optional requirement.
///
/// Rules, in order:
/// 1. no requirement (`required_hours` is `None`) yields `NoRequirement`;
/// 2. `|covered - required| <= tolerance` yields `Complete`;
/// 3. `covered > required` yields `Overtime` carrying the excess;
/// 4. otherwise `Gap` carrying the shortfall.
///
/// `NotApplicable` is decided earlier, by
/// [`crate::coverage::resolve_service_window`], because it depends on date
/// set membership rather than on the two numbers here. The table is total:
/// every input triple maps to exactly one outcome.
pub fn classify(
    covered_hours: f64,
    required_hours: Option<f64>,
    tolerance_hours: f64,
) -> Classification {
    let Some(required) = required_hours else {
        return Classification::NoRequirement;
    };

    let delta = covered_hours - required;
    if delta.abs() <= tolerance_hours {
        Classification::Complete
    } else if delta > 0.0 {
        Classification::Overtime {
            excess_hours: delta,
        }
    } else {
        Classification::Gap {
            missing_hours: -delta,
        }
    }
}
