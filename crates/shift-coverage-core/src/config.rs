//! Configuration for coverage evaluation.

use serde::{Deserialize, Serialize};

/// Default reconciliation tolerance in hours (6 minutes).
pub const DEFAULT_TOLERANCE_HOURS: f64 = 0.1;

/// How a service's `applicable_dates` set constrains the days it is in force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicableDatePolicy {
    /// A day absent from `applicable_dates` yields `NotApplicable`, even
    /// when the set is empty.
    #[default]
    ListedDaysOnly,
    /// An empty `applicable_dates` set means the window applies every day;
    /// a non-empty set still restricts to the listed days.
    EveryDayWhenEmpty,
}

/// Configuration for coverage evaluation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverageConfig {
    /// Allowed slack in hours between covered and required hours before a
    /// day is flagged Gap or Overtime instead of Complete.
    pub tolerance_hours: f64,
    /// How `applicable_dates` membership is interpreted.
    pub applicable_date_policy: ApplicableDatePolicy,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            tolerance_hours: DEFAULT_TOLERANCE_HOURS,
            applicable_date_policy: ApplicableDatePolicy::default(),
        }
    }
}

impl CoverageConfig {
    /// Create a config with a custom tolerance, keeping the default policy.
    pub fn with_tolerance(tolerance_hours: f64) -> Self {
        Self {
            tolerance_hours,
            ..Self::default()
        }
    }
}
