//! The coverage pipeline: window resolution, coverage math, classification
//! and report types.

mod calculator;
mod classifier;
mod report;
#[cfg(test)]
mod tests;
mod window;

pub use calculator::{compute_coverage, covered_hours_in_day, CoverageBreakdown};
pub use classifier::{classify, Classification};
pub use report::{
    classification_counts, CoverageReport, DayAggregate, EntityCoverage, EntityRef,
};
pub use window::{day_bounds, resolve_service_window, ReferenceWindow, WindowResolution};
