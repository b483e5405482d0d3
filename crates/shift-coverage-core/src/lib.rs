//! Shift Coverage & Gap Detection Engine
//!
//! Given a set of scheduled work intervals (shifts) and an expected
//! coverage requirement (a service's daily time window), this crate
//! determines whether coverage for a calendar day is complete, deficient
//! (gap) or excessive (overtime), and provides the supporting interval
//! math: clipping, merging and gap extraction.
//!
//! # Architecture
//!
//! - Domain types (`Shift`, `Service`, `Interval`, id newtypes)
//! - Interval algebra (`clip`, `merge_intervals`)
//! - The coverage pipeline (`resolve_service_window`, `compute_coverage`,
//!   `classify`, report types)
//! - Range bucketing (`expand_range`) for day/week/month/custom views
//! - The aggregation driver (`CoverageEngine`) running the pipeline per
//!   entity and day
//!
//! The engine is pure and synchronous: no I/O, no shared mutable state.
//! Fetching shifts and services is the caller's concern; every operation
//! is a deterministic function of its explicit inputs, safe to invoke
//! concurrently across entities and days.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use shift_coverage_core::{
//!     expand_range, CoverageEngine, GroupBy, RangeKind,
//! };
//!
//! let days = expand_range(
//!     RangeKind::Week,
//!     NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
//!     None,
//! );
//! assert_eq!(days.len(), 7);
//!
//! let engine = CoverageEngine::new();
//! let results = engine.evaluate(&[], &[], GroupBy::Property, &days);
//! assert!(results.is_empty());
//! ```

pub mod config;
pub mod coverage;
pub mod error;
pub mod interval;
pub mod pipeline;
pub mod range;
pub mod types;

// Re-exports for convenience
pub use config::{ApplicableDatePolicy, CoverageConfig, DEFAULT_TOLERANCE_HOURS};
pub use coverage::{
    classification_counts, classify, compute_coverage, resolve_service_window, Classification,
    CoverageBreakdown, CoverageReport, DayAggregate, EntityCoverage, EntityRef, ReferenceWindow,
    WindowResolution,
};
pub use error::{EngineError, EngineResult};
pub use interval::{clip, merge_intervals};
pub use pipeline::{CoverageEngine, GroupBy};
pub use range::{expand_range, RangeKind};
pub use types::{
    DailyWindow, GuardId, Interval, PropertyId, Service, ServiceId, Shift, ShiftId, ShiftStatus,
};
