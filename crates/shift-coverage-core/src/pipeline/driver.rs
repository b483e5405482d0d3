//! Coverage engine driving per-entity, per-day evaluation.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CoverageConfig;
use crate::coverage::{
    classify, compute_coverage, covered_hours_in_day, day_bounds, resolve_service_window,
    Classification, CoverageReport, DayAggregate, EntityCoverage, EntityRef, ReferenceWindow,
    WindowResolution,
};
use crate::interval::{clip, merge_intervals};
use crate::types::{Interval, Service, Shift};

/// Which entity the evaluation is grouped under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Property,
    Guard,
}

/// The coverage engine: a pure function of its inputs, safe to invoke
/// concurrently across entities and days.
///
/// Fetching shifts and services is the caller's concern; the engine takes
/// the already-retrieved records as plain arguments and holds no ambient
/// state beyond its configuration.
#[derive(Clone, Debug, Default)]
pub struct CoverageEngine {
    config: CoverageConfig,
}

impl CoverageEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: CoverageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoverageConfig {
        &self.config
    }

    /// Evaluate coverage for every entity across the given days.
    ///
    /// Emits, per entity: one [`CoverageReport`] for each (day, service)
    /// combination that applies to it, plus one service-agnostic
    /// [`DayAggregate`] per day. Entities are discovered from the shift
    /// set; when grouping by property, properties that carry services but
    /// no shifts are included too, so a fully unstaffed requirement still
    /// surfaces as a gap.
    pub fn evaluate(
        &self,
        shifts: &[Shift],
        services: &[Service],
        group_by: GroupBy,
        days: &[NaiveDate],
    ) -> Vec<EntityCoverage> {
        let usable = usable_shifts(shifts);

        let mut by_entity: BTreeMap<EntityRef, Vec<&Shift>> = BTreeMap::new();
        for &shift in &usable {
            let entity = match group_by {
                GroupBy::Property => EntityRef::Property(shift.property_id),
                GroupBy::Guard => EntityRef::Guard(shift.guard_id),
            };
            by_entity.entry(entity).or_default().push(shift);
        }
        if group_by == GroupBy::Property {
            for service in services {
                by_entity
                    .entry(EntityRef::Property(service.property_id))
                    .or_default();
            }
        }

        by_entity
            .into_iter()
            .map(|(entity, entity_shifts)| {
                self.evaluate_entity(entity, &entity_shifts, services, days)
            })
            .collect()
    }

    /// Evaluate one entity across the given days.
    fn evaluate_entity(
        &self,
        entity: EntityRef,
        shifts: &[&Shift],
        services: &[Service],
        days: &[NaiveDate],
    ) -> EntityCoverage {
        let candidates = candidate_services(entity, shifts, services);
        let mut reports = Vec::new();
        let mut aggregates = Vec::new();

        for &day in days {
            debug!(%entity, %day, services = candidates.len(), "evaluating coverage");
            aggregates.push(self.aggregate_for_day(entity, shifts, day));
            for service in &candidates {
                reports.push(self.evaluate_service_day(entity, shifts, service, day));
            }
        }

        EntityCoverage {
            entity,
            reports,
            aggregates,
        }
    }

    /// Service-agnostic roll-up for one day: every usable shift clipped to
    /// the day's bounds, merged, summed.
    fn aggregate_for_day(&self, entity: EntityRef, shifts: &[&Shift], day: NaiveDate) -> DayAggregate {
        let bounds = day_bounds(day);
        let (clipped, shift_count) = clip_shifts(shifts, &bounds, |_| true);
        let merged = merge_intervals(clipped);
        DayAggregate {
            entity,
            day,
            shift_count,
            total_covered_hours: covered_hours_in_day(&merged, day),
        }
    }

    /// Evaluate one service against one day: resolve the window, run the
    /// interval math over the shift set filtered to this service, classify.
    fn evaluate_service_day(
        &self,
        entity: EntityRef,
        shifts: &[&Shift],
        service: &Service,
        day: NaiveDate,
    ) -> CoverageReport {
        let resolution =
            resolve_service_window(service, day, self.config.applicable_date_policy);

        let window = match resolution {
            WindowResolution::Applicable(window) => window,
            WindowResolution::NotApplicable | WindowResolution::NoRequirement => {
                // Raw-stats fallback: day-bounded hours for this service's
                // shifts, no flag.
                let bounds = day_bounds(day);
                let (clipped, shift_count) =
                    clip_shifts(shifts, &bounds, |s| s.service_id == Some(service.id));
                let merged = merge_intervals(clipped);
                let classification = match resolution {
                    WindowResolution::NotApplicable => Classification::NotApplicable,
                    _ => Classification::NoRequirement,
                };
                return CoverageReport {
                    entity,
                    day,
                    service_id: Some(service.id),
                    shift_count,
                    covered_hours: covered_hours_in_day(&merged, day),
                    classification,
                    gaps: Vec::new(),
                    overtime_hours: None,
                };
            }
        };

        // Hours before this window that satisfied the same service's
        // window on the previous day belong to that day's evaluation, not
        // to this one as overtime.
        let prior_window = day
            .pred_opt()
            .map(|prior| resolve_service_window(service, prior, self.config.applicable_date_policy))
            .and_then(|resolution| match resolution {
                WindowResolution::Applicable(window) => Some(window),
                _ => None,
            });

        let span = evaluation_span(day, &window, prior_window.as_ref());
        let (clipped, shift_count) =
            clip_shifts(shifts, &span, |s| s.service_id == Some(service.id));
        let merged = merge_intervals(clipped);
        let breakdown = compute_coverage(&merged, &window, day);

        let covered_hours = breakdown.total_worked_hours();
        let classification = classify(
            covered_hours,
            Some(window.required_hours()),
            self.config.tolerance_hours,
        );

        let gaps = match classification {
            Classification::Gap { .. } => breakdown.gaps,
            _ => Vec::new(),
        };
        let overtime_hours = match classification {
            Classification::Overtime { excess_hours } => Some(excess_hours),
            _ => None,
        };

        CoverageReport {
            entity,
            day,
            service_id: Some(service.id),
            shift_count,
            covered_hours,
            classification,
            gaps,
            overtime_hours,
        }
    }
}

/// Drop voided and malformed shifts, logging each exclusion. One bad
/// record must never fail the batch.
fn usable_shifts(shifts: &[Shift]) -> Vec<&Shift> {
    shifts
        .iter()
        .filter(|shift| {
            if shift.is_voided() {
                return false;
            }
            if shift.effective_interval().is_none() {
                warn!(shift_id = %shift.id, "excluding shift with no usable interval");
                return false;
            }
            true
        })
        .collect()
}

/// Clip the effective intervals of the shifts matching `filter` against
/// `window`, returning the clipped intervals and the count of shifts that
/// contributed a non-empty portion.
fn clip_shifts(
    shifts: &[&Shift],
    window: &Interval,
    filter: impl Fn(&Shift) -> bool,
) -> (Vec<Interval>, usize) {
    let clipped: Vec<Interval> = shifts
        .iter()
        .copied()
        .filter(|shift| filter(shift))
        .filter_map(Shift::effective_interval)
        .filter_map(|interval| clip(&interval, window))
        .collect();
    let count = clipped.len();
    (clipped, count)
}

/// Services relevant to one entity: all of a property's services when
/// grouping by property, or the services referenced by a guard's shifts
/// when grouping by guard.
fn candidate_services<'a>(
    entity: EntityRef,
    shifts: &[&Shift],
    services: &'a [Service],
) -> Vec<&'a Service> {
    match entity {
        EntityRef::Property(property_id) => services
            .iter()
            .filter(|service| service.property_id == property_id)
            .collect(),
        EntityRef::Guard(_) => {
            let referenced: HashSet<_> =
                shifts.iter().filter_map(|shift| shift.service_id).collect();
            services
                .iter()
                .filter(|service| referenced.contains(&service.id))
                .collect()
        }
    }
}

/// The span shifts are clipped against when a service window applies: the
/// calendar day extended to the window's end, so a midnight-crossing
/// window sees the next morning's coverage.
///
/// When the same service's window resolved for the previous day reaches
/// into this one (a midnight-crossing requirement on consecutive days),
/// the span starts where that window ends: those morning hours were
/// counted by the previous day's evaluation and must not reappear here
/// as overtime.
fn evaluation_span(
    day: NaiveDate,
    window: &ReferenceWindow,
    prior_window: Option<&ReferenceWindow>,
) -> Interval {
    let bounds = day_bounds(day);
    let mut start = bounds.start().min(window.interval().start());
    if let Some(prior) = prior_window {
        // A prior daily window always ends on or before this window's
        // start, so the span stays non-empty.
        start = start.max(prior.interval().end());
    }
    let end = bounds.end().max(window.interval().end());
    Interval::from_ordered(start, end)
}
