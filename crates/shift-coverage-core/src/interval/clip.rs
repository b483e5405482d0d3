//! Interval clipping.

use crate::types::Interval;

/// Restrict `interval` to the portion falling inside `window`.
///
/// Returns the intersection `(max(starts), min(ends))` when it has positive
/// duration, `None` otherwise. Used to limit a shift (which may span
/// multiple days) to exactly one day or one reference window.
pub fn clip(interval: &Interval, window: &Interval) -> Option<Interval> {
    Interval::new(
        interval.start().max(window.start()),
        interval.end().min(window.end()),
    )
}
