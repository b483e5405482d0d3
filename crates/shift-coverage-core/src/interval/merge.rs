//! Interval merging.

use crate::types::Interval;

/// Merge an unordered set of intervals into the minimal ordered list of
/// non-overlapping intervals covering exactly the same point set.
///
/// Contract:
/// - input order is irrelevant; output is sorted ascending by start, ties
///   broken by end ascending, so results are deterministic;
/// - touching intervals count as contiguous and are fused with no minimum
///   gap threshold: `[8,10)` and `[10,12)` become `[8,12)`;
/// - the operation is idempotent: merging a merged list is a no-op.
///
/// Invalid (non-positive) intervals cannot exist by construction of
/// [`Interval`], so there is nothing to discard here.
pub fn merge_intervals(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    sorted.sort_by_key(|iv| (iv.start(), iv.end()));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match merged.last_mut() {
            // Touching or overlapping the running interval: fuse.
            Some(last) if iv.start() <= last.end() => {
                if iv.end() > last.end() {
                    last.extend_end(iv.end());
                }
            }
            _ => merged.push(iv),
        }
    }
    merged
}
