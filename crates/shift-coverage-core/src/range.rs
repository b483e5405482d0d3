//! Range bucketing: expanding a (range kind, anchor date) pair into the
//! ordered list of calendar days a per-day aggregation loop runs over.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The kind of day range a view requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
    /// Just the anchor day.
    Day,
    /// The 7 days of the anchor's ISO week (Monday through Sunday).
    Week,
    /// Every day of the anchor's calendar month.
    Month,
    /// Anchor through an externally supplied end date, inclusive.
    Custom,
}

/// Expand a range request into calendar days.
///
/// The result is always non-empty, strictly ascending, with no gaps or
/// duplicates. A `Custom` request with a missing end date, or one before
/// the anchor, degrades to a single-day range so presentation layers never
/// receive an empty list.
pub fn expand_range(
    kind: RangeKind,
    anchor: NaiveDate,
    custom_end: Option<NaiveDate>,
) -> Vec<NaiveDate> {
    match kind {
        RangeKind::Day => vec![anchor],
        RangeKind::Week => {
            let monday = anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
            days_inclusive(monday, monday + Duration::days(6))
        }
        RangeKind::Month => {
            let first = anchor.with_day(1).unwrap_or(anchor);
            let next_month = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            };
            match next_month {
                Some(next) => days_inclusive(first, next - Duration::days(1)),
                None => vec![anchor],
            }
        }
        RangeKind::Custom => match custom_end {
            Some(end) if end >= anchor => days_inclusive(anchor, end),
            Some(end) => {
                warn!(%anchor, %end, "custom range ends before anchor, using single day");
                vec![anchor]
            }
            None => {
                warn!(%anchor, "custom range without end date, using single day");
                vec![anchor]
            }
        },
    }
}

fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn assert_strictly_ascending(days: &[NaiveDate]) {
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_day_range() {
        let anchor = d(2025, 8, 31);
        assert_eq!(expand_range(RangeKind::Day, anchor, None), vec![anchor]);
        println!("[PASS] test_day_range");
    }

    #[test]
    fn test_week_range_from_sunday() {
        // 2025-08-31 is a Sunday; the week runs from Monday 2025-08-25.
        let days = expand_range(RangeKind::Week, d(2025, 8, 31), None);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], d(2025, 8, 25));
        assert_eq!(days[6], d(2025, 8, 31));
        assert_strictly_ascending(&days);
        println!("[PASS] test_week_range_from_sunday");
    }

    #[test]
    fn test_week_range_from_monday() {
        let days = expand_range(RangeKind::Week, d(2025, 8, 25), None);
        assert_eq!(days[0], d(2025, 8, 25));
        assert_eq!(days[6], d(2025, 8, 31));
        println!("[PASS] test_week_range_from_monday");
    }

    #[test]
    fn test_month_range() {
        let days = expand_range(RangeKind::Month, d(2025, 2, 14), None);
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], d(2025, 2, 1));
        assert_eq!(days[27], d(2025, 2, 28));
        assert_strictly_ascending(&days);
        println!("[PASS] test_month_range");
    }

    #[test]
    fn test_month_range_december() {
        let days = expand_range(RangeKind::Month, d(2025, 12, 5), None);
        assert_eq!(days.len(), 31);
        assert_eq!(days[30], d(2025, 12, 31));
        println!("[PASS] test_month_range_december");
    }

    #[test]
    fn test_leap_february() {
        let days = expand_range(RangeKind::Month, d(2024, 2, 10), None);
        assert_eq!(days.len(), 29);
        println!("[PASS] test_leap_february");
    }

    #[test]
    fn test_custom_range_inclusive() {
        let days = expand_range(RangeKind::Custom, d(2025, 8, 30), Some(d(2025, 9, 2)));
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], d(2025, 8, 30));
        assert_eq!(days[3], d(2025, 9, 2));
        assert_strictly_ascending(&days);
        println!("[PASS] test_custom_range_inclusive");
    }

    #[test]
    fn test_custom_range_single_day() {
        let anchor = d(2025, 8, 30);
        let days = expand_range(RangeKind::Custom, anchor, Some(anchor));
        assert_eq!(days, vec![anchor]);
        println!("[PASS] test_custom_range_single_day");
    }

    #[test]
    fn test_custom_range_missing_end_falls_back() {
        let anchor = d(2025, 8, 30);
        assert_eq!(expand_range(RangeKind::Custom, anchor, None), vec![anchor]);
        println!("[PASS] test_custom_range_missing_end_falls_back");
    }

    #[test]
    fn test_custom_range_inverted_falls_back() {
        let anchor = d(2025, 8, 30);
        let days = expand_range(RangeKind::Custom, anchor, Some(d(2025, 8, 1)));
        assert_eq!(days, vec![anchor]);
        println!("[PASS] test_custom_range_inverted_falls_back");
    }
}
