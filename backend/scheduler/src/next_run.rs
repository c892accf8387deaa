//! Next-run computation by sweeping the calendar minute by minute.
//!
//! Works on naive (wall-clock) date-times; the caller decides whether the
//! reference instant is local time or UTC.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use cronlens_core::ParsedCron;
use tracing::debug;

/// Upper bound on sweep steps: three years of minutes.
pub const MAX_SWEEP_ITERATIONS: u32 = 1_576_800;

/// Whether `candidate` satisfies every field except seconds.
///
/// Minute, hour and month must all match. When both day-of-month and
/// day-of-week are restricted, either one matching is enough.
pub fn matches_without_second(parsed: &ParsedCron, candidate: NaiveDateTime) -> bool {
    if !parsed.minute.contains(candidate.minute())
        || !parsed.hour.contains(candidate.hour())
        || !parsed.month.contains(candidate.month())
    {
        return false;
    }

    let dom = parsed.day_of_month.contains(candidate.day());
    let dow = parsed
        .day_of_week
        .contains(candidate.weekday().num_days_from_sunday());

    match (parsed.day_of_month.is_wildcard, parsed.day_of_week.is_wildcard) {
        (true, true) => true,
        (true, false) => dow,
        (false, true) => dom,
        (false, false) => dom || dow,
    }
}

/// Whether `candidate` satisfies every field including seconds.
pub fn matches(parsed: &ParsedCron, candidate: NaiveDateTime) -> bool {
    parsed.second.contains(candidate.second()) && matches_without_second(parsed, candidate)
}

fn truncate_to_minute(t: NaiveDateTime) -> NaiveDateTime {
    t.with_nanosecond(0)
        .and_then(|t| t.with_second(0))
        .unwrap_or(t)
}

fn truncate_to_second(t: NaiveDateTime) -> NaiveDateTime {
    t.with_nanosecond(0).unwrap_or(t)
}

/// The next `count` instants strictly after `now` that match `parsed`, in
/// ascending order. Returns fewer when the sweep limit is reached first.
pub fn next_runs(parsed: &ParsedCron, now: NaiveDateTime, count: usize) -> Vec<NaiveDateTime> {
    if count == 0 {
        return Vec::new();
    }
    if parsed.has_seconds {
        next_runs_with_seconds(parsed, now, count)
    } else {
        next_runs_by_minute(parsed, now, count)
    }
}

/// Upper bound on the result's initial capacity.
const PREALLOCATED_RUNS: usize = 64;

fn next_minute(t: NaiveDateTime) -> Option<NaiveDateTime> {
    t.checked_add_signed(Duration::minutes(1))
}

fn next_runs_by_minute(parsed: &ParsedCron, now: NaiveDateTime, count: usize) -> Vec<NaiveDateTime> {
    let mut runs = Vec::with_capacity(count.min(PREALLOCATED_RUNS));
    let Some(mut cursor) = next_minute(truncate_to_minute(now)) else {
        return runs;
    };

    for _ in 0..MAX_SWEEP_ITERATIONS {
        if matches_without_second(parsed, cursor) {
            runs.push(cursor);
            if runs.len() >= count {
                return runs;
            }
        }
        match next_minute(cursor) {
            Some(next) => cursor = next,
            None => {
                debug!(found = runs.len(), "Calendar end reached");
                return runs;
            }
        }
    }

    debug!(found = runs.len(), wanted = count, "Sweep limit reached");
    runs
}

fn next_runs_with_seconds(
    parsed: &ParsedCron,
    now: NaiveDateTime,
    count: usize,
) -> Vec<NaiveDateTime> {
    let mut runs = Vec::with_capacity(count.min(PREALLOCATED_RUNS));
    let Some(start) = truncate_to_second(now).checked_add_signed(Duration::seconds(1)) else {
        return runs;
    };
    let mut cursor = truncate_to_minute(start);

    for _ in 0..MAX_SWEEP_ITERATIONS {
        if matches_without_second(parsed, cursor) {
            for second in &parsed.second.values {
                let Some(candidate) =
                    cursor.checked_add_signed(Duration::seconds(i64::from(*second)))
                else {
                    break;
                };
                if candidate < start {
                    continue;
                }
                runs.push(candidate);
                if runs.len() >= count {
                    return runs;
                }
            }
        }
        match next_minute(cursor) {
            Some(next) => cursor = next,
            None => {
                debug!(found = runs.len(), "Calendar end reached");
                return runs;
            }
        }
    }

    debug!(found = runs.len(), wanted = count, "Sweep limit reached");
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cron_parser::parse_expression;
    use chrono::{NaiveDate, Weekday};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn every_five_minutes() {
        let parsed = parse_expression("*/5 * * * *").unwrap();
        let runs = next_runs(&parsed, at(2025, 1, 1, 0, 2, 0), 5);
        assert_eq!(
            runs,
            vec![
                at(2025, 1, 1, 0, 5, 0),
                at(2025, 1, 1, 0, 10, 0),
                at(2025, 1, 1, 0, 15, 0),
                at(2025, 1, 1, 0, 20, 0),
                at(2025, 1, 1, 0, 25, 0),
            ]
        );
    }

    #[test]
    fn runs_are_strictly_after_now() {
        let parsed = parse_expression("* * * * *").unwrap();
        let now = at(2025, 1, 1, 0, 5, 0);
        let runs = next_runs(&parsed, now, 1);
        assert_eq!(runs, vec![at(2025, 1, 1, 0, 6, 0)]);

        let now = at(2025, 1, 1, 0, 5, 59);
        assert_eq!(next_runs(&parsed, now, 1), vec![at(2025, 1, 1, 0, 6, 0)]);
    }

    #[test]
    fn weekdays_at_nine() {
        let parsed = parse_expression("0 9 * * 1-5").unwrap();
        // 2025-01-03 is a Friday.
        let runs = next_runs(&parsed, at(2025, 1, 3, 10, 0, 0), 5);
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], at(2025, 1, 6, 9, 0, 0));
        for run in &runs {
            assert!(!matches!(run.weekday(), Weekday::Sat | Weekday::Sun));
            assert_eq!((run.hour(), run.minute()), (9, 0));
        }
    }

    #[test]
    fn yearly_only_matches_first_of_january() {
        let parsed = parse_expression("30 14 1 1 *").unwrap();
        let runs = next_runs(&parsed, at(2025, 3, 1, 0, 0, 0), 2);
        assert_eq!(runs, vec![at(2026, 1, 1, 14, 30, 0), at(2027, 1, 1, 14, 30, 0)]);
    }

    #[test]
    fn day_fields_use_or_when_both_restricted() {
        let parsed = parse_expression("0 0 15 * 1").unwrap();
        // 2025-01-15 is a Wednesday: matches by day of month.
        assert!(matches_without_second(&parsed, at(2025, 1, 15, 0, 0, 0)));
        // 2025-01-13 is a Monday: matches by day of week.
        assert!(matches_without_second(&parsed, at(2025, 1, 13, 0, 0, 0)));
        // 2025-01-14 is a Tuesday, not the 15th.
        assert!(!matches_without_second(&parsed, at(2025, 1, 14, 0, 0, 0)));
    }

    #[test]
    fn single_restricted_day_field_decides_alone() {
        let parsed = parse_expression("0 0 * * 1").unwrap();
        assert!(matches_without_second(&parsed, at(2025, 1, 13, 0, 0, 0)));
        assert!(!matches_without_second(&parsed, at(2025, 1, 15, 0, 0, 0)));

        let parsed = parse_expression("0 0 15 * *").unwrap();
        assert!(matches_without_second(&parsed, at(2025, 1, 15, 0, 0, 0)));
        assert!(!matches_without_second(&parsed, at(2025, 1, 13, 0, 0, 0)));
    }

    #[test]
    fn impossible_date_returns_empty() {
        let parsed = parse_expression("0 0 31 2 *").unwrap();
        assert!(next_runs(&parsed, at(2025, 1, 1, 0, 0, 0), 5).is_empty());
    }

    #[test]
    fn zero_count_is_empty() {
        let parsed = parse_expression("* * * * *").unwrap();
        assert!(next_runs(&parsed, at(2025, 1, 1, 0, 0, 0), 0).is_empty());
    }

    #[test]
    fn seconds_expand_within_matching_minute() {
        let parsed = parse_expression("*/20 * * * * *").unwrap();
        let runs = next_runs(&parsed, at(2025, 1, 1, 0, 0, 25), 4);
        assert_eq!(
            runs,
            vec![
                at(2025, 1, 1, 0, 0, 40),
                at(2025, 1, 1, 0, 1, 0),
                at(2025, 1, 1, 0, 1, 20),
                at(2025, 1, 1, 0, 1, 40),
            ]
        );
    }

    #[test]
    fn seconds_start_strictly_after_now() {
        let parsed = parse_expression("40 * * * * *").unwrap();
        let runs = next_runs(&parsed, at(2025, 1, 1, 0, 0, 40), 2);
        assert_eq!(runs, vec![at(2025, 1, 1, 0, 1, 40), at(2025, 1, 1, 0, 2, 40)]);
    }

    #[test]
    fn seconds_cross_minute_boundary() {
        let parsed = parse_expression("* * * * * *").unwrap();
        let runs = next_runs(&parsed, at(2025, 1, 1, 0, 0, 59), 2);
        assert_eq!(runs, vec![at(2025, 1, 1, 0, 1, 0), at(2025, 1, 1, 0, 1, 1)]);
    }

    #[test]
    fn runs_are_ascending_and_match() {
        for expr in ["*/7 3-5 * * *", "0 12 1,15 * 5", "15,45 */6 * 2-4 *", "10 0 9 * * 0,6"] {
            let parsed = parse_expression(expr).unwrap();
            let runs = next_runs(&parsed, at(2025, 6, 30, 23, 59, 30), 5);
            assert_eq!(runs.len(), 5, "{expr}");
            assert!(runs.windows(2).all(|w| w[0] < w[1]), "{expr}");
            assert!(runs.iter().all(|r| matches(&parsed, *r)), "{expr}");
        }
    }

    #[test]
    fn leap_day() {
        let parsed = parse_expression("0 0 29 2 *").unwrap();
        let runs = next_runs(&parsed, at(2026, 1, 1, 0, 0, 0), 1);
        assert_eq!(runs, vec![at(2028, 2, 29, 0, 0, 0)]);
    }

    #[test]
    fn sweep_is_bounded_to_three_years() {
        // The next 29 February is more than three years away.
        let parsed = parse_expression("0 0 29 2 *").unwrap();
        assert!(next_runs(&parsed, at(2025, 1, 1, 0, 0, 0), 1).is_empty());
    }

    #[test]
    fn huge_count_does_not_reserve_up_front() {
        let parsed = parse_expression("0 0 31 2 *").unwrap();
        assert!(next_runs(&parsed, at(2025, 1, 1, 0, 0, 0), usize::MAX).is_empty());

        let parsed = parse_expression("0 0 1 1 *").unwrap();
        let runs = next_runs(&parsed, at(2025, 6, 1, 0, 0, 0), usize::MAX);
        assert_eq!(
            runs,
            vec![
                at(2026, 1, 1, 0, 0, 0),
                at(2027, 1, 1, 0, 0, 0),
                at(2028, 1, 1, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn end_of_calendar_stops_the_sweep() {
        let parsed = parse_expression("* * * * *").unwrap();
        assert!(next_runs(&parsed, NaiveDateTime::MAX, 5).is_empty());

        let parsed = parse_expression("* * * * * *").unwrap();
        assert!(next_runs(&parsed, NaiveDateTime::MAX, 5).is_empty());

        let near_end = truncate_to_minute(NaiveDateTime::MAX) - Duration::minutes(2);
        let parsed = parse_expression("* * * * *").unwrap();
        let runs = next_runs(&parsed, near_end, 5);
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|r| *r > near_end));
    }
}
