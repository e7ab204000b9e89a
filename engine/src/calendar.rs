//! Calendar arithmetic shared by every planner component
//!
//! Interval stepping, week bucketing, and overlap math all route through
//! here so the scheduler and the harvest aggregator can never disagree on
//! what a week or an overlap means.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Add a signed number of days to a date
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Whole days from `start` to `end` (negative when `end` is earlier)
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// The most recent `week_start` day on or before `date`
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    date - Duration::days(offset as i64)
}

/// Inclusive day overlap between the intervals [a_start, a_end] and
/// [b_start, b_end]; 0 when they do not intersect
pub fn overlap_days(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> i64 {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    ((end - start).num_days() + 1).max(0)
}

/// Integer ceiling division
pub fn ceil_div(numerator: u32, denominator: u32) -> u32 {
    debug_assert!(denominator > 0);
    numerator.div_ceil(denominator)
}
