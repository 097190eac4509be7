//! Calendar helpers for schedules and targets.
//!
//! Everything here works on naive calendar dates; callers pass "today" in
//! explicitly so results stay reproducible.

use chrono::{Datelike, Months, NaiveDate};

/// First day of `date`'s month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Step a date forward by whole months, clamping the day when the target
/// month is shorter (Jan 31 + 1 month = Feb 28).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Calendar date for a 1-based schedule period: the first of the month
/// `months` months after `start`'s month.
pub fn month_date(start: NaiveDate, months: u32) -> NaiveDate {
    add_months(first_of_month(start), months)
}

/// Whole months from `from` until `to`, partial months rounding up.
/// Returns 0 when `to` is not after `from`.
pub fn months_until(from: NaiveDate, to: NaiveDate) -> i64 {
    if to <= from {
        return 0;
    }
    let mut months =
        i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month());
    if to.day() > from.day() {
        months += 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(first_of_month(d(2026, 8, 24)), d(2026, 8, 1));
        assert_eq!(first_of_month(d(2026, 8, 1)), d(2026, 8, 1));
    }

    #[test]
    fn test_add_months_clamps_short_months() {
        assert_eq!(add_months(d(2026, 1, 31), 1), d(2026, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29)); // leap year
        assert_eq!(add_months(d(2026, 11, 30), 3), d(2027, 2, 28));
    }

    #[test]
    fn test_month_date_rolls_year() {
        assert_eq!(month_date(d(2026, 8, 24), 0), d(2026, 8, 1));
        assert_eq!(month_date(d(2026, 8, 24), 5), d(2027, 1, 1));
    }

    #[test]
    fn test_months_until_rounds_partial_up() {
        assert_eq!(months_until(d(2026, 1, 15), d(2026, 3, 15)), 2);
        assert_eq!(months_until(d(2026, 1, 15), d(2026, 3, 20)), 3);
        assert_eq!(months_until(d(2026, 1, 15), d(2026, 3, 10)), 2);
        assert_eq!(months_until(d(2026, 3, 20), d(2026, 3, 25)), 1);
    }

    #[test]
    fn test_months_until_past_is_zero() {
        assert_eq!(months_until(d(2026, 5, 1), d(2026, 5, 1)), 0);
        assert_eq!(months_until(d(2026, 5, 1), d(2026, 4, 30)), 0);
    }
}
