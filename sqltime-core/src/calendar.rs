//! Calendar fields derived from date values
//!
//! Day of week, day of year, and week numbering under the classic
//! calendar-week convention: a week starts on `first_day_of_week`
//! (0 = Sunday ... 6 = Saturday), and week 1 of a year is the first week
//! with at least `minimal_days_in_first_week` days inside that year. Days
//! before week 1 belong to the last week of the previous week-year; late
//! December days on or after the next week-year's start are in its week 1.

use crate::date::{
    absolute_day, absolute_day_from_date_value, day_from_date_value, is_leap_year,
    month_from_date_value, year_from_date_value, DateValue,
};

/// First day of week for the ISO 8601 convention (Monday)
pub const ISO_FIRST_DAY_OF_WEEK: u32 = 1;

/// Minimal days in the first week for the ISO 8601 convention
pub const ISO_MINIMAL_DAYS_IN_FIRST_WEEK: u32 = 4;

// ============================================================================
// Day of Week
// ============================================================================

/// Day of week in `1..=7` for an absolute day, where 1 is `first_day_of_week`
pub fn day_of_week_from_absolute(absolute_day: i64, first_day_of_week: u32) -> u32 {
    // 1970-01-01 was a Thursday (4 days after Sunday)
    (absolute_day - i64::from(first_day_of_week) + 4).rem_euclid(7) as u32 + 1
}

/// Day of week in `1..=7`, where 1 is `first_day_of_week` (0 = Sunday)
pub fn day_of_week(date_value: DateValue, first_day_of_week: u32) -> u32 {
    day_of_week_from_absolute(absolute_day_from_date_value(date_value), first_day_of_week)
}

/// Day of week, 1 = Sunday ... 7 = Saturday
pub fn sunday_day_of_week(date_value: DateValue) -> u32 {
    day_of_week(date_value, 0)
}

/// Day of week, 1 = Monday ... 7 = Sunday (ISO 8601)
pub fn iso_day_of_week(date_value: DateValue) -> u32 {
    day_of_week(date_value, ISO_FIRST_DAY_OF_WEEK)
}

// ============================================================================
// Day of Year
// ============================================================================

/// Ordinal day within the year (1-366)
pub fn day_of_year(date_value: DateValue) -> u32 {
    let month = month_from_date_value(date_value);
    // Cumulative days before `month` assuming 30.58-day months, then
    // corrected for February
    let mut doy = (367 * month - 362) / 12 + day_from_date_value(date_value);
    if month > 2 {
        doy -= 1;
        if !is_leap_year(year_from_date_value(date_value)) {
            doy -= 1;
        }
    }
    doy
}

// ============================================================================
// Week Numbering
// ============================================================================

/// Absolute day on which week 1 of `week_year` starts
pub fn week_year_absolute_start(
    week_year: i32,
    first_day_of_week: u32,
    minimal_days_in_first_week: u32,
) -> i64 {
    let first = absolute_day(week_year, 1, 1);
    let days_in_first_week = 8 - day_of_week_from_absolute(first, first_day_of_week);
    let start = first + i64::from(days_in_first_week);
    if days_in_first_week >= minimal_days_in_first_week {
        start - 7
    } else {
        start
    }
}

/// Where a date falls relative to its calendar year's week numbering
enum WeekPosition {
    PreviousYear(i64),
    CurrentYear(i64),
    NextYear,
}

fn week_position(
    date_value: DateValue,
    first_day_of_week: u32,
    minimal_days_in_first_week: u32,
) -> WeekPosition {
    let abs = absolute_day_from_date_value(date_value);
    let year = year_from_date_value(date_value);
    let start = week_year_absolute_start(year, first_day_of_week, minimal_days_in_first_week);
    if abs < start {
        let previous =
            week_year_absolute_start(year - 1, first_day_of_week, minimal_days_in_first_week);
        return WeekPosition::PreviousYear(abs - previous);
    }
    // Only the last days of December can belong to the next week-year
    if month_from_date_value(date_value) == 12
        && 24 + minimal_days_in_first_week < day_from_date_value(date_value)
        && abs >= week_year_absolute_start(year + 1, first_day_of_week, minimal_days_in_first_week)
    {
        return WeekPosition::NextYear;
    }
    WeekPosition::CurrentYear(abs - start)
}

/// Week of the week-year
///
/// `first_day_of_week` is 0 (Sunday) to 6 (Saturday),
/// `minimal_days_in_first_week` is 1 to 7.
pub fn week_of_year(
    date_value: DateValue,
    first_day_of_week: u32,
    minimal_days_in_first_week: u32,
) -> u32 {
    match week_position(date_value, first_day_of_week, minimal_days_in_first_week) {
        WeekPosition::PreviousYear(days) | WeekPosition::CurrentYear(days) => (days / 7) as u32 + 1,
        WeekPosition::NextYear => 1,
    }
}

/// Year the week of [`week_of_year`] belongs to
pub fn week_year(
    date_value: DateValue,
    first_day_of_week: u32,
    minimal_days_in_first_week: u32,
) -> i32 {
    let year = year_from_date_value(date_value);
    match week_position(date_value, first_day_of_week, minimal_days_in_first_week) {
        WeekPosition::PreviousYear(_) => year - 1,
        WeekPosition::CurrentYear(_) => year,
        WeekPosition::NextYear => year + 1,
    }
}

/// ISO 8601 week number (1-53)
pub fn iso_week_of_year(date_value: DateValue) -> u32 {
    week_of_year(date_value, ISO_FIRST_DAY_OF_WEEK, ISO_MINIMAL_DAYS_IN_FIRST_WEEK)
}

/// ISO 8601 week-based year
pub fn iso_week_year(date_value: DateValue) -> i32 {
    week_year(date_value, ISO_FIRST_DAY_OF_WEEK, ISO_MINIMAL_DAYS_IN_FIRST_WEEK)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{date_value, date_value_from_absolute_day};
    use chrono::{Datelike, Days, NaiveDate};

    const CE_EPOCH: i32 = 719_163;

    fn dv(year: i32, month: u32, day: u32) -> DateValue {
        date_value(year, month, day).unwrap()
    }

    fn reference_date(absolute_day: i64) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(CE_EPOCH + absolute_day as i32).unwrap()
    }

    /// Week 1 start computed directly from the definition
    fn reference_week_start(year: i32, first_day_of_week: u32, minimal_days: u32) -> NaiveDate {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let into_week = (jan1.weekday().num_days_from_sunday() + 7 - first_day_of_week) % 7;
        let week_start = jan1 - Days::new(u64::from(into_week));
        if 7 - into_week >= minimal_days {
            week_start
        } else {
            week_start + Days::new(7)
        }
    }

    fn reference_week(date: NaiveDate, first_day_of_week: u32, minimal_days: u32) -> (u32, i32) {
        let mut year = date.year();
        if date >= reference_week_start(year + 1, first_day_of_week, minimal_days) {
            year += 1;
        } else if date < reference_week_start(year, first_day_of_week, minimal_days) {
            year -= 1;
        }
        let start = reference_week_start(year, first_day_of_week, minimal_days);
        let week = (date - start).num_days() / 7 + 1;
        (week as u32, year)
    }

    #[test]
    fn test_day_of_week_known_dates() {
        // 1970-01-01 was Thursday
        assert_eq!(sunday_day_of_week(dv(1970, 1, 1)), 5);
        assert_eq!(iso_day_of_week(dv(1970, 1, 1)), 4);
        // 2025-06-15 is Sunday
        assert_eq!(sunday_day_of_week(dv(2025, 6, 15)), 1);
        assert_eq!(iso_day_of_week(dv(2025, 6, 15)), 7);
    }

    #[test]
    fn test_day_of_week_against_reference() {
        let mut previous = sunday_day_of_week(date_value_from_absolute_day(-1_000_001));
        for i in -1_000_000i64..=1_000_000 {
            let value = date_value_from_absolute_day(i);
            let reference = reference_date(i);
            let sunday = sunday_day_of_week(value);
            assert_eq!(sunday, reference.weekday().num_days_from_sunday() + 1, "day {}", i);
            assert_eq!(iso_day_of_week(value), reference.weekday().number_from_monday(), "day {}", i);
            assert_eq!(sunday, previous % 7 + 1);
            previous = sunday;
        }
    }

    #[test]
    fn test_iso_week_against_reference() {
        for i in -1_000_000i64..=1_000_000 {
            let value = date_value_from_absolute_day(i);
            let reference = reference_date(i).iso_week();
            assert_eq!(iso_week_of_year(value), reference.week(), "day {}", i);
            assert_eq!(iso_week_year(value), reference.year(), "day {}", i);
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(dv(2025, 1, 1)), 1);
        assert_eq!(day_of_year(dv(2025, 3, 1)), 60);
        assert_eq!(day_of_year(dv(2024, 3, 1)), 61);
        assert_eq!(day_of_year(dv(2025, 12, 31)), 365);
        assert_eq!(day_of_year(dv(2024, 12, 31)), 366);
        for i in 0i64..150_000 {
            assert_eq!(day_of_year(date_value_from_absolute_day(i)), reference_date(i).ordinal());
        }
    }

    #[test]
    fn test_week_of_year_all_conventions() {
        for first_day in 0..7u32 {
            for minimal_days in 1..=7u32 {
                for i in 0i64..150_000 {
                    let value = date_value_from_absolute_day(i);
                    let (week, year) = reference_week(reference_date(i), first_day, minimal_days);
                    assert_eq!(
                        week_of_year(value, first_day, minimal_days),
                        week,
                        "day {} first {} minimal {}",
                        i,
                        first_day,
                        minimal_days
                    );
                    assert_eq!(week_year(value, first_day, minimal_days), year);
                }
            }
        }
    }

    #[test]
    fn test_week_of_year_known_dates() {
        // US convention: Sunday start, any day of the year counts
        assert_eq!(week_of_year(dv(2024, 12, 29), 0, 1), 1);
        assert_eq!(week_year(dv(2024, 12, 29), 0, 1), 2025);
        assert_eq!(week_of_year(dv(2024, 12, 28), 0, 1), 52);
        // ISO: 2021-01-01 is in week 53 of 2020
        assert_eq!(iso_week_of_year(dv(2021, 1, 1)), 53);
        assert_eq!(iso_week_year(dv(2021, 1, 1)), 2020);
        assert_eq!(iso_week_of_year(dv(2025, 12, 29)), 1);
        assert_eq!(iso_week_year(dv(2025, 12, 29)), 2026);
    }

    #[test]
    fn test_week_of_year_at_year_boundaries() {
        // (year, month, day, first day of week, minimal days, week, week year)
        let cases = [
            (2021, 12, 25, 0, 1, 52, 2021),
            (2021, 12, 26, 0, 1, 1, 2022),
            (2022, 1, 1, 0, 1, 1, 2022),
            (2022, 12, 31, 0, 1, 53, 2022),
            (2024, 12, 31, 0, 1, 1, 2025),
            (2022, 1, 1, 0, 7, 52, 2021),
            (2022, 12, 31, 0, 7, 52, 2022),
            (2023, 1, 1, 0, 7, 1, 2023),
            (2022, 12, 25, 1, 1, 52, 2022),
            (2022, 12, 26, 1, 1, 1, 2023),
            (2021, 1, 1, 6, 7, 52, 2020),
            (2021, 1, 2, 6, 7, 1, 2021),
            (2021, 12, 31, 6, 7, 52, 2021),
            (2022, 1, 1, 6, 7, 1, 2022),
            (2023, 1, 1, 6, 7, 53, 2022),
        ];
        for (y, m, d, first_day, minimal_days, week, year) in cases {
            let value = dv(y, m, d);
            assert_eq!(week_of_year(value, first_day, minimal_days), week, "{}-{}-{}", y, m, d);
            assert_eq!(week_year(value, first_day, minimal_days), year, "{}-{}-{}", y, m, d);
        }
    }
}
