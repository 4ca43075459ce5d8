//! Date values
//!
//! A date value packs a proleptic Gregorian (year, month, day) into a single
//! `i64` whose integer order is the chronological order, so stored values
//! can be compared without decoding.
//!
//! Design principles:
//! - Gregorian proleptic calendar, astronomical year numbering (year 0 = 1 BCE)
//! - Absolute days (days since 1970-01-01) are the bridge for all arithmetic
//! - Decoding is O(1) bit extraction

use crate::digits;
use crate::error::{Result, TemporalError};

// ============================================================================
// Constants
// ============================================================================

/// Encoded date: `year << SHIFT_YEAR | month << SHIFT_MONTH | day`
pub type DateValue = i64;

pub const SHIFT_YEAR: u32 = 9;
pub const SHIFT_MONTH: u32 = 5;

/// Days in each month (non-leap year)
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

/// Days in a 400-year Gregorian cycle
const DAYS_PER_ERA: i64 = 146_097;

// ============================================================================
// Calendar Utilities
// ============================================================================

/// Check if year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Get days in a month, 0 for an invalid month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Check whether the fields form a valid calendar date
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    day >= 1 && day <= days_in_month(year, month)
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode fields without validation.
///
/// The caller guarantees `1 <= month <= 12` and `1 <= day <= 31`.
pub const fn encode_date_value(year: i32, month: u32, day: u32) -> DateValue {
    ((year as i64) << SHIFT_YEAR) | ((month as i64) << SHIFT_MONTH) | day as i64
}

/// Encode a valid calendar date
pub fn date_value(year: i32, month: u32, day: u32) -> Result<DateValue> {
    if !is_valid_date(year, month, day) {
        return Err(TemporalError::invalid_date(year.into(), month.into(), day.into()));
    }
    Ok(encode_date_value(year, month, day))
}

/// Encode a date whose month and day may be out of range.
///
/// Months outside `1..=12` carry into the year. The day is then clamped into
/// the resulting month: anything below 1 becomes the first day, anything past
/// the end of the month becomes the last day. Years that leave the `i32`
/// range saturate.
pub fn date_value_from_denormalized_date(year: i32, month: i64, day: i64) -> DateValue {
    let months = i128::from(month) - 1;
    let year = i128::from(year) + months.div_euclid(12);
    let year = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX });
    let month = months.rem_euclid(12) as u32 + 1;
    let day = if day < 1 {
        1
    } else {
        day.min(i64::from(days_in_month(year, month))) as u32
    };
    encode_date_value(year, month, day)
}

pub fn year_from_date_value(date_value: DateValue) -> i32 {
    (date_value >> SHIFT_YEAR) as i32
}

pub fn month_from_date_value(date_value: DateValue) -> u32 {
    ((date_value >> SHIFT_MONTH) & 15) as u32
}

pub fn day_from_date_value(date_value: DateValue) -> u32 {
    (date_value & 31) as u32
}

// ============================================================================
// Absolute Days
// ============================================================================

/// Days since 1970-01-01 for a date given by fields
pub fn absolute_day(year: i32, month: u32, day: u32) -> i64 {
    // Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
    let y = if month <= 2 { i64::from(year) - 1 } else { i64::from(year) };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAYS
}

/// Days since 1970-01-01
pub fn absolute_day_from_date_value(date_value: DateValue) -> i64 {
    absolute_day(
        year_from_date_value(date_value),
        month_from_date_value(date_value),
        day_from_date_value(date_value),
    )
}

/// Date value for a day count since 1970-01-01.
///
/// Exact inverse of [`absolute_day_from_date_value`] for every day whose year
/// fits into `i32`.
pub fn date_value_from_absolute_day(absolute_day: i64) -> DateValue {
    let z = absolute_day + UNIX_EPOCH_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    encode_date_value(year as i32, m as u32, d as u32)
}

// ============================================================================
// Navigation
// ============================================================================

/// The following day
pub fn increment_date_value(date_value: DateValue) -> DateValue {
    let day = day_from_date_value(date_value);
    if day < 28 {
        return date_value + 1;
    }
    let mut year = year_from_date_value(date_value);
    let mut month = month_from_date_value(date_value);
    if day < days_in_month(year, month) {
        return date_value + 1;
    }
    if month < 12 {
        month += 1;
    } else {
        month = 1;
        year += 1;
    }
    encode_date_value(year, month, 1)
}

/// The preceding day
pub fn decrement_date_value(date_value: DateValue) -> DateValue {
    if day_from_date_value(date_value) > 1 {
        return date_value - 1;
    }
    let mut year = year_from_date_value(date_value);
    let mut month = month_from_date_value(date_value);
    if month > 1 {
        month -= 1;
    } else {
        month = 12;
        year -= 1;
    }
    encode_date_value(year, month, days_in_month(year, month))
}

// ============================================================================
// Parsing and Formatting
// ============================================================================

/// Parse `[+|-]YYYY-MM-DD` from `text[start..end]`.
///
/// The year may have any number of digits.
pub fn parse_date_value(text: &str, start: usize, end: usize) -> Result<DateValue> {
    let malformed =
        || TemporalError::InvalidDateFormat(text.get(start..end).unwrap_or(text).to_string());
    let bytes = text.as_bytes();
    if start >= end || end > bytes.len() {
        return Err(malformed());
    }
    // Skip the first character so that a leading '-' is read as a sign
    let year_end = digits::find(text, b'-', start + 1, end).ok_or_else(malformed)?;
    let month_end = digits::find(text, b'-', year_end + 1, end).ok_or_else(malformed)?;
    let (year, negative) = digits::parse_signed(text, start, year_end).ok_or_else(malformed)?;
    let year = i64::try_from(year).ok().map(|y| if negative { -y } else { y });
    let year = year.and_then(|y| i32::try_from(y).ok()).ok_or_else(malformed)?;
    let month = digits::parse_u32(text, year_end + 1, month_end).ok_or_else(malformed)?;
    let day = digits::parse_u32(text, month_end + 1, end).ok_or_else(malformed)?;
    date_value(year, month, day)
}

/// Format as `YYYY-MM-DD`; years between -999 and 999 are zero-padded to 4 digits
pub fn format_date(date_value: DateValue) -> String {
    let mut buf = String::with_capacity(10);
    append_date(&mut buf, date_value);
    buf
}

pub fn append_date(buf: &mut String, date_value: DateValue) {
    let year = year_from_date_value(date_value);
    if year > -1_000 && year < 1_000 {
        if year < 0 {
            buf.push('-');
        }
        buf.push_str(&format!("{:04}", year.abs()));
    } else {
        buf.push_str(&year.to_string());
    }
    buf.push_str(&format!(
        "-{:02}-{:02}",
        month_from_date_value(date_value),
        day_from_date_value(date_value)
    ));
}

// ============================================================================
// Tests
// ============================================================================
