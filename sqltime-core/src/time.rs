//! Time of day as nanoseconds, and fractional-second scale conversion

use crate::digits;
use crate::error::{Result, TemporalError};

/// Nanoseconds since midnight, or a bare nanosecond quantity
pub type TimeNanos = i64;

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000;

/// Maximum supported fractional-second precision
pub const MAX_SCALE: u32 = 9;

/// `10^(9 - scale)`: nanoseconds per unit of the last kept digit
const SCALE_UNITS: [i64; 10] = [
    1_000_000_000,
    100_000_000,
    10_000_000,
    1_000_000,
    100_000,
    10_000,
    1_000,
    100,
    10,
    1,
];

// ============================================================================
// Parsing
// ============================================================================

/// Parse `HH:MM[:SS[.fraction]]`, or the DB2 form `HH.MM[.SS[.fraction]]`,
/// from `text[start..end]`.
///
/// The fraction is left-aligned: `"004"` is 4 ms. Digits past the ninth are
/// checked but do not contribute.
pub fn parse_time_nanos(text: &str, start: usize, end: usize) -> Result<TimeNanos> {
    let invalid = || TemporalError::invalid_time(text.get(start..end).unwrap_or(text));
    let (minute_sep, second_sep, fraction_sep) = match digits::find(text, b':', start, end) {
        Some(s1) => {
            let s2 = digits::find(text, b':', s1 + 1, end);
            let s3 = s2.and_then(|s2| digits::find(text, b'.', s2 + 1, end));
            (s1, s2, s3)
        }
        None => {
            let s1 = digits::find(text, b'.', start, end).ok_or_else(invalid)?;
            let s2 = digits::find(text, b'.', s1 + 1, end);
            let s3 = s2.and_then(|s2| digits::find(text, b'.', s2 + 1, end));
            (s1, s2, s3)
        }
    };

    let hour = digits::parse_u64(text, start, minute_sep).ok_or_else(invalid)?;
    let (minute, second, nanos) = match second_sep {
        None => (digits::parse_u64(text, minute_sep + 1, end).ok_or_else(invalid)?, 0, 0),
        Some(s2) => {
            let minute = digits::parse_u64(text, minute_sep + 1, s2).ok_or_else(invalid)?;
            match fraction_sep {
                None => (minute, digits::parse_u64(text, s2 + 1, end).ok_or_else(invalid)?, 0),
                Some(s3) => {
                    let second = digits::parse_u64(text, s2 + 1, s3).ok_or_else(invalid)?;
                    (minute, second, parse_nanos(text, s3 + 1, end)?)
                }
            }
        }
    };
    if hour >= 24 || minute >= 60 || second >= 60 {
        return Err(invalid());
    }
    Ok(((hour * 60 + minute) * 60 + second) as i64 * NANOS_PER_SECOND + nanos)
}

/// Parse fractional-second digits from `text[start..end]` into nanoseconds
pub fn parse_nanos(text: &str, start: usize, end: usize) -> Result<TimeNanos> {
    let invalid = || TemporalError::invalid_time(text.get(start..end).unwrap_or(text));
    let bytes = text.as_bytes().get(start..end).ok_or_else(invalid)?;
    if bytes.is_empty() {
        return Err(invalid());
    }
    let mut nanos = 0;
    let mut mul = 100_000_000;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return Err(invalid());
        }
        nanos += mul * i64::from(b - b'0');
        mul /= 10;
    }
    Ok(nanos)
}

/// Build a time of day from its fields
pub fn time_nanos(hour: u32, minute: u32, second: u32, nanos: u32) -> Result<TimeNanos> {
    if hour >= 24 || minute >= 60 || second >= 60 || i64::from(nanos) >= NANOS_PER_SECOND {
        return Err(TemporalError::invalid_time(format!(
            "{}:{}:{}.{}",
            hour, minute, second, nanos
        )));
    }
    Ok(i64::from(hour) * NANOS_PER_HOUR
        + i64::from(minute) * NANOS_PER_MINUTE
        + i64::from(second) * NANOS_PER_SECOND
        + i64::from(nanos))
}

// ============================================================================
// Scale Conversion
// ============================================================================

/// Round to `scale` fractional digits, half up, in 128-bit arithmetic.
/// `None` means no rounding is needed.
fn round_to_scale(nanos: i64, scale: u32) -> Option<(i128, i128)> {
    if scale >= MAX_SCALE {
        return None;
    }
    let unit = i128::from(SCALE_UNITS[scale as usize]);
    let value = i128::from(nanos);
    let rem = value % unit;
    let mut rounded = value - rem;
    if rem >= unit / 2 {
        rounded += unit;
    }
    Some((rounded, unit))
}

/// Round `nanos` to `scale` fractional-second digits, half up.
///
/// `scale >= 9` returns `nanos` unchanged. A result that would reach `max`
/// is clamped to the largest multiple of the rounding unit below `max`, so
/// `23:59:59.999999999` at scale 8 stays within the day. Pass `i64::MAX`
/// for quantities without an upper bound. `max` must be positive.
pub fn convert_scale(nanos: i64, scale: u32, max: i64) -> i64 {
    match round_to_scale(nanos, scale) {
        None => nanos,
        Some((rounded, unit)) => {
            let max = i128::from(max);
            if rounded >= max {
                ((max - 1).div_euclid(unit) * unit) as i64
            } else {
                rounded as i64
            }
        }
    }
}

/// Round like [`convert_scale`], but wrap past `max` instead of clamping.
///
/// Returns the rounded value and whether `max` was subtracted; the caller
/// carries that into the next coarser unit (a time of day rounding past
/// midnight moves the date forward).
pub fn convert_scale_with_carry(nanos: i64, scale: u32, max: i64) -> (i64, bool) {
    match round_to_scale(nanos, scale) {
        None => (nanos, false),
        Some((rounded, _)) => {
            let max = i128::from(max);
            if rounded >= max {
                ((rounded - max) as i64, true)
            } else {
                (rounded as i64, false)
            }
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Format a time of day as `HH:MM:SS[.fffffffff]`
pub fn format_time(nanos: TimeNanos) -> String {
    let mut buf = String::with_capacity(18);
    append_time(&mut buf, nanos);
    buf
}

pub fn append_time(buf: &mut String, nanos: TimeNanos) {
    let seconds = nanos / NANOS_PER_SECOND;
    buf.push_str(&format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    ));
    append_nanos(buf, nanos % NANOS_PER_SECOND);
}

/// Append `.fffffffff` with trailing zeros removed; nothing for zero
pub fn append_nanos(buf: &mut String, nanos: i64) {
    if nanos <= 0 {
        return;
    }
    let digits = format!("{:09}", nanos);
    buf.push('.');
    buf.push_str(digits.trim_end_matches('0'));
}

/// Format a UTC offset as `+HH:MM`, with `:SS` when seconds are present
pub fn format_offset(offset_seconds: i32) -> String {
    let mut buf = String::with_capacity(9);
    append_offset(&mut buf, offset_seconds);
    buf
}

pub fn append_offset(buf: &mut String, offset_seconds: i32) {
    buf.push(if offset_seconds < 0 { '-' } else { '+' });
    let total = offset_seconds.unsigned_abs();
    buf.push_str(&format!("{:02}:{:02}", total / 3600, total / 60 % 60));
    if total % 60 != 0 {
        buf.push_str(&format!(":{:02}", total % 60));
    }
}

// ============================================================================
// Tests
// ============================================================================
