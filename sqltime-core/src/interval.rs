//! SQL INTERVAL values
//!
//! An interval is stored as a sign, the magnitude of its coarsest field
//! (`leading`) and every finer field collapsed into one count (`remaining`).
//! The unit of `remaining` is the finest field of the qualifier: months for
//! YEAR TO MONTH, hours for DAY TO HOUR, minutes for DAY TO MINUTE and
//! HOUR TO MINUTE, nanoseconds when seconds are present.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::digits;
use crate::error::{Result, TemporalError};
use crate::time::{
    append_nanos, parse_nanos, MAX_SCALE, NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE,
    NANOS_PER_SECOND,
};

/// Exclusive upper bound of the leading field
pub const MAX_LEADING: i64 = 1_000_000_000_000_000_000;

/// Datetime field an interval qualifier starts or ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl IntervalUnit {
    /// Size in the qualifier's absolute unit (months or nanoseconds)
    fn size(self) -> i64 {
        match self {
            Self::Year => 12,
            Self::Month => 1,
            Self::Day => NANOS_PER_DAY,
            Self::Hour => NANOS_PER_HOUR,
            Self::Minute => NANOS_PER_MINUTE,
            Self::Second => NANOS_PER_SECOND,
        }
    }

    /// Range of the field when a coarser field precedes it
    fn modulus(self) -> Option<i64> {
        match self {
            Self::Year | Self::Day => None,
            Self::Month => Some(12),
            Self::Hour => Some(24),
            Self::Minute | Self::Second => Some(60),
        }
    }
}

/// A trailing field of a range qualifier
#[derive(Debug, Clone, Copy)]
struct Subfield {
    separator: u8,
    max: u64,
    /// Value of one step of this field in units of `remaining`
    unit: i64,
    width: usize,
}

const fn subfield(separator: u8, max: u64, unit: i64) -> Subfield {
    Subfield {
        separator,
        max,
        unit,
        width: 2,
    }
}

static MONTHS: [Subfield; 1] = [Subfield {
    separator: b'-',
    max: 11,
    unit: 1,
    width: 1,
}];
static DAY_TO_HOUR: [Subfield; 1] = [subfield(b' ', 23, 1)];
static DAY_TO_MINUTE: [Subfield; 2] = [subfield(b' ', 23, 60), subfield(b':', 59, 1)];
static DAY_TO_SECOND: [Subfield; 3] = [
    subfield(b' ', 23, NANOS_PER_HOUR),
    subfield(b':', 59, NANOS_PER_MINUTE),
    subfield(b':', 59, NANOS_PER_SECOND),
];
static HOUR_TO_MINUTE: [Subfield; 1] = [subfield(b':', 59, 1)];
static HOUR_TO_SECOND: [Subfield; 2] = [
    subfield(b':', 59, NANOS_PER_MINUTE),
    subfield(b':', 59, NANOS_PER_SECOND),
];
static MINUTE_TO_SECOND: [Subfield; 1] = [subfield(b':', 59, NANOS_PER_SECOND)];

// ============================================================================
// Qualifier
// ============================================================================

/// The 13 SQL interval qualifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalQualifier {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    YearToMonth,
    DayToHour,
    DayToMinute,
    DayToSecond,
    HourToMinute,
    HourToSecond,
    MinuteToSecond,
}

impl IntervalQualifier {
    pub const ALL: [IntervalQualifier; 13] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::YearToMonth,
        Self::DayToHour,
        Self::DayToMinute,
        Self::DayToSecond,
        Self::HourToMinute,
        Self::HourToSecond,
        Self::MinuteToSecond,
    ];

    /// SQL name, e.g. `DAY TO SECOND`
    pub fn name(self) -> &'static str {
        match self {
            Self::Year => "YEAR",
            Self::Month => "MONTH",
            Self::Day => "DAY",
            Self::Hour => "HOUR",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
            Self::YearToMonth => "YEAR TO MONTH",
            Self::DayToHour => "DAY TO HOUR",
            Self::DayToMinute => "DAY TO MINUTE",
            Self::DayToSecond => "DAY TO SECOND",
            Self::HourToMinute => "HOUR TO MINUTE",
            Self::HourToSecond => "HOUR TO SECOND",
            Self::MinuteToSecond => "MINUTE TO SECOND",
        }
    }

    pub fn start_unit(self) -> IntervalUnit {
        match self {
            Self::Year | Self::YearToMonth => IntervalUnit::Year,
            Self::Month => IntervalUnit::Month,
            Self::Day | Self::DayToHour | Self::DayToMinute | Self::DayToSecond => {
                IntervalUnit::Day
            }
            Self::Hour | Self::HourToMinute | Self::HourToSecond => IntervalUnit::Hour,
            Self::Minute | Self::MinuteToSecond => IntervalUnit::Minute,
            Self::Second => IntervalUnit::Second,
        }
    }

    pub fn end_unit(self) -> IntervalUnit {
        match self {
            Self::Year => IntervalUnit::Year,
            Self::Month | Self::YearToMonth => IntervalUnit::Month,
            Self::Day => IntervalUnit::Day,
            Self::Hour | Self::DayToHour => IntervalUnit::Hour,
            Self::Minute | Self::DayToMinute | Self::HourToMinute => IntervalUnit::Minute,
            Self::Second | Self::DayToSecond | Self::HourToSecond | Self::MinuteToSecond => {
                IntervalUnit::Second
            }
        }
    }

    /// 1 for single-field qualifiers, 2 for `X TO Y`
    pub fn field_count(self) -> usize {
        if self.start_unit() == self.end_unit() {
            1
        } else {
            2
        }
    }

    pub fn has_seconds(self) -> bool {
        self.end_unit() == IntervalUnit::Second
    }

    /// True for YEAR, MONTH and YEAR TO MONTH
    pub fn is_year_month(self) -> bool {
        self.end_unit() <= IntervalUnit::Month
    }

    /// Exclusive upper bound of `remaining`
    pub fn remaining_bound(self) -> i64 {
        match self {
            Self::Year | Self::Month | Self::Day | Self::Hour | Self::Minute => 1,
            Self::Second => NANOS_PER_SECOND,
            Self::YearToMonth => 12,
            Self::DayToHour => 24,
            Self::DayToMinute => 24 * 60,
            Self::DayToSecond => NANOS_PER_DAY,
            Self::HourToMinute => 60,
            Self::HourToSecond => NANOS_PER_HOUR,
            Self::MinuteToSecond => NANOS_PER_MINUTE,
        }
    }

    fn subfields(self) -> &'static [Subfield] {
        match self {
            Self::YearToMonth => &MONTHS,
            Self::DayToHour => &DAY_TO_HOUR,
            Self::DayToMinute => &DAY_TO_MINUTE,
            Self::DayToSecond => &DAY_TO_SECOND,
            Self::HourToMinute => &HOUR_TO_MINUTE,
            Self::HourToSecond => &HOUR_TO_SECOND,
            Self::MinuteToSecond => &MINUTE_TO_SECOND,
            _ => &[],
        }
    }

    /// Size of one `remaining` step in absolute units, `None` when unused
    fn remaining_unit(self) -> Option<i64> {
        match self {
            Self::YearToMonth => Some(1),
            Self::DayToHour => Some(NANOS_PER_HOUR),
            Self::DayToMinute | Self::HourToMinute => Some(NANOS_PER_MINUTE),
            Self::Second | Self::DayToSecond | Self::HourToSecond | Self::MinuteToSecond => Some(1),
            Self::Year | Self::Month | Self::Day | Self::Hour | Self::Minute => None,
        }
    }
}

impl fmt::Display for IntervalQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Value
// ============================================================================

/// An SQL interval value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalFields")]
pub struct IntervalValue {
    qualifier: IntervalQualifier,
    negative: bool,
    leading: i64,
    remaining: i64,
}

#[derive(Deserialize)]
struct IntervalFields {
    qualifier: IntervalQualifier,
    negative: bool,
    leading: i64,
    remaining: i64,
}

impl TryFrom<IntervalFields> for IntervalValue {
    type Error = TemporalError;

    fn try_from(f: IntervalFields) -> Result<Self> {
        Self::new(f.qualifier, f.negative, f.leading, f.remaining)
    }
}

impl IntervalValue {
    /// Validate and build an interval; a zero interval is never negative
    pub fn new(
        qualifier: IntervalQualifier,
        negative: bool,
        leading: i64,
        remaining: i64,
    ) -> Result<Self> {
        if !(0..MAX_LEADING).contains(&leading) {
            return Err(TemporalError::interval_format(format!(
                "leading field {} out of range for INTERVAL {}",
                leading, qualifier
            )));
        }
        if !(0..qualifier.remaining_bound()).contains(&remaining) {
            return Err(TemporalError::interval_format(format!(
                "remaining field {} out of range for INTERVAL {}",
                remaining, qualifier
            )));
        }
        Ok(Self {
            qualifier,
            negative: negative && (leading != 0 || remaining != 0),
            leading,
            remaining,
        })
    }

    pub fn qualifier(&self) -> IntervalQualifier {
        self.qualifier
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn leading(&self) -> i64 {
        self.leading
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Unsigned size in months (year-month) or nanoseconds (day-time)
    fn magnitude(&self) -> i128 {
        let leading = i128::from(self.leading) * i128::from(self.qualifier.start_unit().size());
        match self.qualifier.remaining_unit() {
            Some(unit) => leading + i128::from(self.remaining) * i128::from(unit),
            None => leading,
        }
    }

    fn field(&self, unit: IntervalUnit) -> i64 {
        let q = self.qualifier;
        if unit < q.start_unit() || unit > q.end_unit() {
            return 0;
        }
        let mut value = self.magnitude() / i128::from(unit.size());
        if unit != q.start_unit() {
            if let Some(modulus) = unit.modulus() {
                value %= i128::from(modulus);
            }
        }
        // Bounded by the leading field range
        let value = value as i64;
        if self.negative {
            -value
        } else {
            value
        }
    }

    pub fn years(&self) -> i64 {
        self.field(IntervalUnit::Year)
    }

    pub fn months(&self) -> i64 {
        self.field(IntervalUnit::Month)
    }

    pub fn days(&self) -> i64 {
        self.field(IntervalUnit::Day)
    }

    pub fn hours(&self) -> i64 {
        self.field(IntervalUnit::Hour)
    }

    pub fn minutes(&self) -> i64 {
        self.field(IntervalUnit::Minute)
    }

    /// Whole seconds
    pub fn seconds(&self) -> i64 {
        self.field(IntervalUnit::Second)
    }

    /// Fraction of the seconds field in nanoseconds
    pub fn nanos(&self) -> i64 {
        if !self.qualifier.has_seconds() {
            return 0;
        }
        let nanos = (self.magnitude() % i128::from(NANOS_PER_SECOND)) as i64;
        if self.negative {
            -nanos
        } else {
            nanos
        }
    }
}

/// Intervals compare only within the same year-month or day-time family
impl PartialOrd for IntervalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.qualifier.is_year_month() != other.qualifier.is_year_month() {
            return None;
        }
        Some(
            interval_to_absolute(self)
                .cmp(&interval_to_absolute(other))
                .then(self.qualifier.cmp(&other.qualifier)),
        )
    }
}

impl fmt::Display for IntervalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_interval(self))
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse an integer field, with a `.fraction` of at most nine digits when
/// `fraction` is set
fn parse_field(text: &str, start: usize, end: usize, fraction: bool) -> Option<(u64, i64)> {
    if fraction {
        if let Some(dot) = digits::find(text, b'.', start, end) {
            if end - dot - 1 > MAX_SCALE as usize {
                return None;
            }
            let value = digits::parse_u64(text, start, dot)?;
            let nanos = parse_nanos(text, dot + 1, end).ok()?;
            return Some((value, nanos));
        }
    }
    digits::parse_u64(text, start, end).map(|v| (v, 0))
}

/// Parse the quoted part of an interval literal.
///
/// Trailing fields of a range qualifier are optional and default to zero.
/// The leading field may carry a sign of its own, which combines with
/// `negative` by exclusive or.
pub fn parse_interval(
    qualifier: IntervalQualifier,
    negative: bool,
    text: &str,
) -> Result<IntervalValue> {
    let text = text.trim();
    let invalid = || {
        TemporalError::interval_format(format!("'{}' is not a valid INTERVAL {}", text, qualifier))
    };
    let end = text.len();
    let (body, signed) = match text.as_bytes().first() {
        Some(b'-') => (1, true),
        Some(b'+') => (1, false),
        _ => (0, false),
    };

    let subfields = qualifier.subfields();
    let seconds_in_leading = subfields.is_empty() && qualifier.has_seconds();
    let leading_end = subfields
        .first()
        .and_then(|f| digits::find(text, f.separator, body, end))
        .unwrap_or(end);
    let (leading, mut nanos) =
        parse_field(text, body, leading_end, seconds_in_leading).ok_or_else(invalid)?;
    let leading = i64::try_from(leading).map_err(|_| invalid())?;

    let mut remaining: i64 = 0;
    let mut pos = leading_end;
    for (i, field) in subfields.iter().enumerate() {
        if pos >= end {
            break;
        }
        let start = pos + 1;
        let field_end = subfields
            .get(i + 1)
            .and_then(|next| digits::find(text, next.separator, start, end))
            .unwrap_or(end);
        let last = i + 1 == subfields.len();
        let (value, fraction) = parse_field(text, start, field_end, last && qualifier.has_seconds())
            .ok_or_else(invalid)?;
        if value > field.max {
            return Err(invalid());
        }
        remaining += value as i64 * field.unit;
        nanos = fraction;
        pos = field_end;
    }
    remaining += nanos;

    IntervalValue::new(qualifier, negative != signed, leading, remaining)
}

// ============================================================================
// Formatting
// ============================================================================

/// Format an interval as `INTERVAL '<fields>' <QUALIFIER>`
pub fn format_interval(value: &IntervalValue) -> String {
    format!("INTERVAL '{}' {}", format_interval_fields(value), value.qualifier)
}

/// The quoted part of [`format_interval`], every field of the range present
pub fn format_interval_fields(value: &IntervalValue) -> String {
    let mut buf = String::with_capacity(24);
    if value.negative {
        buf.push('-');
    }
    buf.push_str(&value.leading.to_string());
    let mut rest = value.remaining;
    for field in value.qualifier.subfields() {
        buf.push(char::from(field.separator));
        buf.push_str(&format!("{:0width$}", rest / field.unit, width = field.width));
        rest %= field.unit;
    }
    if value.qualifier.has_seconds() {
        append_nanos(&mut buf, rest);
    }
    buf
}

// ============================================================================
// Absolute Values
// ============================================================================

/// Signed size of an interval in months (year-month qualifiers) or
/// nanoseconds (day-time qualifiers)
pub fn interval_to_absolute(value: &IntervalValue) -> i128 {
    let magnitude = value.magnitude();
    if value.negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Build an interval from a signed absolute size, truncating units finer
/// than the qualifier's last field
pub fn interval_from_absolute(
    qualifier: IntervalQualifier,
    absolute: i128,
) -> Result<IntervalValue> {
    let negative = absolute < 0;
    let magnitude = absolute.unsigned_abs();
    let leading_size = qualifier.start_unit().size() as u128;
    let leading = magnitude / leading_size;
    if leading >= MAX_LEADING as u128 {
        return Err(TemporalError::Overflow("interval leading field"));
    }
    let remaining = match qualifier.remaining_unit() {
        Some(unit) => (magnitude % leading_size) / unit as u128,
        None => 0,
    };
    IntervalValue::new(qualifier, negative, leading as i64, remaining as i64)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use IntervalQualifier::*;

    const H: i64 = NANOS_PER_HOUR;
    const M: i64 = NANOS_PER_MINUTE;

    fn check(qualifier: IntervalQualifier, leading: i64, remaining: i64, short: &str, full: &str) {
        for negative in [false, true] {
            let expected = IntervalValue::new(qualifier, negative, leading, remaining).unwrap();
            assert_eq!(parse_interval(qualifier, negative, short).unwrap(), expected, "{} {}", qualifier, short);
            assert_eq!(parse_interval(qualifier, negative, full).unwrap(), expected, "{} {}", qualifier, full);
            let sign = if negative { "-" } else { "" };
            assert_eq!(
                format_interval(&expected),
                format!("INTERVAL '{}{}' {}", sign, full, qualifier.name())
            );
        }
    }

    #[test]
    fn test_single_field_qualifiers() {
        for q in [Year, Month, Day, Hour, Minute, Second] {
            check(q, 10, 0, "10", "10");
        }
        check(Second, 10, 500_000_000, "10.5", "10.5");
        check(Second, 0, 123_456_789, "0.123456789", "0.123456789");
    }

    #[test]
    fn test_year_to_month() {
        check(YearToMonth, 10, 0, "10", "10-0");
        check(YearToMonth, 10, 11, "10-11", "10-11");
    }

    #[test]
    fn test_day_to_fields() {
        check(DayToHour, 10, 0, "10", "10 00");
        check(DayToHour, 10, 11, "10 11", "10 11");
        check(DayToMinute, 10, 0, "10", "10 00:00");
        check(DayToMinute, 10, 11 * 60, "10 11", "10 11:00");
        check(DayToMinute, 10, 11 * 60 + 12, "10 11:12", "10 11:12");
        check(DayToSecond, 10, 0, "10 00:00:00", "10 00:00:00");
        check(DayToSecond, 10, 11 * H, "10 11", "10 11:00:00");
        check(DayToSecond, 10, 11 * H + 12 * M, "10 11:12", "10 11:12:00");
        check(DayToSecond, 10, 11 * H + 12 * M + 13_000_000_000, "10 11:12:13", "10 11:12:13");
        check(
            DayToSecond,
            10,
            11 * H + 12 * M + 13_123_456_789,
            "10 11:12:13.123456789",
            "10 11:12:13.123456789",
        );
    }

    #[test]
    fn test_hour_and_minute_to_fields() {
        check(HourToMinute, 10, 0, "10", "10:00");
        check(HourToMinute, 10, 11, "10:11", "10:11");
        check(HourToSecond, 10, 0, "10", "10:00:00");
        check(HourToSecond, 10, 11 * M, "10:11", "10:11:00");
        check(HourToSecond, 10, 11 * M + 12_000_000_000, "10:11:12", "10:11:12");
        check(HourToSecond, 10, 11 * M + 12_123_456_789, "10:11:12.123456789", "10:11:12.123456789");
        check(MinuteToSecond, 10, 0, "10", "10:00");
        check(MinuteToSecond, 10, 11_000_000_000, "10:11", "10:11");
        check(MinuteToSecond, 10, 11_123_456_789, "10:11.123456789", "10:11.123456789");
    }

    #[test]
    fn test_leading_sign() {
        let v = parse_interval(DayToHour, false, "-10 11").unwrap();
        assert!(v.is_negative());
        assert_eq!((v.leading(), v.remaining()), (10, 11));
        let v = parse_interval(DayToHour, true, "-10 11").unwrap();
        assert!(!v.is_negative());
        let v = parse_interval(YearToMonth, false, "-1-6").unwrap();
        assert!(v.is_negative());
        assert_eq!(v.remaining(), 6);
        let v = parse_interval(Second, false, "+3.25").unwrap();
        assert_eq!(format_interval(&v), "INTERVAL '3.25' SECOND");
    }

    #[test]
    fn test_zero_is_not_negative() {
        let v = parse_interval(Day, true, "0").unwrap();
        assert!(!v.is_negative());
        assert_eq!(format_interval(&v), "INTERVAL '0' DAY");
        let v = parse_interval(DayToSecond, false, "-0 00:00:00").unwrap();
        assert!(!v.is_negative());
    }

    #[test]
    fn test_parse_errors() {
        let bad = [
            (YearToMonth, "10-12"),
            (DayToHour, "10 24"),
            (DayToMinute, "10 11:60"),
            (HourToSecond, "10:11:60"),
            (DayToHour, "10:11"),
            (DayToMinute, "10 11 12"),
            (DayToSecond, "10 11:"),
            (Day, "1.5"),
            (MinuteToSecond, "10.5"),
            (Second, "10."),
            (Second, "10.1234567891"),
            (DayToSecond, "1 02:03:04.0000000001"),
            (MinuteToSecond, "10:11.1234567890"),
            (Hour, ""),
            (Hour, "-"),
            (Year, "abc"),
            (Day, "1000000000000000000"),
            (Day, "99999999999999999999"),
        ];
        for (q, text) in bad {
            let err = parse_interval(q, false, text).unwrap_err();
            assert_eq!(err.code(), crate::error::codes::INTERVAL_FORMAT, "{} '{}'", q, text);
        }
        assert!(parse_interval(Day, false, "999999999999999999").is_ok());
        let v = parse_interval(Second, false, "10.123456789").unwrap();
        assert_eq!(v.remaining(), 123_456_789);
    }

    #[test]
    fn test_new_validates() {
        assert!(IntervalValue::new(Day, false, -1, 0).is_err());
        assert!(IntervalValue::new(Day, false, 1, 1).is_err());
        assert!(IntervalValue::new(YearToMonth, false, 1, 12).is_err());
        assert!(IntervalValue::new(Second, false, 1, NANOS_PER_SECOND).is_err());
        assert!(IntervalValue::new(DayToSecond, false, 1, NANOS_PER_DAY - 1).is_ok());
    }

    #[test]
    fn test_absolute() {
        let v = parse_interval(YearToMonth, true, "2-3").unwrap();
        assert_eq!(interval_to_absolute(&v), -27);
        assert_eq!(interval_from_absolute(YearToMonth, -27).unwrap(), v);

        let v = parse_interval(DayToSecond, false, "1 01:00:00.5").unwrap();
        let abs = interval_to_absolute(&v);
        assert_eq!(abs, i128::from(NANOS_PER_DAY + H + 500_000_000));
        assert_eq!(interval_from_absolute(DayToSecond, abs).unwrap(), v);

        let hours = interval_from_absolute(DayToHour, abs).unwrap();
        assert_eq!(format_interval(&hours), "INTERVAL '1 01' DAY TO HOUR");
        let minutes = interval_from_absolute(Minute, abs).unwrap();
        assert_eq!(minutes.leading(), 24 * 60 + 60);

        assert!(interval_from_absolute(Year, i128::from(MAX_LEADING) * 12).is_err());
        assert!(interval_from_absolute(Second, i128::MAX).is_err());
    }

    #[test]
    fn test_field_extractors() {
        let v = parse_interval(DayToSecond, true, "3 04:05:06.789").unwrap();
        assert_eq!(v.days(), -3);
        assert_eq!(v.hours(), -4);
        assert_eq!(v.minutes(), -5);
        assert_eq!(v.seconds(), -6);
        assert_eq!(v.nanos(), -789_000_000);
        assert_eq!(v.years(), 0);
        assert_eq!(v.months(), 0);

        let v = parse_interval(YearToMonth, false, "5-7").unwrap();
        assert_eq!((v.years(), v.months(), v.days()), (5, 7, 0));

        let v = parse_interval(Hour, false, "100").unwrap();
        assert_eq!((v.days(), v.hours(), v.minutes()), (0, 100, 0));

        let v = parse_interval(MinuteToSecond, false, "90:30").unwrap();
        assert_eq!((v.hours(), v.minutes(), v.seconds()), (0, 90, 30));
    }

    #[test]
    fn test_ordering() {
        let a = parse_interval(DayToHour, false, "1 23").unwrap();
        let b = parse_interval(Day, false, "2").unwrap();
        let c = parse_interval(Day, true, "2").unwrap();
        assert!(a < b);
        assert!(c < a);
        let ym = parse_interval(Year, false, "1").unwrap();
        assert_eq!(ym.partial_cmp(&a), None);
    }

    #[test]
    fn test_qualifier_attributes() {
        assert_eq!(IntervalQualifier::ALL.len(), 13);
        assert_eq!(DayToSecond.name(), "DAY TO SECOND");
        assert_eq!(DayToSecond.field_count(), 2);
        assert_eq!(Second.field_count(), 1);
        assert!(MinuteToSecond.has_seconds());
        assert!(!HourToMinute.has_seconds());
        assert!(YearToMonth.is_year_month());
        assert!(!Day.is_year_month());
    }

    #[test]
    fn test_serde() {
        let v = parse_interval(HourToMinute, true, "5:30").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("HOUR_TO_MINUTE"));
        let back: IntervalValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        let bad = r#"{"qualifier":"HOUR_TO_MINUTE","negative":false,"leading":1,"remaining":60}"#;
        assert!(serde_json::from_str::<IntervalValue>(bad).is_err());
    }
}
