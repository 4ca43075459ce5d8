//! Timestamps: a date value and a time of day, optionally with an offset

use sqltime_core::date::{
    absolute_day_from_date_value, append_date, date_value_from_absolute_day, day_from_date_value,
    increment_date_value, month_from_date_value, parse_date_value, year_from_date_value,
};
use sqltime_core::time::{
    append_offset, append_time, convert_scale_with_carry, parse_time_nanos, NANOS_PER_DAY,
    NANOS_PER_SECOND, SECONDS_PER_DAY,
};
use sqltime_core::{DateValue, Result, TemporalError, TemporalValue, TimeNanos};
use sqltime_zone::ZoneRule;

/// Parse `YYYY-MM-DD[( |T)HH:MM[:SS[.fraction]][zone]]`.
///
/// The zone is `Z`, an offset such as `+01:00`, or a zone id after a space.
/// Without a zone the result is a `Timestamp`, otherwise a `TimestampTz`
/// whose offset is the one in effect at that local time.
pub fn parse_timestamp(text: &str) -> Result<TemporalValue> {
    let text = text.trim();
    let end = text.len();
    let date_end = text.find([' ', 'T']).unwrap_or(end);
    let date_value = parse_date_value(text, 0, date_end)?;
    if date_end == end {
        return Ok(TemporalValue::Timestamp {
            date_value,
            time_nanos: 0,
        });
    }
    let time_start = date_end + 1;
    let zone_start = text[time_start..]
        .find(['Z', '+', '-', ' '])
        .map(|p| p + time_start);
    let time_nanos = parse_time_nanos(text, time_start, zone_start.unwrap_or(end))?;
    match zone_start {
        None => Ok(TemporalValue::Timestamp {
            date_value,
            time_nanos,
        }),
        Some(z) => {
            let zone = ZoneRule::of_id(text[z..].trim())?;
            with_zone(date_value, time_nanos, &zone)
        }
    }
}

/// Attach a zone to a local timestamp.
///
/// A local time skipped by a forward transition moves forward by the gap.
pub fn with_zone(
    date_value: DateValue,
    time_nanos: TimeNanos,
    zone: &ZoneRule,
) -> Result<TemporalValue> {
    let epoch = zone.epoch_seconds_from_local(date_value, time_nanos)?;
    at_instant(epoch, time_nanos.rem_euclid(NANOS_PER_SECOND), zone)
}

/// The same instant as a timestamp with offset, seen from another zone
pub fn at_zone(
    date_value: DateValue,
    time_nanos: TimeNanos,
    offset_seconds: i32,
    zone: &ZoneRule,
) -> Result<TemporalValue> {
    let epoch = epoch_seconds(date_value, time_nanos, offset_seconds)?;
    at_instant(epoch, time_nanos.rem_euclid(NANOS_PER_SECOND), zone)
}

fn epoch_seconds(date_value: DateValue, time_nanos: TimeNanos, offset_seconds: i32) -> Result<i64> {
    absolute_day_from_date_value(date_value)
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|s| s.checked_add(time_nanos.div_euclid(NANOS_PER_SECOND)))
        .and_then(|s| s.checked_sub(i64::from(offset_seconds)))
        .ok_or(TemporalError::Overflow("epoch seconds"))
}

fn at_instant(epoch_seconds: i64, nanos_of_second: i64, zone: &ZoneRule) -> Result<TemporalValue> {
    let offset_seconds = zone.offset_utc(epoch_seconds)?;
    let local = epoch_seconds
        .checked_add(i64::from(offset_seconds))
        .ok_or(TemporalError::Overflow("local seconds"))?;
    Ok(TemporalValue::TimestampTz {
        date_value: date_value_from_absolute_day(local.div_euclid(SECONDS_PER_DAY)),
        time_nanos: local.rem_euclid(SECONDS_PER_DAY) * NANOS_PER_SECOND + nanos_of_second,
        offset_seconds,
    })
}

/// Round the time to `scale` fractional digits, moving to the next day
/// when it rounds up to midnight
pub fn round_timestamp(
    date_value: DateValue,
    time_nanos: TimeNanos,
    scale: u32,
) -> Result<(DateValue, TimeNanos)> {
    let (time_nanos, carry) = convert_scale_with_carry(time_nanos, scale, NANOS_PER_DAY);
    if !carry {
        return Ok((date_value, time_nanos));
    }
    if year_from_date_value(date_value) == i32::MAX
        && month_from_date_value(date_value) == 12
        && day_from_date_value(date_value) == 31
    {
        return Err(TemporalError::Overflow("timestamp rounding"));
    }
    Ok((increment_date_value(date_value), time_nanos))
}

/// Format as `YYYY-MM-DD HH:MM:SS[.fffffffff]`
pub fn format_timestamp(date_value: DateValue, time_nanos: TimeNanos) -> String {
    let mut buf = String::with_capacity(29);
    append_date(&mut buf, date_value);
    buf.push(' ');
    append_time(&mut buf, time_nanos);
    buf
}

/// Format as `YYYY-MM-DD HH:MM:SS[.fffffffff]+HH:MM`
pub fn format_timestamp_tz(
    date_value: DateValue,
    time_nanos: TimeNanos,
    offset_seconds: i32,
) -> String {
    let mut buf = format_timestamp(date_value, time_nanos);
    append_offset(&mut buf, offset_seconds);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqltime_core::codes;
    use sqltime_core::date::date_value;
    use sqltime_core::time::{time_nanos, NANOS_PER_HOUR};

    fn dv(y: i32, m: u32, d: u32) -> DateValue {
        date_value(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_local() {
        let v = parse_timestamp("2024-01-31 01:02:03.004").unwrap();
        assert_eq!(
            v,
            TemporalValue::Timestamp {
                date_value: dv(2024, 1, 31),
                time_nanos: 3_723_004_000_000
            }
        );
        assert_eq!(parse_timestamp("2024-01-31T01:02:03.004").unwrap(), v);
        let v = parse_timestamp("2024-01-31").unwrap();
        assert_eq!(v.as_timestamp(), Some((dv(2024, 1, 31), 0)));
    }

    #[test]
    fn test_parse_with_offset() {
        let v = parse_timestamp("2024-06-01 10:00:00+02:00").unwrap();
        assert_eq!(v.as_timestamp_tz(), Some((dv(2024, 6, 1), 10 * NANOS_PER_HOUR, 7200)));
        let v = parse_timestamp("2024-06-01T10:00:00Z").unwrap();
        assert_eq!(v.as_timestamp_tz(), Some((dv(2024, 6, 1), 10 * NANOS_PER_HOUR, 0)));
        let v = parse_timestamp("2024-06-01 10:00-05").unwrap();
        assert_eq!(v.as_timestamp_tz().map(|t| t.2), Some(-5 * 3600));
    }

    #[test]
    fn test_parse_with_region() {
        let v = parse_timestamp("2024-06-01 10:00:00 Europe/Paris").unwrap();
        assert_eq!(v.as_timestamp_tz(), Some((dv(2024, 6, 1), 10 * NANOS_PER_HOUR, 7200)));
        // 02:30 is skipped on 2024-03-31 in Paris
        let v = parse_timestamp("2024-03-31 02:30:00.5 Europe/Paris").unwrap();
        assert_eq!(
            v.as_timestamp_tz(),
            Some((dv(2024, 3, 31), time_nanos(3, 30, 0, 500_000_000).unwrap(), 7200))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_timestamp("2024-13-01").unwrap_err().code(), codes::INVALID_DATE_FIELD);
        assert_eq!(parse_timestamp("2024-01-01 25:00").unwrap_err().code(), codes::INVALID_TIME_FORMAT);
        assert_eq!(parse_timestamp("2024-01-01T").unwrap_err().code(), codes::INVALID_TIME_FORMAT);
        assert_eq!(
            parse_timestamp("2024-01-01 10:00 Mars/Base").unwrap_err().code(),
            codes::UNKNOWN_ZONE
        );
        assert_eq!(parse_timestamp("20240101").unwrap_err().code(), codes::INVALID_DATE_FORMAT);
    }

    #[test]
    fn test_at_zone() {
        let new_york = ZoneRule::parse("America/New_York").unwrap();
        let v = at_zone(dv(2024, 6, 1), 10 * NANOS_PER_HOUR + 7, 7200, &new_york).unwrap();
        assert_eq!(v.as_timestamp_tz(), Some((dv(2024, 6, 1), 4 * NANOS_PER_HOUR + 7, -4 * 3600)));
        let tokyo = ZoneRule::parse("Asia/Tokyo").unwrap();
        let v = at_zone(dv(2024, 6, 1), 20 * NANOS_PER_HOUR, 0, &tokyo).unwrap();
        assert_eq!(v.as_timestamp_tz(), Some((dv(2024, 6, 2), 5 * NANOS_PER_HOUR, 9 * 3600)));
    }

    #[test]
    fn test_round_with_carry() {
        assert_eq!(
            round_timestamp(dv(2024, 12, 31), NANOS_PER_DAY - 1, 8).unwrap(),
            (dv(2025, 1, 1), 0)
        );
        assert_eq!(
            round_timestamp(dv(2024, 2, 28), NANOS_PER_DAY - 400_000_000, 0).unwrap(),
            (dv(2024, 2, 29), 0)
        );
        assert_eq!(
            round_timestamp(dv(2024, 2, 28), 1_234_567_891, 3).unwrap(),
            (dv(2024, 2, 28), 1_235_000_000)
        );
        assert_eq!(
            round_timestamp(dv(2024, 2, 28), NANOS_PER_DAY - 1, 9).unwrap(),
            (dv(2024, 2, 28), NANOS_PER_DAY - 1)
        );
        let last = dv(i32::MAX, 12, 31);
        assert!(round_timestamp(last, NANOS_PER_DAY - 1, 0).is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_timestamp(dv(2024, 1, 31), 3_723_004_000_000), "2024-01-31 01:02:03.004");
        assert_eq!(format_timestamp(dv(-44, 3, 15), 0), "-0044-03-15 00:00:00");
        assert_eq!(
            format_timestamp_tz(dv(2024, 1, 31), 0, -(5 * 3600 + 30 * 60)),
            "2024-01-31 00:00:00-05:30"
        );
    }
}
