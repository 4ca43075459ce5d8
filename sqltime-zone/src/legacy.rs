//! Millisecond timestamps
//!
//! Conversions between epoch milliseconds, as exchanged with legacy
//! date/time interfaces, and local (date value, time nanos) pairs. `None`
//! as the zone means the default zone.

use sqltime_core::date::date_value_from_absolute_day;
use sqltime_core::time::MILLIS_PER_DAY;
use sqltime_core::{DateValue, Result, TemporalError, TimeNanos};

use crate::cache::default_zone;
use crate::rule::ZoneRule;

const NANOS_PER_MILLI: i64 = 1_000_000;

fn with_zone<T>(zone: Option<&ZoneRule>, f: impl FnOnce(&ZoneRule) -> Result<T>) -> Result<T> {
    match zone {
        Some(zone) => f(zone),
        None => {
            let zone = default_zone()?;
            f(&*zone)
        }
    }
}

/// Offset in milliseconds at an instant given in epoch milliseconds
pub fn time_zone_offset_millis(zone: Option<&ZoneRule>, epoch_millis: i64) -> Result<i64> {
    let offset = with_zone(zone, |z| z.offset_utc(epoch_millis.div_euclid(1000)))?;
    Ok(i64::from(offset) * 1000)
}

/// Date of a local millisecond timestamp
pub fn date_value_from_local_millis(local_millis: i64) -> DateValue {
    date_value_from_absolute_day(local_millis.div_euclid(MILLIS_PER_DAY))
}

/// Time of day of a local millisecond timestamp
pub fn nanos_from_local_millis(local_millis: i64) -> TimeNanos {
    local_millis.rem_euclid(MILLIS_PER_DAY) * NANOS_PER_MILLI
}

/// Local date and time of an instant.
///
/// `nanos` adds sub-millisecond precision; any whole milliseconds in it are
/// ignored since `epoch_millis` already carries them.
pub fn from_timestamp(
    zone: Option<&ZoneRule>,
    epoch_millis: i64,
    nanos: i64,
) -> Result<(DateValue, TimeNanos)> {
    let local = epoch_millis
        .checked_add(time_zone_offset_millis(zone, epoch_millis)?)
        .ok_or(TemporalError::Overflow("local millis"))?;
    Ok((
        date_value_from_local_millis(local),
        nanos_from_local_millis(local) + nanos.rem_euclid(NANOS_PER_MILLI),
    ))
}

/// Epoch milliseconds of a local date and time
pub fn millis_from_local(
    zone: Option<&ZoneRule>,
    date_value: DateValue,
    time_nanos: TimeNanos,
) -> Result<i64> {
    let seconds = with_zone(zone, |z| z.epoch_seconds_from_local(date_value, time_nanos))?;
    seconds
        .checked_mul(1000)
        .and_then(|ms| ms.checked_add(time_nanos.div_euclid(NANOS_PER_MILLI) % 1000))
        .ok_or(TemporalError::Overflow("epoch millis"))
}
