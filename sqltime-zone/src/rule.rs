//! Zone offset rules
//!
//! A `ZoneRule` maps an instant to a UTC offset. Fixed offsets are stored
//! directly; region rules borrow the bundled IANA database.

use std::fmt;
use std::sync::Arc;

use sqltime_core::date::absolute_day_from_date_value;
use sqltime_core::time::{format_offset, NANOS_PER_SECOND, SECONDS_PER_DAY};
use sqltime_core::{DateValue, Result, TemporalError, TimeNanos};
use tz::timezone::TransitionRule;
use tz::TimeZoneRef;

use crate::cache;

/// Largest accepted fixed offset, in seconds
pub const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// Distance from a local time at which candidate offsets are sampled
const TRANSITION_WINDOW_SECONDS: i64 = 2 * SECONDS_PER_DAY;

#[derive(Debug, Clone, Copy)]
enum Rule {
    Fixed(i32),
    Region(TimeZoneRef<'static>),
}

/// Time zone offset rule, identified by its id
#[derive(Debug, Clone)]
pub struct ZoneRule {
    id: String,
    rule: Rule,
}

impl PartialEq for ZoneRule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ZoneRule {}

impl ZoneRule {
    pub fn utc() -> Self {
        Self {
            id: "UTC".to_string(),
            rule: Rule::Fixed(0),
        }
    }

    /// Fixed offset rule; offset 0 is UTC
    pub fn of_offset(offset_seconds: i32) -> Result<Self> {
        if offset_seconds.unsigned_abs() > MAX_OFFSET_SECONDS.unsigned_abs() {
            return Err(TemporalError::UnknownZone(format_offset(offset_seconds)));
        }
        if offset_seconds == 0 {
            return Ok(Self::utc());
        }
        Ok(Self {
            id: format_offset(offset_seconds),
            rule: Rule::Fixed(offset_seconds),
        })
    }

    /// Resolve a zone id through the shared id cache.
    ///
    /// Accepts `Z`, `UTC`, `GMT`, an offset `±H[H][:MM[:SS]]` optionally
    /// prefixed by `UTC` or `GMT`, and IANA region names (case-insensitive).
    pub fn of_id(id: &str) -> Result<Arc<Self>> {
        cache::id_cache().get_or_resolve(id.trim(), Self::parse)
    }

    /// Resolve a zone id without caching
    pub fn parse(id: &str) -> Result<Self> {
        let unknown = || TemporalError::UnknownZone(id.to_string());
        if ["Z", "UTC", "GMT"].iter().any(|utc| id.eq_ignore_ascii_case(utc)) {
            return Ok(Self::utc());
        }
        let rest = strip_prefix_ignore_case(id, "UTC")
            .or_else(|| strip_prefix_ignore_case(id, "GMT"))
            .unwrap_or(id);
        if rest.starts_with(['+', '-']) {
            let offset = parse_offset(rest).ok_or_else(unknown)?;
            return Self::of_offset(offset).map_err(|_| unknown());
        }
        let tz = tzdb::tz_by_name(id).ok_or_else(unknown)?;
        let name = tzdb::TZ_NAMES
            .iter()
            .copied()
            .find(|name| name.eq_ignore_ascii_case(id))
            .unwrap_or(id);
        Ok(Self {
            id: name.to_string(),
            rule: Rule::Region(tz),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The offset if it never changes
    pub fn fixed_offset(&self) -> Option<i32> {
        match self.rule {
            Rule::Fixed(offset) => Some(offset),
            Rule::Region(tz) => {
                if !tz.transitions().is_empty() {
                    return None;
                }
                match tz.extra_rule() {
                    Some(TransitionRule::Fixed(ltt)) => Some(ltt.ut_offset()),
                    Some(TransitionRule::Alternate(_)) => None,
                    None => tz.local_time_types().first().map(|ltt| ltt.ut_offset()),
                }
            }
        }
    }

    pub fn has_fixed_offset(&self) -> bool {
        self.fixed_offset().is_some()
    }

    /// Offset from UTC in seconds at `epoch_seconds`.
    ///
    /// A transition takes effect at its own second.
    pub fn offset_utc(&self, epoch_seconds: i64) -> Result<i32> {
        match self.rule {
            Rule::Fixed(offset) => Ok(offset),
            Rule::Region(tz) => tz
                .find_local_time_type(epoch_seconds)
                .map(|ltt| ltt.ut_offset())
                .map_err(|_| TemporalError::OffsetOutOfRange(epoch_seconds)),
        }
    }

    /// Offset in effect at a local date and time
    pub fn offset_local(&self, date_value: DateValue, time_nanos: TimeNanos) -> Result<i32> {
        let local = local_seconds(date_value, time_nanos)?;
        let epoch = self.epoch_seconds_from_local(date_value, time_nanos)?;
        Ok((local - epoch) as i32)
    }

    /// Seconds since the epoch of a local date and time.
    ///
    /// A local time skipped by a forward transition is shifted forward by the
    /// length of the gap. An ambiguous local time resolves to the earlier
    /// instant.
    pub fn epoch_seconds_from_local(
        &self,
        date_value: DateValue,
        time_nanos: TimeNanos,
    ) -> Result<i64> {
        let local = local_seconds(date_value, time_nanos)?;
        if let Rule::Fixed(offset) = self.rule {
            return Ok(local - i64::from(offset));
        }
        let before = self.offset_utc(local - TRANSITION_WINDOW_SECONDS)?;
        let after = self.offset_utc(local + TRANSITION_WINDOW_SECONDS)?;
        let mut valid = None;
        for offset in [before, after] {
            if self.offset_utc(local - i64::from(offset))? == offset {
                valid = Some(valid.map_or(offset, |v: i32| v.max(offset)));
            }
        }
        Ok(local - i64::from(valid.unwrap_or(before)))
    }
}

impl fmt::Display for ZoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Local date and time as seconds on the UTC time line
fn local_seconds(date_value: DateValue, time_nanos: TimeNanos) -> Result<i64> {
    absolute_day_from_date_value(date_value)
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|s| s.checked_add(time_nanos.div_euclid(NANOS_PER_SECOND)))
        .ok_or(TemporalError::Overflow("local seconds"))
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

fn two_digits(text: &str) -> Option<i32> {
    if text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

/// Parse `±H[H][:MM[:SS]]` into signed seconds
fn parse_offset(text: &str) -> Option<i32> {
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => return None,
    };
    let mut parts = body.split(':');
    let hours = parts.next()?;
    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes = match parts.next() {
        Some(m) => two_digits(m)?,
        None => 0,
    };
    let seconds = match parts.next() {
        Some(s) => two_digits(s)?,
        None => 0,
    };
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }
    let total = hours * 3600 + minutes * 60 + seconds;
    if total > MAX_OFFSET_SECONDS {
        return None;
    }
    Some(if negative { -total } else { total })
}
