//! Typed temporal values
//!
//! What the value layer stores, compares and prints: dates, times,
//! timestamps with and without an offset, and intervals.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::date::{absolute_day_from_date_value, append_date, DateValue};
use crate::interval::{format_interval, IntervalValue};
use crate::time::{append_offset, append_time, TimeNanos, NANOS_PER_DAY, NANOS_PER_SECOND};

/// Temporal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TemporalValue {
    Date(DateValue),
    Time(TimeNanos),
    Timestamp {
        date_value: DateValue,
        time_nanos: TimeNanos,
    },
    TimestampTz {
        date_value: DateValue,
        time_nanos: TimeNanos,
        offset_seconds: i32,
    },
    Interval(IntervalValue),
}

impl TemporalValue {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_date(&self) -> Option<DateValue> {
        match self {
            TemporalValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<TimeNanos> {
        match self {
            TemporalValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<(DateValue, TimeNanos)> {
        match self {
            TemporalValue::Timestamp {
                date_value,
                time_nanos,
            } => Some((*date_value, *time_nanos)),
            _ => None,
        }
    }

    pub fn as_timestamp_tz(&self) -> Option<(DateValue, TimeNanos, i32)> {
        match self {
            TemporalValue::TimestampTz {
                date_value,
                time_nanos,
                offset_seconds,
            } => Some((*date_value, *time_nanos, *offset_seconds)),
            _ => None,
        }
    }

    pub fn as_interval(&self) -> Option<&IntervalValue> {
        match self {
            TemporalValue::Interval(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_interval(&self) -> bool {
        matches!(self, TemporalValue::Interval(_))
    }

    /// SQL type name
    pub fn type_name(&self) -> &'static str {
        match self {
            TemporalValue::Date(_) => "DATE",
            TemporalValue::Time(_) => "TIME",
            TemporalValue::Timestamp { .. } => "TIMESTAMP",
            TemporalValue::TimestampTz { .. } => "TIMESTAMP WITH TIME ZONE",
            TemporalValue::Interval(_) => "INTERVAL",
        }
    }

    /// Nanoseconds since 1970-01-01T00:00:00Z of a timestamp with offset
    fn utc_nanos(date_value: DateValue, time_nanos: TimeNanos, offset_seconds: i32) -> i128 {
        i128::from(absolute_day_from_date_value(date_value)) * i128::from(NANOS_PER_DAY)
            + i128::from(time_nanos)
            - i128::from(offset_seconds) * i128::from(NANOS_PER_SECOND)
    }
}

/// Values of different kinds do not compare
impl PartialOrd for TemporalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use TemporalValue::*;
        match (self, other) {
            (Date(a), Date(b)) => Some(a.cmp(b)),
            (Time(a), Time(b)) => Some(a.cmp(b)),
            (
                Timestamp {
                    date_value: d1,
                    time_nanos: t1,
                },
                Timestamp {
                    date_value: d2,
                    time_nanos: t2,
                },
            ) => Some((d1, t1).cmp(&(d2, t2))),
            (
                TimestampTz {
                    date_value: d1,
                    time_nanos: t1,
                    offset_seconds: o1,
                },
                TimestampTz {
                    date_value: d2,
                    time_nanos: t2,
                    offset_seconds: o2,
                },
            ) => Some(
                Self::utc_nanos(*d1, *t1, *o1)
                    .cmp(&Self::utc_nanos(*d2, *t2, *o2))
                    .then(o1.cmp(o2)),
            ),
            (Interval(a), Interval(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl std::fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::with_capacity(48);
        match self {
            TemporalValue::Date(d) => {
                buf.push_str("DATE '");
                append_date(&mut buf, *d);
            }
            TemporalValue::Time(t) => {
                buf.push_str("TIME '");
                append_time(&mut buf, *t);
            }
            TemporalValue::Timestamp {
                date_value,
                time_nanos,
            } => {
                buf.push_str("TIMESTAMP '");
                append_date(&mut buf, *date_value);
                buf.push(' ');
                append_time(&mut buf, *time_nanos);
            }
            TemporalValue::TimestampTz {
                date_value,
                time_nanos,
                offset_seconds,
            } => {
                buf.push_str("TIMESTAMP WITH TIME ZONE '");
                append_date(&mut buf, *date_value);
                buf.push(' ');
                append_time(&mut buf, *time_nanos);
                append_offset(&mut buf, *offset_seconds);
            }
            TemporalValue::Interval(i) => return f.write_str(&format_interval(i)),
        }
        buf.push('\'');
        f.write_str(&buf)
    }
}

impl From<IntervalValue> for TemporalValue {
    fn from(i: IntervalValue) -> Self {
        TemporalValue::Interval(i)
    }
}
