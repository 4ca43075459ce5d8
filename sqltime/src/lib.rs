//! sqltime - Temporal value engine for an embedded SQL database
//!
//! Encodes, compares, rounds, parses and formats dates, times, timestamps
//! and SQL intervals, and resolves time zone offsets.
//!
//! ```
//! use sqltime::interval::parse_interval;
//! use sqltime::prelude::*;
//!
//! let v = sqltime::parse_timestamp("2024-01-31 10:00:00+01:00").unwrap();
//! assert_eq!(v.to_string(), "TIMESTAMP WITH TIME ZONE '2024-01-31 10:00:00+01:00'");
//!
//! let i = parse_interval(IntervalQualifier::DayToSecond, false, "10 11:12:13.5").unwrap();
//! assert_eq!(i.to_string(), "INTERVAL '10 11:12:13.5' DAY TO SECOND");
//! ```

pub mod timestamp;

pub use sqltime_core::{calendar, date, interval, time};
pub use sqltime_core::{
    codes, DateValue, IntervalQualifier, IntervalUnit, IntervalValue, Result, TemporalError,
    TemporalValue, TimeNanos,
};
pub use sqltime_zone::{default_zone, legacy, reset_calendar, set_host_zone, ZoneRule};
pub use timestamp::{format_timestamp, format_timestamp_tz, parse_timestamp, round_timestamp};

/// Prelude for convenient imports
pub mod prelude {
    pub use sqltime_core::prelude::*;
    pub use sqltime_zone::ZoneRule;
}
