//! sqltime Core - Temporal value encoding
//!
//! This crate provides the pure, stateless part of the engine:
//! - `date`: dates packed into one ordered integer, absolute day numbers
//! - `calendar`: day of week, day of year, week numbering
//! - `time`: time of day in nanoseconds, fractional-second rounding
//! - `interval`: SQL INTERVAL parsing and formatting
//! - `TemporalValue`: typed values handed to the value layer
//! - `TemporalError`: structured errors

pub mod calendar;
pub mod date;
mod digits;
mod error;
pub mod interval;
pub mod time;
mod value;

pub use date::DateValue;
pub use error::{codes, Result, TemporalError};
pub use interval::{IntervalQualifier, IntervalUnit, IntervalValue};
pub use time::TimeNanos;
pub use value::TemporalValue;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{
        DateValue, IntervalQualifier, IntervalValue, TemporalError, TemporalValue, TimeNanos,
    };
}
