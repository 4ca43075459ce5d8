//! Structured errors for temporal conversions
//!
//! Every failure in this layer is a local validation failure. Nothing is
//! retried; errors are surfaced to the caller as soon as they are detected.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_DATE_FIELD: &str = "INVALID_DATE_FIELD";
    pub const INVALID_DATE_FORMAT: &str = "INVALID_DATE_FORMAT";
    pub const INVALID_TIME_FORMAT: &str = "INVALID_TIME_FORMAT";
    pub const INTERVAL_FORMAT: &str = "INTERVAL_FORMAT";
    pub const UNKNOWN_ZONE: &str = "UNKNOWN_ZONE";
    pub const OFFSET_OUT_OF_RANGE: &str = "OFFSET_OUT_OF_RANGE";
    pub const OVERFLOW: &str = "OVERFLOW";
}

/// Errors produced by the temporal value engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalError {
    /// Month or day out of range for the strict date constructor
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDateField { year: i64, month: i64, day: i64 },

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// Malformed interval text, wrong field count, or a field overflow
    #[error("Invalid interval: {0}")]
    IntervalFormat(String),

    #[error("Unknown time zone: {0}")]
    UnknownZone(String),

    /// The instant lies outside the range covered by the zone rule
    #[error("Instant {0} is out of range for the time zone")]
    OffsetOutOfRange(i64),

    #[error("Overflow: {0}")]
    Overflow(&'static str),
}

impl TemporalError {
    pub fn invalid_date(year: i64, month: i64, day: i64) -> Self {
        Self::InvalidDateField { year, month, day }
    }

    pub fn invalid_time(text: impl Into<String>) -> Self {
        Self::InvalidTimeFormat(text.into())
    }

    pub fn interval_format(details: impl Into<String>) -> Self {
        Self::IntervalFormat(details.into())
    }

    /// Machine-readable code, see [`codes`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDateField { .. } => codes::INVALID_DATE_FIELD,
            Self::InvalidDateFormat(_) => codes::INVALID_DATE_FORMAT,
            Self::InvalidTimeFormat(_) => codes::INVALID_TIME_FORMAT,
            Self::IntervalFormat(_) => codes::INTERVAL_FORMAT,
            Self::UnknownZone(_) => codes::UNKNOWN_ZONE,
            Self::OffsetOutOfRange(_) => codes::OFFSET_OUT_OF_RANGE,
            Self::Overflow(_) => codes::OVERFLOW,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidDateField { .. } => {
                Some("Check date components (month 1-12, day valid for the month)")
            }
            Self::InvalidDateFormat(_) => Some("Use YYYY-MM-DD"),
            Self::InvalidTimeFormat(_) => Some("Use HH:MM:SS[.fraction] or HH.MM.SS[.fraction]"),
            Self::IntervalFormat(_) => None,
            Self::UnknownZone(_) => {
                Some("Use a region name such as Europe/Paris or an offset such as +01:00")
            }
            Self::OffsetOutOfRange(_) | Self::Overflow(_) => None,
        }
    }
}

/// Result alias used throughout the sqltime crates
pub type Result<T, E = TemporalError> = std::result::Result<T, E>;
