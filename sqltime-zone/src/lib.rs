//! sqltime Zone - Time zone offsets
//!
//! Resolves the UTC offset of an instant under a fixed offset or an IANA
//! region, converts local date/time pairs to instants, and keeps the
//! process-wide default zone:
//! - `ZoneRule`: offset rule parsed from a zone id
//! - `default_zone` / `reset_calendar`: lazily resolved default zone
//! - `legacy`: epoch millisecond conversions

mod cache;
pub mod legacy;
mod rule;

pub use cache::{default_zone, reset_calendar, set_host_zone};
pub use rule::{ZoneRule, MAX_OFFSET_SECONDS};

/// Serializes tests that change the default zone
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
