//! Shared zone caches
//!
//! Two process-wide caches hold immutable `Arc` snapshots that are swapped
//! atomically: the zone id cache, a fixed array of single-slot buckets, and
//! the default zone, resolved lazily from the host and dropped by
//! [`reset_calendar`]. Racing resolvers only cause redundant resolution, and a
//! resolve that overlaps a reset is never published.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use arc_swap::{ArcSwap, ArcSwapOption};
use sqltime_core::{Result, TemporalError};
use tracing::{debug, trace, warn};

use crate::rule::ZoneRule;

const ID_CACHE_SIZE: usize = 32;

struct CacheEntry {
    id: String,
    rule: Arc<ZoneRule>,
}

/// Zone rules by id, one entry per bucket
pub(crate) struct IdCache {
    buckets: Vec<ArcSwapOption<CacheEntry>>,
}

impl IdCache {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            buckets: (0..size.max(1)).map(|_| ArcSwapOption::empty()).collect(),
        }
    }

    fn bucket(&self, id: &str) -> &ArcSwapOption<CacheEntry> {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        &self.buckets[(hasher.finish() % self.buckets.len() as u64) as usize]
    }

    /// Cached rule for `id`, resolving and storing it on a miss
    pub(crate) fn get_or_resolve(
        &self,
        id: &str,
        resolve: impl FnOnce(&str) -> Result<ZoneRule>,
    ) -> Result<Arc<ZoneRule>> {
        let slot = self.bucket(id);
        if let Some(entry) = &*slot.load() {
            if entry.id == id {
                return Ok(Arc::clone(&entry.rule));
            }
        }
        trace!(id, "zone id cache miss");
        let rule = Arc::new(resolve(id)?);
        slot.store(Some(Arc::new(CacheEntry {
            id: id.to_string(),
            rule: Arc::clone(&rule),
        })));
        Ok(rule)
    }
}

static ID_CACHE: LazyLock<IdCache> = LazyLock::new(|| IdCache::new(ID_CACHE_SIZE));

pub(crate) fn id_cache() -> &'static IdCache {
    &ID_CACHE
}

// ============================================================================
// Default Zone
// ============================================================================

/// Resolved default zone, tagged with the reset generation it belongs to
struct DefaultZone {
    generation: u64,
    zone: Option<Arc<ZoneRule>>,
}

static DEFAULT_ZONE: LazyLock<ArcSwap<DefaultZone>> = LazyLock::new(|| {
    ArcSwap::from_pointee(DefaultZone {
        generation: 0,
        zone: None,
    })
});

/// Process-level override of the host zone id
static HOST_ZONE: LazyLock<ArcSwapOption<String>> = LazyLock::new(ArcSwapOption::empty);

/// Set or clear the host default zone id.
///
/// The cached default zone keeps its value until [`reset_calendar`].
pub fn set_host_zone(id: Option<&str>) {
    HOST_ZONE.store(id.map(|id| Arc::new(id.to_string())));
}

/// Host zone id: the override, then `TZ`, then the operating system setting
fn host_zone_id() -> Option<String> {
    if let Some(id) = HOST_ZONE.load_full() {
        return Some(id.as_ref().clone());
    }
    if let Ok(tz) = std::env::var("TZ") {
        let tz = tz.strip_prefix(':').unwrap_or(&tz).trim();
        if !tz.is_empty() {
            return Some(tz.to_string());
        }
    }
    iana_time_zone::get_timezone().ok()
}

/// The default zone, resolving it from the host on first use.
///
/// A zone resolved across a concurrent [`reset_calendar`] is returned to the
/// caller but not published.
pub fn default_zone() -> Result<Arc<ZoneRule>> {
    let current = DEFAULT_ZONE.load_full();
    if let Some(zone) = &current.zone {
        return Ok(Arc::clone(zone));
    }
    let Some(id) = host_zone_id() else {
        warn!("host time zone is not configured");
        return Err(TemporalError::UnknownZone(String::new()));
    };
    let zone = ZoneRule::of_id(&id).map_err(|e| {
        warn!(id = %id, "cannot resolve host time zone");
        e
    })?;
    debug!(id = zone.id(), "default time zone resolved");
    DEFAULT_ZONE.compare_and_swap(
        &current,
        Arc::new(DefaultZone {
            generation: current.generation,
            zone: Some(Arc::clone(&zone)),
        }),
    );
    Ok(zone)
}

/// Drop the cached default zone; the next use observes the host setting
pub fn reset_calendar() {
    DEFAULT_ZONE.rcu(|current| DefaultZone {
        generation: current.generation.wrapping_add(1),
        zone: None,
    });
    debug!("default time zone reset");
}
