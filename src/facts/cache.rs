//! A reusable in-memory cache with per-entry TTL expiry.
//!
//! [`MemoryCache`] memoizes remote API calls for the lifetime of the
//! process. Entries carry an absolute expiry instant computed at write
//! time; reads perform lazy eviction. Negative results (an empty language
//! map, a failed email search) are regular values, so known-absent data
//! does not trigger repeated remote lookups.

use chrono::{DateTime, TimeDelta, Utc};
use core::time::Duration;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

const LOG_TARGET: &str = "     cache";

/// TTL applied when `set` is called without an explicit one.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Default bound on the number of entries held at once.
pub const DEFAULT_CACHE_CAPACITY: usize = 2048;

/// Point-in-time cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// A TTL-aware, capacity-bounded, in-memory cache.
///
/// Safe for concurrent use from overlapping in-flight fetches; the store is
/// guarded by a mutex held only for the duration of each operation.
#[derive(Debug)]
pub struct MemoryCache<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    default_ttl: Duration,
    capacity: usize,
}

impl<V: Clone> MemoryCache<V> {
    /// Create a new cache with the given default TTL and entry capacity.
    #[must_use]
    pub fn new(default_ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            capacity: capacity.max(1),
        }
    }

    /// Look up a value, evicting it first if its TTL has elapsed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Utc::now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                log::debug!(target: LOG_TARGET, "Evicting expired entry for '{key}'");
                let _ = entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Store a value, expiring `ttl` (or the default TTL) from now.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        let now = Utc::now();
        let ttl = ttl.unwrap_or(self.default_ttl);
        let delta = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        let expires_at = now.checked_add_signed(delta).unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            entries.retain(|_, entry| !entry.is_expired(now));

            if entries.len() >= self.capacity {
                // Still full: drop the entry closest to expiry.
                if let Some(victim) = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.expires_at)
                    .map(|(k, _)| k.clone())
                {
                    log::debug!(target: LOG_TARGET, "Capacity reached, evicting '{victim}'");
                    let _ = entries.remove(&victim);
                }
            }
        }

        let _ = entries.insert(key, Entry { value, expires_at });
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Count all entries and the subset whose TTL has not yet elapsed.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        CacheStats {
            total_entries: entries.len(),
            valid_entries: entries.values().filter(|entry| !entry.is_expired(now)).count(),
        }
    }
}

impl<V: Clone> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL, DEFAULT_CACHE_CAPACITY)
    }
}

/// Derive a cache key from an operation name and its ordered arguments.
///
/// Arguments are lowercased so that identity lookups are case-insensitive.
/// The derivation is order-sensitive and stable across calls.
#[must_use]
pub fn cache_key(operation: &str, args: &[&str]) -> String {
    let mut key = String::from(operation);
    for arg in args {
        key.push(':');
        key.push_str(&arg.to_lowercase());
    }
    key
}
