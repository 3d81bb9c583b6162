//! Client-side query cache.
//!
//! Keyed snapshots of server data with explicit invalidation: a successful
//! fetch stores a fresh entry, a successful mutation marks the entry stale,
//! and a stale or missing entry forces the next load to hit the API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

struct CacheEntry<V> {
    value: V,
    stale: bool,
    stored_at: DateTime<Utc>,
}

/// In-memory cache of keyed query results.
pub struct QueryCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> QueryCache<V> {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Get the cached value for `key`, if present and fresh.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| &entry.value)
    }

    /// Store a fresh value for `key`, replacing any previous entry.
    pub fn put(&mut self, key: &str, value: V) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                stale: false,
                stored_at: Utc::now(),
            },
        );
    }

    /// Mark the entry for `key` stale so the next read misses.
    ///
    /// The value is kept so callers that tolerate staleness can still reach
    /// it through `get_stale` while a re-fetch is in flight.
    pub fn invalidate(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stale = true;
        }
    }

    /// Get the cached value for `key` even if it has been invalidated.
    #[must_use]
    pub fn get_stale(&self, key: &str) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// When the entry for `key` was last stored, if present.
    #[must_use]
    pub fn stored_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries.get(key).map(|entry| entry.stored_at)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_fresh_value() {
        let mut cache = QueryCache::new();
        cache.put("tiers", vec![1, 2, 3]);

        assert_eq!(cache.get("tiers"), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_get_misses_on_unknown_key() {
        let cache: QueryCache<Vec<i32>> = QueryCache::new();

        assert!(cache.get("tiers").is_none());
    }

    #[test]
    fn test_invalidate_forces_miss() {
        let mut cache = QueryCache::new();
        cache.put("tiers", vec![1]);
        cache.invalidate("tiers");

        assert!(cache.get("tiers").is_none());
        assert_eq!(cache.get_stale("tiers"), Some(&vec![1]));
    }

    #[test]
    fn test_put_refreshes_invalidated_entry() {
        let mut cache = QueryCache::new();
        cache.put("tiers", vec![1]);
        cache.invalidate("tiers");
        cache.put("tiers", vec![2]);

        assert_eq!(cache.get("tiers"), Some(&vec![2]));
    }

    #[test]
    fn test_invalidate_unknown_key_is_noop() {
        let mut cache: QueryCache<Vec<i32>> = QueryCache::new();
        cache.invalidate("tiers");

        assert!(cache.get("tiers").is_none());
    }
}
