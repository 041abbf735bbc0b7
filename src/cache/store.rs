//! Cache Store Module
//!
//! Synchronous cache core combining HashMap storage with sliding-TTL
//! expiration. All operations are total: lookups signal absence through
//! `Option` rather than an error type, and no input is rejected.

use std::collections::HashMap;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats};

// == Sweep Report ==
/// Outcome of one sweep scan over the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of expired entries removed by this scan
    pub removed: usize,
    /// Number of entries that still hold a deadline (non-zero TTL) after
    /// the scan; drives the sweep's re-arming decision
    pub pending: usize,
}

// == Cache Store ==
/// Key-value storage with per-entry sliding TTL.
///
/// `HashMap` gives exact-key lookups with no inherited or default keys, so
/// a key literally named `"toString"` is an ordinary key.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores a key-value pair with an optional TTL.
    ///
    /// If the key already exists, the value is overwritten and the deadline
    /// resets to now.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_secs` - Optional TTL in seconds; `None` or `Some(0)` means the
    ///   entry never expires
    pub fn set(&mut self, key: String, value: V, ttl_secs: Option<u64>) {
        self.entries.insert(key, CacheEntry::new(value, ttl_secs));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key, returning `None` if the key is absent or
    /// its entry is no longer live.
    ///
    /// A stale entry found here is removed immediately rather than left for
    /// the sweep, so a logically-expired value is never returned as live. A
    /// successful read bumps `last_used`, sliding the entry's deadline
    /// forward.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        match self.entries.get_mut(key) {
            Some(entry) if entry.is_live() => {
                entry.touch();
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            Some(_) => {
                // Stale hit: reclaim on the spot
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Contains ==
    /// Liveness-aware existence check. Unlike `get`, this does not bump
    /// `last_used`, so probing a key never extends its life.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.is_live())
    }

    // == Delete ==
    /// Removes the entry for `key` if present. Returns whether an entry was
    /// removed; deleting a missing key is a no-op.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Discards all entries by replacing the storage with a fresh empty map.
    pub fn clear(&mut self) {
        self.entries = HashMap::new();
        self.stats.set_total_entries(0);
    }

    // == Sweep Expired ==
    /// Scans every entry once against a single clock reading, removing those
    /// whose deadline has passed.
    ///
    /// Permanent entries (TTL 0) are skipped entirely and never counted as
    /// pending, so a store holding only permanent entries reports
    /// `pending == 0` and lets the sweep go idle.
    pub fn sweep_expired(&mut self) -> SweepReport {
        let now = current_timestamp_ms();
        let mut removed = 0;
        let mut pending = 0;

        self.entries.retain(|_, entry| {
            if !entry.has_deadline() {
                return true;
            }
            if entry.is_live_at(now) {
                pending += 1;
                true
            } else {
                removed += 1;
                false
            }
        });

        self.stats.record_expirations(removed as u64);
        self.stats.set_total_entries(self.entries.len());
        SweepReport { removed, pending }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache, including any
    /// stale entries the sweep has not yet reclaimed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Test hook: rewinds an entry's `last_used` so expiry paths can be
    /// exercised without real sleeps.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, key: &str, by_ms: u64) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_used -= by_ms;
        }
    }
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), None);
        let value = store.get("key1");

        assert_eq!(value.as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new();

        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_empty_string_value_is_not_absent() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), String::new(), None);

        // An empty stored value must stay distinguishable from a miss
        assert_eq!(store.get("key1"), Some(String::new()));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_store_builtin_name_keys() {
        let mut store = CacheStore::new();

        store.set("toString".to_string(), 1u32, None);
        store.set("constructor".to_string(), 2u32, None);

        assert_eq!(store.get("toString"), Some(1));
        assert_eq!(store.get("constructor"), Some(2));
        assert_eq!(store.get("hasOwnProperty"), None);
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), None);

        assert!(store.delete("key1"));
        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_delete_nonexistent_is_noop() {
        let mut store: CacheStore<String> = CacheStore::new();

        assert!(!store.delete("nonexistent"));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), None);
        store.set("key1".to_string(), "value2".to_string(), Some(30));

        assert_eq!(store.get("key1").as_deref(), Some("value2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), None);
        store.set("key2".to_string(), "value2".to_string(), Some(30));
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.get("key2"), None);
    }

    #[test]
    fn test_store_get_reclaims_stale_entry() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), Some(10));
        store.backdate("key1", 11_000);

        // The stale hit is treated as absent and removed from storage
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_contains_does_not_touch() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), Some(10));
        store.backdate("key1", 9_500);

        // Probing does not slide the deadline, so the entry stays near expiry
        assert!(store.contains("key1"));
        store.backdate("key1", 1_000);
        assert!(!store.contains("key1"));
    }

    #[test]
    fn test_store_get_slides_deadline() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), Some(10));
        store.backdate("key1", 9_500);

        // A read refreshes last_used, putting the deadline 10s out again
        assert_eq!(store.get("key1").as_deref(), Some("value1"));
        store.backdate("key1", 9_500);
        assert!(store.contains("key1"));
    }

    #[test]
    fn test_sweep_removes_expired_and_counts_pending() {
        let mut store = CacheStore::new();

        store.set("gone".to_string(), "a".to_string(), Some(1));
        store.set("kept".to_string(), "b".to_string(), Some(60));
        store.set("forever".to_string(), "c".to_string(), None);
        store.backdate("gone", 2_000);

        let report = store.sweep_expired();

        assert_eq!(report, SweepReport { removed: 1, pending: 1 });
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("gone"), None);
        assert_eq!(store.get("kept").as_deref(), Some("b"));
        assert_eq!(store.get("forever").as_deref(), Some("c"));
    }

    #[test]
    fn test_sweep_skips_permanent_entries() {
        let mut store = CacheStore::new();

        store.set("forever1".to_string(), 1u32, None);
        store.set("forever2".to_string(), 2u32, Some(0));

        let report = store.sweep_expired();

        // Permanent entries survive and never count as pending deadlines
        assert_eq!(report, SweepReport { removed: 0, pending: 0 });
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sweep_empty_store() {
        let mut store: CacheStore<String> = CacheStore::new();

        let report = store.sweep_expired();

        assert_eq!(report, SweepReport { removed: 0, pending: 0 });
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), None);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
