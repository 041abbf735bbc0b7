//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with an opaque value and expiry metadata.
///
/// The TTL is measured from `last_used`, which every successful read bumps
/// forward, so the entry's deadline slides with access rather than being
/// fixed at creation time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value (opaque to the cache)
    pub value: V,
    /// Timestamp of creation or last successful read (Unix milliseconds)
    pub last_used: u64,
    /// TTL in milliseconds measured from `last_used`, 0 = never expires
    pub expire_time_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with an optional TTL.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_secs` - Optional TTL in seconds; `None` or `Some(0)` means the
    ///   entry never expires
    pub fn new(value: V, ttl_secs: Option<u64>) -> Self {
        Self {
            value,
            last_used: current_timestamp_ms(),
            expire_time_ms: ttl_secs.unwrap_or(0).saturating_mul(1000),
        }
    }

    // == Is Live ==
    /// Checks whether the entry is still live.
    ///
    /// Boundary condition: an entry with a deadline is live while the current
    /// time is strictly before `last_used + expire_time_ms`; at that instant
    /// and after it, the entry counts as expired. Entries with
    /// `expire_time_ms == 0` are permanent and always live.
    pub fn is_live(&self) -> bool {
        self.is_live_at(current_timestamp_ms())
    }

    /// Liveness check against an explicit clock reading, so a sweep scanning
    /// many entries compares them all against the same instant.
    pub fn is_live_at(&self, now_ms: u64) -> bool {
        self.expire_time_ms == 0 || now_ms < self.last_used.saturating_add(self.expire_time_ms)
    }

    // == Touch ==
    /// Bumps `last_used` to the current time, sliding the entry's deadline
    /// forward. Called on every successful read.
    pub fn touch(&mut self) {
        self.last_used = current_timestamp_ms();
    }

    // == Has Deadline ==
    /// Returns true if the entry has a non-zero TTL and therefore
    /// participates in sweep scheduling.
    pub fn has_deadline(&self) -> bool {
        self.expire_time_ms != 0
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
