//! Cache Handle Module
//!
//! `MemoCache` is the public face of the crate: a cloneable handle over the
//! shared store plus the sweep scheduling that keeps expired entries from
//! accumulating.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::tasks::SweepState;

// == Memo Cache ==
/// In-process key-value cache with sliding per-entry TTL.
///
/// Values are opaque to the cache and returned by clone; wrap large
/// payloads in `Arc` if cloning is a concern. Every operation is total:
/// absence is signaled with `None`, never an error.
///
/// Cloning the handle shares the underlying store, so the cache can be
/// handed to the tasks that need it, the same way a shared app state would
/// be.
#[derive(Debug)]
pub struct MemoCache<V> {
    /// Shared storage, mutated only through this handle and the sweep task
    store: Arc<RwLock<CacheStore<V>>>,
    /// Sweep arming state (at most one pending sweep)
    sweep: Arc<SweepState>,
    /// One-shot sweep timer duration
    sweep_interval: Duration,
}

impl<V> Clone for MemoCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            sweep: Arc::clone(&self.sweep),
            sweep_interval: self.sweep_interval,
        }
    }
}

impl<V> Default for MemoCache<V>
where
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MemoCache<V>
where
    V: Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates an empty cache with the default configuration (1s sweep
    /// interval).
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with the given configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new())),
            sweep: Arc::new(SweepState::new()),
            sweep_interval: config.sweep_interval(),
        }
    }

    // == Get ==
    /// Retrieves the value for `key`, or `None` if the key was never set,
    /// was deleted, or its entry is no longer live.
    ///
    /// A successful read bumps the entry's `last_used`, sliding its
    /// deadline forward. A stale entry found here is removed immediately,
    /// so an expired value is never observable as live even before the next
    /// sweep runs.
    pub async fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.store.write().await.get(key)
    }

    // == Set ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// `ttl_secs` of `None` or `Some(0)` stores a permanent entry. Every
    /// call requests sweep arming; the request is ignored while a sweep is
    /// already pending.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl_secs: Option<u64>) {
        self.store.write().await.set(key.into(), value, ttl_secs);
        self.sweep.arm(&self.store, self.sweep_interval).await;
    }

    // == Delete ==
    /// Removes the entry for `key` if present. Returns whether an entry was
    /// removed; deleting a missing key is a no-op.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    // == Clear ==
    /// Discards all entries. A sweep already pending is left alone; it will
    /// find nothing to reclaim and go idle.
    pub async fn clear(&self) {
        self.store.write().await.clear();
        debug!("cache cleared");
    }

    // == Contains ==
    /// Liveness-aware existence check that does not extend the entry's
    /// life.
    pub async fn contains(&self, key: &str) -> bool {
        self.store.read().await.contains(key)
    }

    // == Length ==
    /// Number of entries currently in storage, including any stale entries
    /// the sweep has not yet reclaimed.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Snapshot of hit/miss/expiration counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Sweep Armed ==
    /// Returns true while a sweep cycle is scheduled. Useful for verifying
    /// that an idle cache holds no pending timer.
    pub async fn sweep_armed(&self) -> bool {
        self.sweep.is_armed().await
    }

    // == Shutdown ==
    /// Cancels a pending sweep so a cache discarded mid-lifetime leaves no
    /// scheduled callback behind. The store itself needs no teardown.
    ///
    /// Calling this is optional: an un-shutdown cache's orphaned timer
    /// exits on its next fire once the last handle is dropped.
    pub async fn shutdown(&self) {
        self.sweep.shutdown().await;
    }
}
