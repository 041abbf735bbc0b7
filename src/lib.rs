//! Memo Cache - an in-process key-value cache with sliding TTL
//!
//! Holds opaque values under string keys and reclaims entries whose
//! time-to-live has elapsed, using a single lazily-armed background sweep
//! instead of one timer per entry. Built for short-lived memoization and
//! session-style caching inside one process: no persistence, no capacity
//! eviction, no network surface.
//!
//! # Example
//! ```no_run
//! use memo_cache::MemoCache;
//!
//! # async fn demo() {
//! let cache = MemoCache::new();
//! cache.set("session", "token".to_string(), Some(30)).await;
//! assert_eq!(cache.get("session").await.as_deref(), Some("token"));
//! # }
//! ```

pub mod cache;
pub mod config;
mod tasks;

pub use cache::{CacheEntry, CacheStats, CacheStore, MemoCache, SweepReport};
pub use config::CacheConfig;
