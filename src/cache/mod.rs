//! Cache Module
//!
//! Provides in-process key-value caching with sliding TTL expiration.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::MemoCache;
pub use stats::CacheStats;
pub use store::{CacheStore, SweepReport};
