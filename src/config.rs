//! Configuration Module
//!
//! Sweep scheduling configuration with environment-variable overrides.

use std::env;
use std::time::Duration;

/// Default interval between sweep cycles, in milliseconds.
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 1000;

/// Cache configuration parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// One-shot sweep timer duration in milliseconds. Each armed sweep
    /// fires once after this long; a shorter interval tightens the window
    /// in which an unread stale entry can linger in storage.
    pub sweep_interval_ms: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment
    /// variables, falling back to defaults.
    ///
    /// # Environment Variables
    /// - `MEMO_SWEEP_INTERVAL_MS` - Sweep timer duration in milliseconds
    ///   (default: 1000)
    pub fn from_env() -> Self {
        Self {
            sweep_interval_ms: env::var("MEMO_SWEEP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_MS),
        }
    }

    /// Sweep interval as a `Duration` for the tokio timer.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
        }
    }
}
