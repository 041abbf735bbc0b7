//! Expiry Sweep Task
//!
//! Lazily-armed background task that reclaims expired cache entries in
//! batches, instead of scheduling one timer per entry.
//!
//! Arming is requested on every `set` and is idempotent: at most one sweep
//! is pending at any time. When the timer fires, the task clears the armed
//! flag, scans the whole store once, and re-arms itself only while entries
//! with a deadline remain. A cache holding only permanent entries lets the
//! sweep go idle after at most one cycle.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheStore;

// == Sweep State ==
/// Arming state shared between the cache facade and the sweep task.
#[derive(Debug, Default)]
pub(crate) struct SweepState {
    slot: Mutex<SweepSlot>,
}

#[derive(Debug, Default)]
struct SweepSlot {
    /// True while a sweep cycle is scheduled
    armed: bool,
    /// Handle to the pending task, kept so `shutdown` can abort it
    task: Option<JoinHandle<()>>,
}

impl SweepState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // == Arm ==
    /// Schedules a one-shot sweep cycle unless one is already pending.
    ///
    /// The spawned task holds only a `Weak` reference to the store, so a
    /// cache dropped without `shutdown` lets the orphaned timer exit on its
    /// next fire instead of keeping the store alive.
    pub(crate) async fn arm<V>(
        self: &Arc<Self>,
        store: &Arc<RwLock<CacheStore<V>>>,
        interval: Duration,
    ) where
        V: Send + Sync + 'static,
    {
        let mut slot = self.slot.lock().await;
        if slot.armed {
            return;
        }
        slot.armed = true;

        let state = Arc::clone(self);
        let store = Arc::downgrade(store);
        slot.task = Some(tokio::spawn(run_sweep(state, store, interval)));
        debug!(interval_ms = interval.as_millis() as u64, "sweep armed");
    }

    // == Is Armed ==
    /// Returns true while a sweep cycle is scheduled.
    pub(crate) async fn is_armed(&self) -> bool {
        self.slot.lock().await.armed
    }

    // == Shutdown ==
    /// Aborts a pending sweep task and disarms. Safe to call when no sweep
    /// is pending.
    pub(crate) async fn shutdown(&self) {
        let mut slot = self.slot.lock().await;
        slot.armed = false;
        if let Some(task) = slot.task.take() {
            task.abort();
            debug!("pending sweep aborted");
        }
    }
}

// == Sweep Loop ==
/// Body of the scheduled sweep. Each loop iteration is one armed cycle:
/// sleep for the interval, disarm, scan, then either re-arm (continue) or
/// go idle (return).
async fn run_sweep<V>(state: Arc<SweepState>, store: Weak<RwLock<CacheStore<V>>>, interval: Duration)
where
    V: Send + Sync + 'static,
{
    loop {
        tokio::time::sleep(interval).await;

        // The timer has fired: free the slot so a new arming request
        // (including this task's own re-arm below) can schedule the next
        // cycle.
        state.slot.lock().await.armed = false;

        let Some(store) = store.upgrade() else {
            debug!("cache dropped, sweep exiting");
            return;
        };

        let report = {
            let mut store = store.write().await;
            store.sweep_expired()
        };

        if report.removed > 0 {
            debug!(removed = report.removed, "sweep reclaimed expired entries");
        }

        if report.pending == 0 {
            debug!("no deadlines remain, sweep going idle");
            return;
        }

        // Deadlines remain: re-arm for another cycle. If a concurrent `set`
        // armed first, its task is the pending sweep and this one exits,
        // preserving the at-most-one-pending invariant.
        let mut slot = state.slot.lock().await;
        if slot.armed {
            return;
        }
        slot.armed = true;
    }
}
