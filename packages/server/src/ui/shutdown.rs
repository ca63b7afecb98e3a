//! Graceful shutdown coordination for live sessions.
//!
//! Every WebSocket session registers itself and holds a [`SessionGuard`] for its
//! lifetime. On shutdown the coordinator flips a `watch` flag that sessions
//! select on, then waits (bounded by a grace period) for all guards to drop.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::sync::{Notify, watch};

pub struct ShutdownCoordinator {
    stopping: watch::Sender<bool>,
    active: Arc<AtomicUsize>,
    drained: Arc<Notify>,
}

/// Decrements the active session count when dropped
pub struct SessionGuard {
    active: Arc<AtomicUsize>,
    drained: Arc<Notify>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if self.active.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.drained.notify_waiters();
        }
    }
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (stopping, _) = watch::channel(false);
        Self {
            stopping,
            active: Arc::new(AtomicUsize::new(0)),
            drained: Arc::new(Notify::new()),
        }
    }

    /// Track a new session. The receiver turns `true` once shutdown starts.
    pub fn register(&self) -> (SessionGuard, watch::Receiver<bool>) {
        self.active.fetch_add(1, Ordering::AcqRel);
        let guard = SessionGuard {
            active: self.active.clone(),
            drained: self.drained.clone(),
        };
        (guard, self.stopping.subscribe())
    }

    pub fn active_sessions(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    pub fn is_stopping(&self) -> bool {
        *self.stopping.borrow()
    }

    /// Tell every registered session to close
    pub fn trigger(&self) {
        self.stopping.send_replace(true);
    }

    /// Wait until no session is active. Returns `false` if the grace period
    /// elapsed first.
    pub async fn wait_for_drain(&self, grace: Duration) -> bool {
        let drained = async {
            loop {
                // Registered before the check so a concurrent drop cannot be missed
                let notified = self.drained.notified();
                if self.active_sessions() == 0 {
                    return;
                }
                notified.await;
            }
        };
        tokio::time::timeout(grace, drained).await.is_ok()
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
