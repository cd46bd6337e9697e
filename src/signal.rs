//! Loop wakeup signals
//!
//! [`Trigger`] is the edge signal that drives selection rounds; [`Latch`]
//! is the sticky signal behind halting criteria and stop requests. Both are
//! cheap cloneable handles over shared state, so the host can keep one end
//! and hand the other to a configuration.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;
use tracing::debug;

/// Edge-triggered wakeup: one [`fire`](Trigger::fire) wakes one
/// [`triggered`](Trigger::triggered) wait.
///
/// A fire with no waiter is remembered, so a round requested just before
/// the loop reaches its wait is not lost. Repeated fires before the wait is
/// serviced coalesce into a single pending wakeup.
#[derive(Clone, Debug, Default)]
pub struct Trigger {
    notify: Arc<Notify>,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request one wakeup. Callable from any task or thread.
    pub fn fire(&self) {
        self.notify.notify_one();
    }

    /// Wait for the next fire.
    pub async fn triggered(&self) {
        self.notify.notified().await;
    }

    /// Timer-driven trigger: fires every `period`.
    ///
    /// Spawns a timer task, so this must be called within a tokio runtime.
    /// The task exits once every handle to the trigger has been dropped.
    pub fn every(period: Duration) -> Self {
        let trigger = Self::new();
        let weak = Arc::downgrade(&trigger.notify);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately; the first fire should
            // land one full period from now.
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(notify) = weak.upgrade() else { break };
                notify.notify_one();
            }
            debug!(?period, "all trigger handles dropped, timer task exiting");
        });

        trigger
    }
}

/// Sticky signal: once set, stays set, and every past or future
/// [`wait`](Latch::wait) observes it.
#[derive(Clone, Debug, Default)]
pub struct Latch {
    inner: Arc<LatchInner>,
}

#[derive(Debug, Default)]
struct LatchInner {
    set: AtomicBool,
    notify: Notify,
}

impl LatchInner {
    fn engage(&self) {
        self.set.store(true, Ordering::Release);
        self.notify.notify_waiters();
    }
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latch. Idempotent; callable from any task or thread.
    pub fn set(&self) {
        self.inner.engage();
    }

    /// Whether the latch has been set
    pub fn is_set(&self) -> bool {
        self.inner.set.load(Ordering::Acquire)
    }

    /// Wait until the latch is set. Returns immediately if already set.
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register interest before re-checking, otherwise a set()
            // between the check and the await could be missed.
            notified.as_mut().enable();
            if self.is_set() {
                return;
            }
            notified.await;
        }
    }

    /// Time-based latch: sets itself after `delay`.
    ///
    /// Spawns a timer task, so this must be called within a tokio runtime.
    pub fn after(delay: Duration) -> Self {
        let latch = Self::new();
        let weak = Arc::downgrade(&latch.inner);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.engage();
            }
        });

        latch
    }
}
