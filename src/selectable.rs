//! Selectable item capability
//!
//! An item that can be chosen by the selection loop exposes two things: how
//! many times it has been chosen, and a way to record one more choice. The
//! trait carries the counting and hook ordering; implementors only supply
//! the storage.

use std::sync::atomic::{AtomicU32, Ordering};

/// Count store for a selectable item.
///
/// The count only moves up, one [`record`](SelectionTally::record) at a
/// time. The increment is a single atomic RMW, so concurrent readers never
/// observe a partial update. No ordering beyond the count itself is
/// promised; richer host-side item state needs the host's own
/// synchronization.
#[derive(Debug, Default)]
pub struct SelectionTally {
    count: AtomicU32,
}

impl SelectionTally {
    /// New tally starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// New tally starting at `initial`, e.g. restored host state
    pub fn with_count(initial: u32) -> Self {
        Self {
            count: AtomicU32::new(initial),
        }
    }

    /// Current count
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }

    /// Increment by exactly one, returning the new count
    pub fn record(&self) -> u32 {
        self.count.fetch_add(1, Ordering::AcqRel) + 1
    }
}

/// Capability contract for items in a selection pool.
///
/// An item has no concept of "already at the limit" - excluding items that
/// reached their ceiling is the selector's job, which keeps items reusable
/// across different selection policies.
pub trait Selectable: Send + Sync {
    /// The item's count store
    fn tally(&self) -> &SelectionTally;

    /// Number of times this item has been selected
    fn selected_count(&self) -> u32 {
        self.tally().count()
    }

    /// Hook invoked after each selection, once the count is updated.
    /// No default behavior.
    fn on_selected(&self) {}

    /// Record one selection: increment the count, then run the hook.
    ///
    /// Infallible and callable any number of times.
    fn mark_selected(&self) {
        self.tally().record();
        self.on_selected();
    }
}
