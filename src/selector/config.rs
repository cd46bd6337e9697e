//! Selection configuration contract

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::selectable::Selectable;
use crate::signal::{Latch, Trigger};

/// Policy contract a host supplies to drive a selector.
///
/// Pure data: the consumer validates `items_to_select` and
/// `max_selects_per_item` when the selector is constructed; implementations
/// do not self-validate, so constructing a configuration with out-of-range
/// values does not fail on its own. Immutable for the lifetime of one
/// selector run; owned by the host.
pub trait SelectionConfig<T: Selectable>: Send + Sync {
    /// How many items one round should select. Must be greater than 0.
    fn items_to_select(&self) -> usize;

    /// Ceiling on any single item's selection count; items at the ceiling
    /// are excluded from future rounds. Must be greater than 0.
    fn max_selects_per_item(&self) -> u32;

    /// Signal that it is time for a round. User- or timer-driven.
    fn selection_frequency(&self) -> &Trigger;

    /// Signal that the loop should end permanently. Time-based,
    /// count-based, or user-driven.
    fn halting_criteria(&self) -> &Latch;

    /// Candidate items - the whole pool or a previously-filtered remainder.
    /// May be empty: a round over an empty source is an empty round, not an
    /// error.
    fn items_source(&self) -> &[Arc<T>];
}

/// Plain-data [`SelectionConfig`] for the common case.
pub struct StaticConfig<T> {
    items_to_select: usize,
    max_selects_per_item: u32,
    selection_frequency: Trigger,
    halting_criteria: Latch,
    items: Vec<Arc<T>>,
}

impl<T: Selectable> StaticConfig<T> {
    pub fn new(
        items_to_select: usize,
        max_selects_per_item: u32,
        selection_frequency: Trigger,
        halting_criteria: Latch,
        items: Vec<Arc<T>>,
    ) -> Self {
        Self {
            items_to_select,
            max_selects_per_item,
            selection_frequency,
            halting_criteria,
            items,
        }
    }
}

impl<T: Selectable> SelectionConfig<T> for StaticConfig<T> {
    fn items_to_select(&self) -> usize {
        self.items_to_select
    }

    fn max_selects_per_item(&self) -> u32 {
        self.max_selects_per_item
    }

    fn selection_frequency(&self) -> &Trigger {
        &self.selection_frequency
    }

    fn halting_criteria(&self) -> &Latch {
        &self.halting_criteria
    }

    fn items_source(&self) -> &[Arc<T>] {
        &self.items
    }
}

/// Loop tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorOptions {
    /// Upper bound on a single wait, in milliseconds. Keeps the loop
    /// responsive to stop requests even with no signal activity.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    500
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
        }
    }
}

impl SelectorOptions {
    /// Get the poll interval as a Duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
