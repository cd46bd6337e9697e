//! Selector implementation

use std::sync::Arc;

use eyre::{Result, eyre};
use tracing::{debug, info, trace};

use crate::arg::{self, ArgError};
use crate::policy::{SelectionPolicy, UniformRandom};
use crate::selectable::Selectable;
use crate::signal::Latch;

use super::config::{SelectionConfig, SelectorOptions};
use super::notification::SelectionNotification;

/// Callback invoked once per completed round, on the loop's own task.
pub type Subscriber<T> = Box<dyn FnMut(&SelectionNotification<T>) -> Result<()> + Send>;

/// Lifecycle of a [`Selector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// Constructed, loop not yet started
    Idle,
    /// Loop active
    Running,
    /// Loop exited cleanly, via the halting criteria or a stop request
    Stopped,
    /// Loop terminated by an escaped round or subscriber failure
    Failed,
}

/// Counters over a selector's lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorStats {
    pub rounds_completed: u64,
    pub items_selected: u64,
    pub empty_rounds: u64,
}

/// Cloneable handle for stopping a running [`Selector`] from another task
/// or thread.
#[derive(Clone, Debug)]
pub struct StopHandle {
    latch: Latch,
}

impl StopHandle {
    /// Request the loop to stop. Idempotent; a no-op once the loop has
    /// already terminated.
    pub fn stop(&self) {
        self.latch.set();
    }
}

/// The scheduling engine: waits on the configured cadence, runs selection
/// rounds, and terminates on the halting criteria or a stop request.
///
/// A selector runs its loop at most once. The two clean termination causes
/// are not distinguished to subscribers.
pub struct Selector<T: Selectable, C: SelectionConfig<T>> {
    config: C,
    options: SelectorOptions,
    policy: Box<dyn SelectionPolicy<T>>,
    subscribers: Vec<Subscriber<T>>,
    stop: Latch,
    state: SelectorState,
    stats: SelectorStats,
}

impl<T, C> Selector<T, C>
where
    T: Selectable,
    C: SelectionConfig<T>,
{
    /// Build a selector over `config`, with [`UniformRandom`] as the policy
    /// and default options.
    ///
    /// An absent config and non-positive bounds are rejected here, up
    /// front; nothing is deferred into the loop.
    pub fn new(config: impl Into<Option<C>>) -> Result<Self, ArgError> {
        let config = arg::required(config.into(), "config")?;
        arg::ensure(config.items_to_select() > 0, "items_to_select", "must be greater than 0")?;
        arg::ensure(
            config.max_selects_per_item() > 0,
            "max_selects_per_item",
            "must be greater than 0",
        )?;

        debug!(
            items_to_select = config.items_to_select(),
            max_selects_per_item = config.max_selects_per_item(),
            items = config.items_source().len(),
            "selector created"
        );

        Ok(Self {
            config,
            options: SelectorOptions::default(),
            policy: Box::new(UniformRandom),
            subscribers: Vec::new(),
            stop: Latch::new(),
            state: SelectorState::Idle,
            stats: SelectorStats::default(),
        })
    }

    /// Replace the round-selection policy.
    pub fn with_policy(mut self, policy: impl SelectionPolicy<T> + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replace the loop tuning options.
    pub fn with_options(mut self, options: SelectorOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a round listener.
    ///
    /// Listeners run synchronously on the loop's task, in registration
    /// order, once per completed round. A listener error is not caught
    /// here: it propagates out of [`run`](Selector::run) and ends the loop.
    /// With no listeners registered a round is still performed and its
    /// notification is dropped.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&SelectionNotification<T>) -> Result<()> + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Handle for stopping the loop while [`run`](Selector::run) holds this
    /// selector.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            latch: self.stop.clone(),
        }
    }

    /// Request the loop to stop.
    ///
    /// Idempotent and sticky: effective even before [`run`](Selector::run)
    /// starts, in which case the loop performs zero rounds; a no-op after
    /// the loop has terminated.
    pub fn stop(&self) {
        self.stop.set();
    }

    /// Current lifecycle state
    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Lifetime counters
    pub fn stats(&self) -> SelectorStats {
        self.stats
    }

    /// Drive the selection loop until the halting criteria fire, a stop is
    /// requested, or a round fails.
    ///
    /// Intended to be spawned on a dedicated task; the loop's only
    /// suspension point is its bounded wait, so a stop request is observed
    /// within one poll interval even with no signal activity. Runs at most
    /// once per selector: a second call fails without re-entering the loop.
    pub async fn run(&mut self) -> Result<()> {
        if self.state != SelectorState::Idle {
            return Err(eyre!("selector loop already ran (state: {:?})", self.state));
        }
        self.state = SelectorState::Running;

        let cadence = self.config.selection_frequency().clone();
        let halting = self.config.halting_criteria().clone();
        let stop = self.stop.clone();
        let poll_interval = self.options.poll_interval();

        info!(
            items = self.config.items_source().len(),
            items_to_select = self.config.items_to_select(),
            max_selects_per_item = self.config.max_selects_per_item(),
            "selector loop started"
        );

        loop {
            // Fixed priority when several are ready at once: cadence, then
            // halting, then stop, then the keep-alive tick.
            tokio::select! {
                biased;

                _ = cadence.triggered() => {
                    if let Err(e) = self.run_round() {
                        self.state = SelectorState::Failed;
                        return Err(e);
                    }
                }
                _ = halting.wait() => {
                    info!(rounds = self.stats.rounds_completed, "halting criteria met");
                    break;
                }
                _ = stop.wait() => {
                    info!(rounds = self.stats.rounds_completed, "stop requested");
                    break;
                }
                _ = tokio::time::sleep(poll_interval) => {
                    trace!("keep-alive tick");
                }
            }
        }

        self.state = SelectorState::Stopped;
        Ok(())
    }

    /// One selection round: filter, pick, mark, notify.
    fn run_round(&mut self) -> Result<()> {
        let max = self.config.max_selects_per_item();
        let eligible: Vec<Arc<T>> = self
            .config
            .items_source()
            .iter()
            .filter(|item| item.selected_count() < max)
            .cloned()
            .collect();

        let chosen = self.policy.pick(&eligible, self.config.items_to_select())?;
        debug_assert!(chosen.len() <= self.config.items_to_select());

        // Every chosen item is marked before any subscriber sees the round
        for item in &chosen {
            item.mark_selected();
        }

        let notification = SelectionNotification::new(chosen);
        self.stats.rounds_completed += 1;
        self.stats.items_selected += notification.len() as u64;
        if notification.is_empty() {
            self.stats.empty_rounds += 1;
        }

        debug!(
            round = self.stats.rounds_completed,
            eligible = eligible.len(),
            chosen = notification.len(),
            "selection round complete"
        );

        for subscriber in &mut self.subscribers {
            subscriber(&notification)?;
        }

        Ok(())
    }
}
