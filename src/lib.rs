//! Drawloop - repeated-selection scheduling engine
//!
//! Drawloop repeatedly picks a subset of a pool of selectable items, tracks
//! per-item selection counts, and stops when a halting condition is met. A
//! host application (a raffle, a sampler, a rotation scheduler) supplies
//! the pool, the cadence, and the halting criteria, subscribes to round
//! notifications, and drives the loop on a dedicated task.
//!
//! # Core Concepts
//!
//! - **Rounds on demand**: each cadence fire triggers exactly one selection round
//! - **Counts on the items**: every item tracks how many times it was chosen
//! - **Bounded selection**: items at the per-item ceiling leave the candidate set
//! - **Clean termination**: halting criteria and stop requests end the loop identically
//!
//! # Modules
//!
//! - [`arg`] - argument precondition checks
//! - [`signal`] - loop wakeup signals (triggers and latches)
//! - [`selectable`] - the selectable-item capability
//! - [`policy`] - round selection strategies
//! - [`selector`] - the scheduling loop itself

pub mod arg;
pub mod policy;
pub mod selectable;
pub mod selector;
pub mod signal;

// Re-export commonly used types
pub use arg::ArgError;
pub use policy::{SelectionPolicy, UniformRandom};
pub use selectable::{Selectable, SelectionTally};
pub use selector::{
    SelectionConfig, SelectionNotification, Selector, SelectorOptions, SelectorState, SelectorStats, StaticConfig,
    StopHandle, Subscriber,
};
pub use signal::{Latch, Trigger};
