//! Selection scheduling engine
//!
//! The [`Selector`] drives the loop: wait on the configured cadence, run a
//! selection round, notify subscribers, and exit when the halting criteria
//! or a stop request fire.

mod config;
mod core;
mod notification;

pub use config::{SelectionConfig, SelectorOptions, StaticConfig};
pub use core::{Selector, SelectorState, SelectorStats, StopHandle, Subscriber};
pub use notification::SelectionNotification;
