//! Round selection strategies
//!
//! The loop decides *when* a round happens; a [`SelectionPolicy`] decides
//! *which* of the eligible items the round picks.

use std::sync::Arc;

use eyre::Result;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::selectable::Selectable;

/// Strategy deciding which eligible items one round picks.
///
/// Contract: return at most `items_to_select` distinct items, all drawn
/// from `eligible`. The selector has already removed items at their
/// selection ceiling, so a policy never re-checks counts. A policy that
/// violates these bounds is a bug in the policy; the loop does not catch
/// it.
pub trait SelectionPolicy<T: Selectable>: Send {
    fn pick(&mut self, eligible: &[Arc<T>], items_to_select: usize) -> Result<Vec<Arc<T>>>;
}

/// Default policy: uniform sampling without replacement.
///
/// Picks `items_to_select` items uniformly at random from the eligible set,
/// or every eligible item when fewer remain.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandom;

impl<T: Selectable> SelectionPolicy<T> for UniformRandom {
    fn pick(&mut self, eligible: &[Arc<T>], items_to_select: usize) -> Result<Vec<Arc<T>>> {
        let mut rng = rand::rng();
        let chosen: Vec<Arc<T>> = eligible.choose_multiple(&mut rng, items_to_select).cloned().collect();

        debug!(eligible = eligible.len(), chosen = chosen.len(), "uniform pick");
        Ok(chosen)
    }
}
