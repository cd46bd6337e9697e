//! Round result snapshot

use std::sync::Arc;

use crate::selectable::Selectable;

/// Immutable snapshot of the items chosen in one selection round.
///
/// The item sequence may be empty but is never absent: an empty round and
/// "no round occurred" are distinct states, so the sequence is always
/// present. Subscribers receive a read-only view.
#[derive(Debug)]
pub struct SelectionNotification<T> {
    items: Vec<Arc<T>>,
}

impl<T: Selectable> SelectionNotification<T> {
    /// Snapshot a sequence of chosen items.
    ///
    /// The sequence is copied at construction, so later mutation of the
    /// source collection does not reach the notification.
    pub fn new(items: impl IntoIterator<Item = Arc<T>>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// A round that chose nothing
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Normalize an absent sequence to an empty round.
    pub fn from_optional(items: Option<Vec<Arc<T>>>) -> Self {
        match items {
            Some(items) => Self::new(items),
            None => Self::empty(),
        }
    }

    /// Chosen items, in selection order
    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Selectable> Default for SelectionNotification<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Clone for SelectionNotification<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}
