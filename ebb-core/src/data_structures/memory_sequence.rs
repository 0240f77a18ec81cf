//! Immutable in-memory traversable sequence.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::data_structures::cursor::{SequenceCursor, SnapshotCursor};
use crate::data_structures::traversable::{Countable, Traversable};
use crate::error::CollectionResult;
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// A fixed sequence of items that can be traversed any number of times.
///
/// Cloning is cheap; clones share the same items.
pub struct MemorySequence<T> {
    items: Arc<VecDeque<T>>,
}

impl<T> MemorySequence<T> {
    /// An empty sequence.
    pub fn empty() -> Self {
        MemorySequence {
            items: Arc::new(VecDeque::new()),
        }
    }

    /// A sequence of the given items, in order.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Traversable for MemorySequence<T> {
    type Item = T;
    type Cursor = SequenceCursor<T>;

    async fn cursor(&self, signal: CancellationSignal<'_>) -> SequenceCursor<T> {
        if signal.is_cancelled() {
            return SequenceCursor::empty();
        }

        SnapshotCursor::new(Arc::clone(&self.items)).into()
    }
}

impl<T> Countable for MemorySequence<T> {
    async fn count(&self, signal: CancellationSignal<'_>) -> CollectionResult<u64> {
        signal.check()?;
        Ok(self.items.len() as u64)
    }
}

impl<T> Clone for MemorySequence<T> {
    fn clone(&self) -> Self {
        MemorySequence {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for MemorySequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for MemorySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MemorySequence {
            items: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl<T> From<Vec<T>> for MemorySequence<T> {
    fn from(items: Vec<T>) -> Self {
        MemorySequence {
            items: Arc::new(items.into()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MemorySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
