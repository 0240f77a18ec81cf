//! Reader/writer locked FIFO queue.
//!
//! # Locking
//!
//! A single `RwLock` guards the backing deque. `count`, `peek`, `contains`
//! and cursor creation take the read lock and may run together; `enqueue`,
//! `dequeue` and `clear` take the write lock and exclude everything else.
//! Locks are held only for the duration of one operation.
//!
//! # Snapshots
//!
//! The deque lives behind an `Arc`. A cursor clones the `Arc` under the read
//! lock, which is its snapshot:
//!
//! ```text
//!   RwLock ──► Arc<VecDeque<T>> ◄── SnapshotCursor (clone of the Arc)
//!
//!   writer, no cursor alive:  strong_count == 1 → mutate in place
//!   writer, cursor alive:     strong_count  > 1 → clone deque, then mutate
//!   clear, cursor alive:      swap in a fresh empty deque (no clone)
//! ```
//!
//! A cursor therefore never observes items enqueued after it was created
//! and is unaffected by concurrent `dequeue` or `clear`.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use super::AsyncQueue;
use crate::data_structures::cursor::{SequenceCursor, SnapshotCursor};
use crate::data_structures::traversable::{Countable, Traversable};
use crate::error::{CollectionError, CollectionResult};
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// A thread-safe FIFO queue.
///
/// Share it between threads with an `Arc`; every operation takes `&self`.
pub struct ConcurrentQueue<T> {
    items: RwLock<Arc<VecDeque<T>>>,
}

impl<T> ConcurrentQueue<T> {
    pub fn new() -> Self {
        Self::from_deque(VecDeque::new())
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_deque(VecDeque::with_capacity(capacity))
    }

    fn from_deque(items: VecDeque<T>) -> Self {
        ConcurrentQueue {
            items: RwLock::new(Arc::new(items)),
        }
    }
}

impl<T: Clone> ConcurrentQueue<T> {
    /// Returns true if an item equal to `item` is queued.
    ///
    /// Fails with `Cancelled` if `signal` is already cancelled.
    pub async fn contains(&self, item: &T, signal: CancellationSignal<'_>) -> CollectionResult<bool>
    where
        T: PartialEq,
    {
        signal.check()?;

        let items = self.items.read();
        Ok(items.contains(item))
    }
}

impl<T: Clone> Countable for ConcurrentQueue<T> {
    async fn count(&self, signal: CancellationSignal<'_>) -> CollectionResult<u64> {
        signal.check()?;

        let items = self.items.read();
        Ok(items.len() as u64)
    }
}

impl<T: Clone> Traversable for ConcurrentQueue<T> {
    type Item = T;
    type Cursor = SequenceCursor<T>;

    async fn cursor(&self, signal: CancellationSignal<'_>) -> SequenceCursor<T> {
        if signal.is_cancelled() {
            trace!("cursor requested under a cancelled signal, returning empty cursor");
            return SequenceCursor::empty();
        }

        // Snapshot the current deque. The lock is released before the
        // cursor is handed out.
        //
        let snapshot = Arc::clone(&*self.items.read());
        SnapshotCursor::new(snapshot).into()
    }
}

impl<T: Clone> AsyncQueue for ConcurrentQueue<T> {
    async fn enqueue(&self, item: T, signal: CancellationSignal<'_>) -> bool {
        if signal.is_cancelled() {
            return false;
        }

        let mut items = self.items.write();
        Arc::make_mut(&mut *items).push_back(item);
        true
    }

    async fn dequeue(&self, signal: CancellationSignal<'_>) -> CollectionResult<T> {
        signal.check()?;

        let mut items = self.items.write();

        // Check before make_mut so an empty queue never forces a copy.
        //
        if items.is_empty() {
            return Err(CollectionError::EmptyQueue);
        }

        Arc::make_mut(&mut *items)
            .pop_front()
            .ok_or(CollectionError::EmptyQueue)
    }

    async fn peek(&self, signal: CancellationSignal<'_>) -> CollectionResult<T> {
        signal.check()?;

        let items = self.items.read();
        items.front().cloned().ok_or(CollectionError::EmptyQueue)
    }

    async fn clear(&self, signal: CancellationSignal<'_>) -> bool {
        if signal.is_cancelled() {
            return false;
        }

        let mut items = self.items.write();
        let cleared = items.len();

        match Arc::get_mut(&mut *items) {
            Some(owned) => owned.clear(),
            None => {
                // A cursor still holds the snapshot; leave it untouched.
                //
                *items = Arc::new(VecDeque::new());
            }
        }

        debug!(cleared, "queue cleared");
        true
    }
}

impl<T> Default for ConcurrentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<VecDeque<T>> for ConcurrentQueue<T> {
    fn from(items: VecDeque<T>) -> Self {
        Self::from_deque(items)
    }
}

impl<T> From<Vec<T>> for ConcurrentQueue<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_deque(items.into())
    }
}

impl<T> FromIterator<T> for ConcurrentQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_deque(iter.into_iter().collect())
    }
}

impl<T> fmt::Debug for ConcurrentQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentQueue")
            .field("len", &self.items.read().len())
            .finish()
    }
}
