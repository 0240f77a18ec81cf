//! Mutable FIFO queues with cancellable operations.
//!
//! - [`AsyncQueue`] - The queue contract
//! - [`ConcurrentQueue`] - Reader/writer locked, copy-on-write implementation

mod concurrent_queue;

pub use concurrent_queue::ConcurrentQueue;

use crate::data_structures::traversable::{Countable, Traversable};
use crate::error::CollectionResult;
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// A first-in-first-out queue whose operations accept a cancellation signal.
///
/// Operations returning `bool` report a cancelled signal as `false` and
/// leave the queue untouched. Operations returning a value fail with
/// `Cancelled` instead.
///
#[allow(async_fn_in_trait)]
pub trait AsyncQueue: Traversable + Countable {
    /// Appends an item to the back of the queue.
    async fn enqueue(&self, item: Self::Item, signal: CancellationSignal<'_>) -> bool;

    /// Removes and returns the item at the front of the queue.
    ///
    /// Fails with `EmptyQueue` when there are no items.
    async fn dequeue(&self, signal: CancellationSignal<'_>) -> CollectionResult<Self::Item>;

    /// Returns the item at the front of the queue without removing it.
    ///
    /// Fails with `EmptyQueue` when there are no items.
    async fn peek(&self, signal: CancellationSignal<'_>) -> CollectionResult<Self::Item>;

    /// Removes all items. Returns true even if the queue was already empty.
    async fn clear(&self, signal: CancellationSignal<'_>) -> bool;
}
