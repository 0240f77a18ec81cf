//! Source traits for cursor-based traversal.
//!
//! Any type that can hand out a [`Cursor`] is [`Traversable`]; the
//! traversal algorithms in [`crate::data_structures::traversal`] are
//! written against this trait alone.

use crate::data_structures::cursor::Cursor;
use crate::error::CollectionResult;
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// A source capable of creating cursors over its items.
///
#[allow(async_fn_in_trait)]
pub trait Traversable {
    /// The type of the items being traversed.
    type Item;

    /// The cursor type handed out by this source.
    type Cursor: Cursor<Item = Self::Item>;

    /// Creates a cursor.
    ///
    /// Under an already cancelled signal the returned cursor is an empty
    /// sentinel whose `advance` is immediately false.
    async fn cursor(&self, signal: CancellationSignal<'_>) -> Self::Cursor;
}

/// A source capable of counting its items.
///
#[allow(async_fn_in_trait)]
pub trait Countable {
    /// Returns the number of items.
    ///
    /// Fails with `Cancelled` if `signal` is already cancelled.
    async fn count(&self, signal: CancellationSignal<'_>) -> CollectionResult<u64>;
}
