//! Forward-only, single-pass cursors.
//!
//! A cursor walks a sequence through an explicit lifecycle:
//!
//! ```text
//!             advance() = true            advance() = true
//!   Created ───────────────────► Active ◄──────────────┐
//!      │                          │  └─────────────────┘
//!      │ advance() = false        │ advance() = false
//!      ▼                          ▼
//!   Exhausted ◄───────────────────┘
//!
//!   any state ──dispose()──► Disposed  (repeat dispose is a no-op)
//! ```
//!
//! A cancelled signal makes `advance` return false without changing state,
//! so a later call with a fresh signal can resume. `Exhausted` is terminal
//! for traversal but the cursor still owns its source until disposed.
//!
//! # Organization
//!
//! - [`Cursor`] - The cursor contract
//! - [`CursorGuard`] - Scoped ownership, disposes on drop
//! - [`EmptyCursor`] - Zero-sized, always exhausted sentinel
//! - [`SnapshotCursor`] - Walks an immutable snapshot of a sequence
//! - [`SequenceCursor`] - Tagged union of the two, returned by in-crate sources

mod empty_cursor;
mod sequence_cursor;
mod snapshot_cursor;

use std::ops::{Deref, DerefMut};

pub use empty_cursor::EmptyCursor;
pub use sequence_cursor::SequenceCursor;
pub use snapshot_cursor::SnapshotCursor;

use crate::error::CollectionResult;
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// Lifecycle state of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// Created, `advance` not yet successful.
    Created,
    /// Positioned on a valid item.
    Active,
    /// Moved past the last item.
    Exhausted,
    /// Released its source. Terminal.
    Disposed,
}

/// A forward-only, single-pass iteration handle.
///
/// A cursor is owned by one caller at a time and is not meant for
/// concurrent use; the sources that create cursors are.
///
#[allow(async_fn_in_trait)]
pub trait Cursor {
    /// The type of the items being traversed.
    type Item;

    /// Returns the current lifecycle state.
    fn state(&self) -> CursorState;

    /// Moves to the next item.
    ///
    /// Returns false without changing state if `signal` is cancelled, and
    /// false without consulting the source once the cursor is exhausted or
    /// disposed.
    async fn advance(&mut self, signal: CancellationSignal<'_>) -> bool;

    /// Returns the item at the present position.
    ///
    /// Fails with `Cancelled` if `signal` is cancelled, and with
    /// `NotInitialized` unless the cursor is `Active`.
    async fn current(&self, signal: CancellationSignal<'_>) -> CollectionResult<Self::Item>;

    /// Releases the underlying source. Idempotent.
    fn dispose(&mut self);

    fn is_exhausted(&self) -> bool {
        self.state() == CursorState::Exhausted
    }

    fn is_disposed(&self) -> bool {
        self.state() == CursorState::Disposed
    }
}

/// Owns a cursor and disposes it when dropped.
///
/// Traversal algorithms keep their cursor in a guard so it is released on
/// every exit path, including early returns and propagated errors.
///
pub struct CursorGuard<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> CursorGuard<C> {
    pub fn new(cursor: C) -> Self {
        CursorGuard { cursor }
    }
}

impl<C: Cursor> Deref for CursorGuard<C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        &self.cursor
    }
}

impl<C: Cursor> DerefMut for CursorGuard<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cursor
    }
}

impl<C: Cursor> Drop for CursorGuard<C> {
    fn drop(&mut self) {
        self.cursor.dispose();
    }
}
