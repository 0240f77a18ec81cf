//! Cursor over an immutable snapshot of a sequence.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::{Cursor, CursorState};
use crate::error::{CollectionError, CollectionResult};
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// Walks a shared, immutable snapshot of a sequence.
///
/// The snapshot is an `Arc` taken from the source when the cursor is
/// created; later changes to the source are not observed. The cursor holds
/// the `Arc` until it is disposed (or dropped), which is what lets the
/// owning collection write in place again.
///
pub struct SnapshotCursor<T> {
    items: Option<Arc<VecDeque<T>>>,
    position: usize,
    state: CursorState,
}

impl<T> SnapshotCursor<T> {
    pub fn new(items: Arc<VecDeque<T>>) -> Self {
        trace!(len = items.len(), "snapshot cursor created");
        SnapshotCursor {
            items: Some(items),
            position: 0,
            state: CursorState::Created,
        }
    }

    /// Number of items the cursor has not reached yet.
    pub fn remaining(&self) -> usize {
        let len = self.items.as_ref().map_or(0, |items| items.len());
        match self.state {
            CursorState::Created => len,
            CursorState::Active => len - self.position - 1,
            CursorState::Exhausted | CursorState::Disposed => 0,
        }
    }

    fn release(&mut self) {
        if self.state == CursorState::Disposed {
            return;
        }

        // Drop our handle on the snapshot.
        //
        self.items = None;
        self.state = CursorState::Disposed;
        trace!("snapshot cursor disposed");
    }
}

impl<T: Clone> Cursor for SnapshotCursor<T> {
    type Item = T;

    fn state(&self) -> CursorState {
        self.state
    }

    async fn advance(&mut self, signal: CancellationSignal<'_>) -> bool {
        if signal.is_cancelled() {
            return false;
        }

        let next = match self.state {
            CursorState::Created => 0,
            CursorState::Active => self.position + 1,
            CursorState::Exhausted | CursorState::Disposed => return false,
        };

        let len = self.items.as_ref().map_or(0, |items| items.len());
        if next < len {
            self.position = next;
            self.state = CursorState::Active;
            true
        } else {
            self.state = CursorState::Exhausted;
            false
        }
    }

    async fn current(&self, signal: CancellationSignal<'_>) -> CollectionResult<T> {
        signal.check()?;

        if self.state != CursorState::Active {
            return Err(CollectionError::NotInitialized);
        }

        self.items
            .as_ref()
            .and_then(|items| items.get(self.position))
            .cloned()
            .ok_or(CollectionError::NotInitialized)
    }

    fn dispose(&mut self) {
        self.release();
    }
}

impl<T> Drop for SnapshotCursor<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for SnapshotCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotCursor")
            .field("state", &self.state)
            .field("position", &self.position)
            .field("remaining", &self.remaining())
            .finish()
    }
}
