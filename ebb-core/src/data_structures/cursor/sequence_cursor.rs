use super::{Cursor, CursorState, EmptyCursor, SnapshotCursor};
use crate::error::CollectionResult;
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// The cursor handed out by the in-crate sources.
///
/// Either the zero-sized empty sentinel or a snapshot walker, so callers
/// never need to check whether a cursor exists at all.
#[derive(Debug)]
pub enum SequenceCursor<T> {
    Empty(EmptyCursor<T>),
    Snapshot(SnapshotCursor<T>),
}

impl<T> SequenceCursor<T> {
    pub const fn empty() -> Self {
        SequenceCursor::Empty(EmptyCursor::new())
    }
}

impl<T> From<SnapshotCursor<T>> for SequenceCursor<T> {
    fn from(cursor: SnapshotCursor<T>) -> Self {
        SequenceCursor::Snapshot(cursor)
    }
}

impl<T: Clone> Cursor for SequenceCursor<T> {
    type Item = T;

    fn state(&self) -> CursorState {
        match self {
            SequenceCursor::Empty(cursor) => cursor.state(),
            SequenceCursor::Snapshot(cursor) => cursor.state(),
        }
    }

    async fn advance(&mut self, signal: CancellationSignal<'_>) -> bool {
        match self {
            SequenceCursor::Empty(cursor) => cursor.advance(signal).await,
            SequenceCursor::Snapshot(cursor) => cursor.advance(signal).await,
        }
    }

    async fn current(&self, signal: CancellationSignal<'_>) -> CollectionResult<T> {
        match self {
            SequenceCursor::Empty(cursor) => cursor.current(signal).await,
            SequenceCursor::Snapshot(cursor) => cursor.current(signal).await,
        }
    }

    fn dispose(&mut self) {
        match self {
            SequenceCursor::Empty(cursor) => cursor.dispose(),
            SequenceCursor::Snapshot(cursor) => cursor.dispose(),
        }
    }
}
