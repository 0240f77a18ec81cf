use std::fmt;
use std::marker::PhantomData;

use super::{Cursor, CursorState};
use crate::error::{CollectionError, CollectionResult};
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// A zero-sized cursor over nothing.
///
/// Returned whenever a source is asked for a cursor under an already
/// cancelled signal, or when an explicitly empty sequence is needed, so
/// every source always yields some cursor.
pub struct EmptyCursor<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> EmptyCursor<T> {
    pub const fn new() -> Self {
        EmptyCursor {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for EmptyCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyCursor<T> {}

impl<T> fmt::Debug for EmptyCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyCursor")
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn state(&self) -> CursorState {
        CursorState::Exhausted
    }

    async fn advance(&mut self, _signal: CancellationSignal<'_>) -> bool {
        false
    }

    async fn current(&self, signal: CancellationSignal<'_>) -> CollectionResult<T> {
        signal.check()?;
        Err(CollectionError::NotSupported)
    }

    fn dispose(&mut self) {}
}
