//! Traversal algorithms built on the cursor contract.
//!
//! Every algorithm acquires exactly one cursor, drives it until it is
//! exhausted (or a copy limit is reached), and disposes it on every exit
//! path through a [`CursorGuard`].
//!
//! # Cancellation
//!
//! A signal that is already cancelled on entry yields an empty result
//! without creating a cursor. A signal cancelled mid-traversal makes the
//! next `advance` return false, which ends the loop normally: the items
//! collected so far are returned, not an error. Callers that need to tell
//! the two apart can check their signal after the call.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{BuildHasher, Hash};

use tracing::debug;

use crate::data_structures::cursor::{Cursor, CursorGuard};
use crate::data_structures::traversable::Traversable;
use crate::error::{CollectionError, CollectionResult};
use crate::preemptive_synchronization::cancellation::CancellationSignal;

/// Starting capacity of the buffer built by [`TraversableExt::to_array`].
pub const INITIAL_ARRAY_CAPACITY: usize = 8;

fn note_early_stop<C: Cursor>(cursor: &C, signal: CancellationSignal<'_>, collected: usize) {
    if signal.is_cancelled() && !cursor.is_exhausted() {
        debug!(collected, "traversal stopped by cancellation");
    }
}

/// Traversal algorithms available on every [`Traversable`] source.
///
#[allow(async_fn_in_trait)]
pub trait TraversableExt: Traversable {
    /// Copies items into `target`, starting at index 0, until either the
    /// source or the target runs out.
    ///
    /// Returns the number of items copied.
    async fn copy_to(
        &self,
        target: &mut [Self::Item],
        signal: CancellationSignal<'_>,
    ) -> CollectionResult<usize> {
        let len = target.len();
        self.copy_to_range(target, 0, len, signal).await
    }

    /// Copies at most `count` items into `target[start..]`.
    ///
    /// `count` is clamped to the room left in `target` after `start`.
    /// Fails with `OutOfRange` if `start` is past the end of `target`, and
    /// with whatever error the cursor's `current` raises.
    async fn copy_to_range(
        &self,
        target: &mut [Self::Item],
        start: usize,
        count: usize,
        signal: CancellationSignal<'_>,
    ) -> CollectionResult<usize> {
        if signal.is_cancelled() {
            return Ok(0);
        }

        if start > target.len() {
            return Err(CollectionError::OutOfRange {
                start,
                len: target.len(),
            });
        }

        let count = count.min(target.len() - start);

        let mut cursor = CursorGuard::new(self.cursor(signal).await);
        let mut copied = 0;

        while copied < count && cursor.advance(signal).await {
            target[start + copied] = cursor.current(signal).await?;
            copied += 1;
        }

        note_early_stop(&*cursor, signal, copied);
        Ok(copied)
    }

    /// Collects every item into an exactly sized boxed slice.
    ///
    /// The buffer starts at [`INITIAL_ARRAY_CAPACITY`] and doubles whenever
    /// it fills up.
    async fn to_array(&self, signal: CancellationSignal<'_>) -> CollectionResult<Box<[Self::Item]>> {
        if signal.is_cancelled() {
            return Ok(Box::default());
        }

        let mut target = Vec::with_capacity(INITIAL_ARRAY_CAPACITY);
        let mut cursor = CursorGuard::new(self.cursor(signal).await);

        while cursor.advance(signal).await {
            if target.len() == target.capacity() {
                target.reserve_exact(target.capacity());
            }

            target.push(cursor.current(signal).await?);
        }

        note_early_stop(&*cursor, signal, target.len());

        // Shrinks to the exact length.
        //
        Ok(target.into_boxed_slice())
    }

    /// Collects every item into a `Vec`.
    async fn to_list(&self, signal: CancellationSignal<'_>) -> CollectionResult<Vec<Self::Item>> {
        if signal.is_cancelled() {
            return Ok(Vec::new());
        }

        let mut target = Vec::new();
        let mut cursor = CursorGuard::new(self.cursor(signal).await);

        while cursor.advance(signal).await {
            target.push(cursor.current(signal).await?);
        }

        note_early_stop(&*cursor, signal, target.len());
        Ok(target)
    }

    /// Collects every item into a map, projecting each item to a key and a
    /// value.
    ///
    /// Fails with `DuplicateKey` when two items project to the same key;
    /// `index` is the traversal position of the second one.
    async fn to_map<K, V, S, FK, FV>(
        &self,
        mut key: FK,
        mut value: FV,
        signal: CancellationSignal<'_>,
    ) -> CollectionResult<HashMap<K, V, S>>
    where
        K: Eq + Hash,
        S: BuildHasher + Default,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(&Self::Item) -> V,
    {
        let mut target = HashMap::with_hasher(S::default());

        if signal.is_cancelled() {
            return Ok(target);
        }

        let mut cursor = CursorGuard::new(self.cursor(signal).await);
        let mut index = 0;

        while cursor.advance(signal).await {
            let item = cursor.current(signal).await?;

            match target.entry(key(&item)) {
                Entry::Occupied(_) => return Err(CollectionError::DuplicateKey { index }),
                Entry::Vacant(slot) => {
                    slot.insert(value(&item));
                }
            }

            index += 1;
        }

        note_early_stop(&*cursor, signal, index);
        Ok(target)
    }

    /// Returns the first item.
    ///
    /// Fails with `EmptySequence` if the source has no items and with
    /// `Cancelled` if `signal` is cancelled.
    async fn first(&self, signal: CancellationSignal<'_>) -> CollectionResult<Self::Item> {
        signal.check()?;

        let mut cursor = CursorGuard::new(self.cursor(signal).await);

        if cursor.advance(signal).await {
            return cursor.current(signal).await;
        }

        signal.check()?;
        Err(CollectionError::EmptySequence)
    }
}

impl<S: Traversable + ?Sized> TraversableExt for S {}
