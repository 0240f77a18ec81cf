//! Error type shared by every collection, cursor and traversal operation.
//!
//! Boolean-returning operations (`enqueue`, `clear`, `advance`) report
//! cancellation and exhaustion through their result value and never
//! produce a `CollectionError`.

use thiserror::Error;

/// Failure of a collection, cursor or traversal operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The cancellation signal was already set when the operation started.
    #[error("the operation was cancelled")]
    Cancelled,

    /// `dequeue` or `peek` was called on a queue with no items.
    #[error("queue is empty")]
    EmptyQueue,

    /// `current` was called before a successful `advance`, or after
    /// `advance` returned false.
    #[error("this cursor has not been initialized")]
    NotInitialized,

    /// The cursor cannot produce items at all.
    #[error("this cursor does not support reading items")]
    NotSupported,

    /// Two items projected to the same key while building a map.
    #[error("duplicate key produced by the item at position {index}")]
    DuplicateKey { index: usize },

    /// The sequence has no items but at least one was required.
    #[error("sequence contains no items")]
    EmptySequence,

    /// A copy was asked to start past the end of its target.
    #[error("start index {start} is out of range for a target of length {len}")]
    OutOfRange { start: usize, len: usize },
}

/// Result alias for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;
