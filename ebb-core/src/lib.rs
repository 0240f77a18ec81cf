//! Cancellable, lock-guarded cursors over concurrent collections.
//!
//! ```rust
//! use ebb_core::{AsyncQueue, CancellationSignal, ConcurrentQueue, FutureExtension, TraversableExt};
//!
//! let queue: ConcurrentQueue<i32> = (0..4).collect();
//! let signal = CancellationSignal::NONE;
//!
//! assert!(queue.enqueue(4, signal).unwrap_result());
//! assert_eq!(queue.dequeue(signal).unwrap_result(), Ok(0));
//! assert_eq!(queue.to_list(signal).unwrap_result(), Ok(vec![1, 2, 3, 4]));
//! ```

pub mod common_tests;
pub mod data_structures;
pub mod error;
pub mod preemptive_synchronization;

pub use data_structures::{
    AsyncQueue, ConcurrentQueue, Countable, Cursor, CursorGuard, CursorState, EmptyCursor,
    INITIAL_ARRAY_CAPACITY, MemorySequence, SequenceCursor, SnapshotCursor, Traversable,
    TraversableExt,
};
pub use error::{CollectionError, CollectionResult};
pub use preemptive_synchronization::{CancellationSignal, CancellationSource, FutureExtension};
