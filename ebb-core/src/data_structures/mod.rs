//! Cursors, traversable sources and the concurrent queue.
//!
//! # Organization
//!
//! - [`cursor`] - Cursor contract, lifecycle state, sentinel and snapshot cursors
//! - [`traversable`] - Source contracts (`Traversable`, `Countable`)
//! - [`queue`] - Lock-guarded FIFO queue
//! - [`memory_sequence`] - Immutable in-memory source
//! - [`traversal`] - Copy and materialize algorithms over any source

pub mod cursor;
pub mod memory_sequence;
pub mod queue;
pub mod traversable;
pub mod traversal;

pub use cursor::{Cursor, CursorGuard, CursorState, EmptyCursor, SequenceCursor, SnapshotCursor};
pub use memory_sequence::MemorySequence;
pub use queue::{AsyncQueue, ConcurrentQueue};
pub use traversable::{Countable, Traversable};
pub use traversal::{INITIAL_ARRAY_CAPACITY, TraversableExt};
