//! Test bodies shared by every `AsyncQueue` implementation.
//!
//! Integration tests in `tests/` instantiate these for each queue type.

pub mod queue_core_tests;
