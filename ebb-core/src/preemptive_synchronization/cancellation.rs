//! Cooperative cancellation.
//!
//! A [`CancellationSource`] owns the cancellation flag. Any number of
//! [`CancellationSignal`]s borrow it read-only and are handed to collection
//! operations, which check the signal on entry and before every step of a
//! multi-step operation. Cancellation never interrupts work in progress; it
//! only prevents the next step.
//!
//! ```text
//!   CancellationSource ──signal()──► CancellationSignal (Copy)
//!          │                              │
//!       cancel()                    is_cancelled()
//!          │                              │
//!          └────── AtomicBool ◄───────────┘
//! ```

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::error::{CollectionError, CollectionResult};

/// Owner of a cancellation flag.
///
/// Cancellation is one-way: once [`cancel`](Self::cancel) is called the flag
/// stays set for the lifetime of the source.
#[derive(Default)]
pub struct CancellationSource {
    cancelled: AtomicBool,
}

impl CancellationSource {
    pub fn new() -> Self {
        CancellationSource {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Request cancellation. Repeated calls have no additional effect.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Hand out a read-only signal observing this source.
    pub fn signal(&self) -> CancellationSignal<'_> {
        CancellationSignal {
            state: SignalState::Source(&self.cancelled),
        }
    }
}

impl fmt::Debug for CancellationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationSource")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[derive(Clone, Copy)]
enum SignalState<'a> {
    Never,
    Always,
    Source(&'a AtomicBool),
}

/// A copyable, read-only view of a cancellation flag.
#[derive(Clone, Copy)]
pub struct CancellationSignal<'a> {
    state: SignalState<'a>,
}

impl CancellationSignal<'static> {
    /// A signal that is never cancelled.
    pub const NONE: CancellationSignal<'static> = CancellationSignal {
        state: SignalState::Never,
    };

    /// A signal that is already cancelled.
    pub const CANCELLED: CancellationSignal<'static> = CancellationSignal {
        state: SignalState::Always,
    };
}

impl CancellationSignal<'_> {
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        match self.state {
            SignalState::Never => false,
            SignalState::Always => true,
            SignalState::Source(flag) => flag.load(Ordering::Acquire),
        }
    }

    /// Fail with [`CollectionError::Cancelled`] when cancellation has been requested.
    #[inline]
    pub fn check(&self) -> CollectionResult<()> {
        if self.is_cancelled() {
            Err(CollectionError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationSignal<'static> {
    fn default() -> Self {
        CancellationSignal::NONE
    }
}

impl fmt::Debug for CancellationSignal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationSignal")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
