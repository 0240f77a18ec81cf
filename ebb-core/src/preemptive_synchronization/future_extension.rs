//! Driving immediately-ready futures without an executor.
//!
//! The in-memory collections in this crate never suspend: every `async`
//! operation completes on its first poll. These helpers poll a future once
//! with a no-op waker so synchronous callers, tests and benchmarks can use
//! the asynchronous API directly.

use std::future::Future;
use std::pin::pin;
use std::ptr;
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

fn noop_waker() -> Waker {
    static VTABLE: RawWakerVTable = RawWakerVTable::new(
        |_| RawWaker::new(ptr::null(), &VTABLE),
        |_| {},
        |_| {},
        |_| {},
    );
    // Safety: every vtable entry ignores the data pointer.
    unsafe { Waker::from_raw(RawWaker::new(ptr::null(), &VTABLE)) }
}

pub trait FutureExtension: Future {
    /// Polls the future once and returns its output if it was ready.
    ///
    fn try_ready(self) -> Option<Self::Output>;

    /// Gets a result from the future.
    /// This function will panic if the future returns `Poll::Pending`.
    ///
    fn unwrap_result(self) -> Self::Output;
}

impl<F: Future> FutureExtension for F {
    fn try_ready(self) -> Option<Self::Output> {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        let future = pin!(self);

        match future.poll(&mut cx) {
            Poll::Ready(val) => Some(val),
            Poll::Pending => None,
        }
    }

    fn unwrap_result(self) -> Self::Output {
        match self.try_ready() {
            Some(val) => val,
            None => panic!("expected completed future"),
        }
    }
}
