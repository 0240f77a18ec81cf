pub mod cancellation;
pub mod future_extension;

pub use cancellation::{CancellationSignal, CancellationSource};
pub use future_extension::FutureExtension;
