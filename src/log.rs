//! Conditional debug logging for the decoder and document builder.
//!
//! With the `tracing` feature enabled, `debug!` is the `tracing` macro and
//! emits pen switches, path flushes, and skipped commands when `RUST_LOG`
//! asks for them. Without the feature it expands to nothing.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
