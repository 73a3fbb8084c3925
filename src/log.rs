//! Conditional logging macros.
//!
//! With the `tracing` feature enabled these re-export `tracing` macros;
//! without it they expand to no-ops.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
