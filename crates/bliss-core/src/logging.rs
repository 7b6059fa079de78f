#![forbid(unsafe_code)]

//! Logging shims shared by the presentation controllers.
//!
//! Controllers log through `bliss_core::{debug, trace, warn, debug_span}`.
//! With the `tracing` feature these are the `tracing` macros. Without it,
//! same-named macros that discard their input are exported at the crate root,
//! so controller code compiles unchanged either way.
//!
//! | Level | Used for |
//! |-------|----------|
//! | `warn` | Storage degraded (visit record unreadable or unwritable) |
//! | `debug` | Mount/unmount, phase changes, rejected input |
//! | `trace` | Timer bookkeeping, per-scroll visibility flips |

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Discards a debug event.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Discards a trace event.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Discards a warning.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// Yields a span that records nothing.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span produced by `debug_span!` when tracing is off.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::enter`.
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;
