#![forbid(unsafe_code)]

//! Core: monotonic clocks, page events, and logging shims.

pub mod clock;
pub mod event;
pub mod logging;

pub use clock::{Clock, DeterministicClock, SystemClock};
pub use event::PageEvent;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
