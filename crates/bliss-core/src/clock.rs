#![forbid(unsafe_code)]

//! Monotonic clocks for timer-driven controllers.
//!
//! Controllers never read wall-clock time directly. The page shell owns a
//! [`Clock`] and passes `now` into every scheduling call, so tests can drive
//! the splash sequence with a [`DeterministicClock`] instead of sleeping.

use core::time::Duration;

/// Source of monotonic time, measured from an arbitrary origin.
pub trait Clock {
    /// Current monotonic time.
    fn now(&self) -> Duration;
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Set current monotonic time.
    ///
    /// Moving backwards is ignored; the clock only ever moves forward.
    pub fn set(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

impl Clock for DeterministicClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Real monotonic clock, measured from construction.
///
/// Backed by `web_time::Instant`, which maps to `performance.now()` on
/// `wasm32-unknown-unknown` and to `std::time::Instant` elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: web_time::Instant,
}

impl SystemClock {
    /// Start a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: web_time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
