#![forbid(unsafe_code)]

//! First-visit splash gate.
//!
//! A [`VisitGate`] decides at mount, synchronously, whether the branded
//! splash overlay should be shown, and then walks a timed sequence:
//!
//! ```text
//!   mount ──(record present)──────────────────────────────▶ Hidden
//!     │
//!     └─(record absent)─▶ Visible ──(hold − fade)──▶ FadingOut ──(fade)──▶ Hidden
//!                                                                         └ write record
//! ```
//!
//! # Invariants
//!
//! 1. The phase never moves backwards (`Visible < FadingOut < Hidden`).
//! 2. The visit record is written at most once, and only on the `Hidden`
//!    transition reached through the dismiss timer.
//! 3. After [`VisitGate::unmount`] (or drop) no timer callback changes state
//!    or touches storage.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Storage read fails | Splash shown, persistence skipped ([`Persistence::Degraded`]) |
//! | Storage write fails | Splash dismissed, record missing, splash returns next load |
//! | Timer fires after unmount | Ignored |

use std::sync::Arc;

use bliss_core::{debug, trace, warn};
use bliss_runtime::{GateConfig, KeyValueStore, TimerHandle, TimerQueue};

/// Visible state of the splash overlay.
///
/// Variants are ordered by lifecycle position, so `a < b` means `a` comes
/// before `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SplashPhase {
    /// Overlay rendered at full opacity.
    Visible,
    /// Overlay rendered with the opacity transition running.
    FadingOut,
    /// Overlay not rendered. Terminal.
    Hidden,
}

/// Whether the gate can remember that the splash was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persistence {
    /// Storage works; the record will be (or was) written.
    Enabled,
    /// Storage failed; the splash will reappear on the next load.
    Degraded,
}

/// Timers scheduled by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateTimer {
    /// Start the opacity fade.
    FadeStart,
    /// Remove the overlay and write the visit record.
    Dismiss,
}

/// Opacity class applied to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opacity {
    /// Fully opaque.
    Opaque,
    /// Transitioning to transparent.
    Transparent,
}

impl Opacity {
    /// Utility class understood by the site stylesheet.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Opaque => "opacity-100",
            Self::Transparent => "opacity-0",
        }
    }
}

/// What the page shell should render for the splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashOverlay {
    /// Current opacity class.
    pub opacity: Opacity,
}

/// One-time splash gate bound to a storage capability.
pub struct VisitGate {
    config: GateConfig,
    store: Arc<dyn KeyValueStore>,
    phase: SplashPhase,
    persistence: Persistence,
    fade_timer: Option<TimerHandle>,
    dismiss_timer: Option<TimerHandle>,
    mounted: bool,
    recorded: bool,
}

impl VisitGate {
    /// Mount the gate, reading the visit record synchronously.
    ///
    /// If the record is absent (or storage cannot be read), the splash is
    /// shown and two timers are scheduled on `timers` relative to `now`.
    pub fn mount<T: From<GateTimer>>(
        config: GateConfig,
        store: Arc<dyn KeyValueStore>,
        timers: &mut TimerQueue<T>,
        now: core::time::Duration,
    ) -> Self {
        let (seen, persistence) = match store.get(&config.storage_key) {
            Ok(value) => (
                value.is_some_and(|v| !v.is_empty()),
                Persistence::Enabled,
            ),
            Err(err) => {
                warn!(
                    backend = store.name(),
                    key = %config.storage_key,
                    error = %err,
                    "visit record unreadable; showing splash without persistence"
                );
                (false, Persistence::Degraded)
            }
        };

        let mut gate = Self {
            config,
            store,
            phase: SplashPhase::Hidden,
            persistence,
            fade_timer: None,
            dismiss_timer: None,
            mounted: true,
            recorded: false,
        };

        if seen {
            debug!(key = %gate.config.storage_key, "splash already seen");
            return gate;
        }

        gate.phase = SplashPhase::Visible;
        let fade_at = gate.config.fade_start();
        let hold = gate.config.hold;
        gate.fade_timer = Some(timers.schedule(now, fade_at, T::from(GateTimer::FadeStart)));
        gate.dismiss_timer = Some(timers.schedule(now, hold, T::from(GateTimer::Dismiss)));
        debug!(
            fade_ms = fade_at.as_millis() as u64,
            hold_ms = hold.as_millis() as u64,
            persistence = ?gate.persistence,
            "splash shown"
        );
        gate
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Whether the visit record can be persisted.
    #[must_use]
    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// Whether the gate is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether this gate wrote the visit record.
    #[must_use]
    pub fn recorded(&self) -> bool {
        self.recorded
    }

    /// Overlay to render, or `None` when hidden.
    #[must_use]
    pub fn overlay(&self) -> Option<SplashOverlay> {
        match self.phase {
            SplashPhase::Visible => Some(SplashOverlay {
                opacity: Opacity::Opaque,
            }),
            SplashPhase::FadingOut => Some(SplashOverlay {
                opacity: Opacity::Transparent,
            }),
            SplashPhase::Hidden => None,
        }
    }

    /// Handle a fired gate timer. Returns `true` if the phase changed.
    pub fn on_timer(&mut self, timer: GateTimer) -> bool {
        if !self.mounted {
            trace!(?timer, "gate timer after unmount ignored");
            return false;
        }
        match timer {
            GateTimer::FadeStart => {
                self.fade_timer = None;
                self.advance(SplashPhase::FadingOut)
            }
            GateTimer::Dismiss => {
                self.dismiss_timer = None;
                let changed = self.advance(SplashPhase::Hidden);
                if changed {
                    self.record_visit();
                }
                changed
            }
        }
    }

    /// Cancel pending timers and stop reacting to late callbacks.
    pub fn unmount<T>(&mut self, timers: &mut TimerQueue<T>) {
        if let Some(handle) = self.fade_timer.take() {
            timers.cancel(&handle);
        }
        if let Some(handle) = self.dismiss_timer.take() {
            timers.cancel(&handle);
        }
        if self.mounted {
            debug!(phase = ?self.phase, "splash gate unmounted");
        }
        self.mounted = false;
    }

    fn advance(&mut self, next: SplashPhase) -> bool {
        if next <= self.phase {
            return false;
        }
        trace!(from = ?self.phase, to = ?next, "splash phase");
        self.phase = next;
        true
    }

    fn record_visit(&mut self) {
        if self.recorded || self.persistence == Persistence::Degraded {
            return;
        }
        match self.store.set(&self.config.storage_key, &self.config.marker) {
            Ok(()) => {
                self.recorded = true;
                debug!(key = %self.config.storage_key, "visit recorded");
            }
            Err(err) => {
                self.persistence = Persistence::Degraded;
                warn!(
                    backend = self.store.name(),
                    error = %err,
                    "failed to record visit; splash will show again"
                );
            }
        }
    }
}

impl Drop for VisitGate {
    fn drop(&mut self) {
        // The queue may be gone; the shared liveness flag is enough.
        if let Some(handle) = self.fade_timer.take() {
            handle.cancel();
        }
        if let Some(handle) = self.dismiss_timer.take() {
            handle.cancel();
        }
    }
}

impl std::fmt::Debug for VisitGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitGate")
            .field("backend", &self.store.name())
            .field("phase", &self.phase)
            .field("persistence", &self.persistence)
            .field("mounted", &self.mounted)
            .field("recorded", &self.recorded)
            .finish()
    }
}
