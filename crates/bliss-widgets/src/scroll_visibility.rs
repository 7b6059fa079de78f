#![forbid(unsafe_code)]

//! Scroll-direction-aware header visibility.
//!
//! The sticky header slides out while the reader scrolls down and comes back
//! on any upward movement:
//!
//! ```text
//! scrolling_down = current > last && current > threshold
//! header_hidden  = scrolling_down
//! last           = current
//! ```
//!
//! Offsets at or below the threshold always show the header, which keeps it
//! from flickering while the page bounces near the top.

use bliss_core::trace;
use bliss_runtime::{ScrollConfig, ScrollListener, ScrollSignal};

/// Header auto-hide controller.
#[derive(Debug)]
pub struct ScrollVisibility {
    threshold_px: f64,
    last_offset: f64,
    header_hidden: bool,
    listener: Option<ScrollListener>,
}

impl ScrollVisibility {
    /// Create a detached controller whose last offset is `initial_offset`.
    #[must_use]
    pub fn new(config: ScrollConfig, initial_offset: f64) -> Self {
        Self {
            threshold_px: config.threshold_px,
            last_offset: if initial_offset.is_finite() {
                initial_offset
            } else {
                0.0
            },
            header_hidden: false,
            listener: None,
        }
    }

    /// Create a controller subscribed to `signal`, starting from its current offset.
    #[must_use]
    pub fn mount(config: ScrollConfig, signal: &ScrollSignal) -> Self {
        let mut this = Self::new(config, signal.current_offset());
        this.listener = Some(signal.subscribe());
        this
    }

    /// Whether the header should be translated out of view.
    #[must_use]
    pub fn header_hidden(&self) -> bool {
        self.header_hidden
    }

    /// Last offset applied.
    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Whether a scroll listener is currently held.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.listener.is_some()
    }

    /// Apply one scroll observation. Returns `true` if visibility changed.
    ///
    /// Non-finite offsets are ignored.
    pub fn observe(&mut self, offset: f64) -> bool {
        if !offset.is_finite() {
            return false;
        }
        let scrolling_down = offset > self.last_offset && offset > self.threshold_px;
        self.last_offset = offset;

        if scrolling_down == self.header_hidden {
            return false;
        }
        trace!(offset, hidden = scrolling_down, "header visibility");
        self.header_hidden = scrolling_down;
        true
    }

    /// Apply every offset delivered to the listener since the last pump.
    ///
    /// Returns `true` if visibility changed at least once.
    pub fn pump(&mut self) -> bool {
        let offsets = match &self.listener {
            Some(listener) => listener.drain(),
            None => return false,
        };
        let mut changed = false;
        for offset in offsets {
            changed |= self.observe(offset);
        }
        changed
    }

    /// Release the scroll listener. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden_sequence(offsets: &[f64]) -> Vec<bool> {
        let mut sv = ScrollVisibility::new(ScrollConfig::default(), 0.0);
        offsets
            .iter()
            .map(|&o| {
                sv.observe(o);
                sv.header_hidden()
            })
            .collect()
    }

    #[test]
    fn reference_sequence() {
        assert_eq!(
            hidden_sequence(&[0.0, 50.0, 120.0, 80.0, 5.0]),
            vec![false, true, true, false, false]
        );
    }

    #[test]
    fn scrolling_down_within_threshold_keeps_header() {
        assert_eq!(
            hidden_sequence(&[2.0, 6.0, 10.0]),
            vec![false, false, false]
        );
        // First offset past the threshold hides.
        assert_eq!(hidden_sequence(&[10.0, 11.0]), vec![false, true]);
    }

    #[test]
    fn any_upward_movement_reveals_at_depth() {
        assert_eq!(
            hidden_sequence(&[500.0, 900.0, 899.0, 1200.0]),
            vec![true, true, false, true]
        );
    }

    #[test]
    fn same_offset_reveals() {
        // Not strictly greater, so not scrolling down.
        assert_eq!(hidden_sequence(&[300.0, 300.0]), vec![true, false]);
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let mut sv = ScrollVisibility::new(ScrollConfig::default(), 0.0);
        sv.observe(200.0);
        assert!(sv.header_hidden());
        assert!(!sv.observe(f64::NAN));
        assert!(!sv.observe(f64::INFINITY));
        assert!(sv.header_hidden());
        assert_eq!(sv.last_offset(), 200.0);
    }

    #[test]
    fn initial_offset_is_baseline() {
        let mut sv = ScrollVisibility::new(ScrollConfig::default(), 400.0);
        // Reload mid-page then scroll up: header stays visible.
        sv.observe(380.0);
        assert!(!sv.header_hidden());
    }

    #[test]
    fn custom_threshold() {
        let mut sv = ScrollVisibility::new(ScrollConfig::default().threshold_px(100.0), 0.0);
        sv.observe(90.0);
        assert!(!sv.header_hidden());
        sv.observe(101.0);
        assert!(sv.header_hidden());
    }

    #[test]
    fn mounted_controller_pumps_signal() {
        let signal = ScrollSignal::new();
        let mut sv = ScrollVisibility::mount(ScrollConfig::default(), &signal);
        assert!(sv.is_subscribed());
        assert_eq!(signal.listener_count(), 1);

        signal.emit(50.0);
        signal.emit(120.0);
        assert!(sv.pump());
        assert!(sv.header_hidden());

        signal.emit(80.0);
        assert!(sv.pump());
        assert!(!sv.header_hidden());
        assert!(!sv.pump());
    }

    #[test]
    fn unmount_releases_listener() {
        let signal = ScrollSignal::new();
        let mut sv = ScrollVisibility::mount(ScrollConfig::default(), &signal);
        sv.unmount();
        sv.unmount();
        assert!(!sv.is_subscribed());
        assert_eq!(signal.listener_count(), 0);

        signal.emit(500.0);
        assert!(!sv.pump());
        assert!(!sv.header_hidden());
    }

    #[test]
    fn drop_releases_listener() {
        let signal = ScrollSignal::new();
        {
            let _sv = ScrollVisibility::mount(ScrollConfig::default(), &signal);
            assert_eq!(signal.listener_count(), 1);
        }
        assert_eq!(signal.listener_count(), 0);
    }
}
