#![forbid(unsafe_code)]

//! Mobile navigation drawer.
//!
//! The floating hamburger button toggles a slide-in panel. Following a link
//! or clicking the backdrop closes it.

/// Open/closed state of the mobile nav drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// A closed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the drawer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer. Returns whether it is open afterwards.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the drawer. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Accessible label for the toggle button.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        "Toggle navigation"
    }
}
