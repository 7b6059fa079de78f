#![forbid(unsafe_code)]

//! Canonical page events pushed by the host.
//!
//! Events carry raw host values (strings from data attributes, numeric ids,
//! scroll offsets). Parsing into controller types happens in the page shell
//! so that malformed input is rejected at one boundary.

/// An input event delivered to the page shell.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Passive scroll signal with the current vertical offset in CSS pixels.
    Scroll {
        /// Current `window.scrollY`.
        offset_y: f64,
    },
    /// The floating hamburger button was pressed.
    ToggleNavMenu,
    /// A nav link was followed or the backdrop was clicked.
    CloseNavMenu,
    /// A FAQ question header was clicked.
    TogglePanel {
        /// Panel id as rendered (`"{section}-{item}"`).
        id: String,
    },
    /// A gallery filter chip was clicked.
    SetCategory {
        /// Chip label (case-insensitive).
        category: String,
    },
    /// A gallery tile was clicked.
    SelectItem {
        /// Catalog item id.
        id: u32,
    },
    /// The lightbox close button was clicked.
    ClearSelection,
}

impl PageEvent {
    /// Short, allocation-free name used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Scroll { .. } => "scroll",
            Self::ToggleNavMenu => "toggle_nav_menu",
            Self::CloseNavMenu => "close_nav_menu",
            Self::TogglePanel { .. } => "toggle_panel",
            Self::SetCategory { .. } => "set_category",
            Self::SelectItem { .. } => "select_item",
            Self::ClearSelection => "clear_selection",
        }
    }

    /// Whether this event comes from a passive browser signal rather than a
    /// user gesture.
    #[must_use]
    pub const fn is_passive(&self) -> bool {
        matches!(self, Self::Scroll { .. })
    }
}
