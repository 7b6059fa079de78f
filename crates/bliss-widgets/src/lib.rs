#![forbid(unsafe_code)]

//! Presentation controllers for the Blissful Bites site.
//!
//! Each controller owns one narrow slice of ephemeral UI state and never
//! calls into another; the page shell in `bliss-web` composes them.
//!
//! - [`VisitGate`] - one-time splash overlay with timed fade
//! - [`ScrollVisibility`] - header auto-hide by scroll direction
//! - [`DisclosureGroup`] - non-exclusive FAQ accordion
//! - [`GalleryState`] - category filter and lightbox selection
//! - [`NavMenu`] - mobile navigation drawer

pub mod disclosure;
pub mod gallery;
pub mod nav_menu;
pub mod scroll_visibility;
pub mod visit_gate;

pub use disclosure::{DisclosureError, DisclosureGroup, PanelId};
pub use gallery::{
    Category, FALLBACK_IMAGE, FilterChip, GalleryError, GalleryItem, GalleryState, ItemId,
    Lightbox,
};
pub use nav_menu::NavMenu;
pub use scroll_visibility::ScrollVisibility;
pub use visit_gate::{GateTimer, Opacity, Persistence, SplashOverlay, SplashPhase, VisitGate};
