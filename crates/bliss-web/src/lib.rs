#![forbid(unsafe_code)]

//! `bliss-web` composes the presentation controllers into a host-driven page
//! shell for the Blissful Bites site.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes scroll and click
//!   events and reads back a render snapshot.
//! - **Deterministic time**: the host advances a monotonic clock explicitly.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! Storage is injected as a [`bliss_runtime::KeyValueStore`]; a browser
//! embedding wraps `localStorage`, tests use
//! [`bliss_runtime::MemoryStore`].

pub mod content;
pub mod page_shell;

pub use content::{
    CONTACT_LINKS, ContactChannel, ContactLink, FAQ_SECTIONS, FaqItem, FaqSection, GALLERY,
    NAV_ITEMS, NavItem,
};
pub use page_shell::{
    GalleryView, LayerFlags, LightboxView, Page, PageShell, PageSnapshot, ShellError, ShellTimer,
    StepResult,
};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "BLISS_LOG";

/// Install a fmt subscriber filtered by `BLISS_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "tracing")]
pub fn init_tracing() -> bool {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
