#![forbid(unsafe_code)]

//! Host-driven page shell.
//!
//! [`PageShell`] mounts the presentation controllers for one [`Page`] and
//! drives them without threads or blocking. The host owns the loop:
//!
//! 1. Push events via [`PageShell::push_event`].
//! 2. Advance time via [`PageShell::advance_time`] (deterministic clock).
//! 3. Call [`PageShell::step`] to fire due timers and apply queued events.
//! 4. Read what to render via [`PageShell::snapshot`].
//!
//! # Example
//!
//! ```ignore
//! use bliss_web::{Page, PageShell};
//! use bliss_core::PageEvent;
//!
//! let mut shell = PageShell::deterministic(Page::Faq, ShellConfig::default(), store);
//! shell.push_event(PageEvent::TogglePanel { id: "0-1".into() });
//! shell.advance_time(Duration::from_millis(16));
//! let result = shell.step();
//! if result.changed {
//!     render(shell.snapshot());
//! }
//! ```
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Event for a controller the page lacks | Rejected, logged at `debug`, counted |
//! | Unknown panel / item / category | Rejected, state unchanged |
//! | Events or steps after unmount | Dropped; `apply` returns `Unmounted` |

use core::time::Duration;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use bitflags::bitflags;
use bliss_core::{Clock, DeterministicClock, PageEvent, debug, debug_span, trace};
use bliss_runtime::{KeyValueStore, ScrollSignal, ShellConfig, TimerQueue};
use bliss_widgets::{
    Category, DisclosureError, DisclosureGroup, FilterChip, GalleryError, GalleryItem,
    GalleryState, GateTimer, ItemId, Lightbox, NavMenu, PanelId, ScrollVisibility, SplashOverlay,
    SplashPhase, VisitGate,
};

use crate::content;

/// Site pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page.
    Home,
    /// Product menu.
    Menu,
    /// About the bakery.
    About,
    /// Filterable photo gallery with lightbox.
    Gallery,
    /// Contact links.
    Contact,
    /// Accordion of frequently asked questions.
    Faq,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Menu,
        Page::About,
        Page::Gallery,
        Page::Contact,
        Page::Faq,
    ];

    /// Route path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menu => "/menu",
            Self::About => "/about",
            Self::Gallery => "/gallery",
            Self::Contact => "/contact",
            Self::Faq => "/faq",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Page {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        Page::ALL
            .into_iter()
            .find(|page| page.path() == path)
            .ok_or_else(|| ShellError::UnknownRoute(s.to_owned()))
    }
}

/// Timer payloads owned by the shell's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellTimer {
    /// A splash gate timer.
    Gate(GateTimer),
}

impl From<GateTimer> for ShellTimer {
    fn from(timer: GateTimer) -> Self {
        Self::Gate(timer)
    }
}

/// Why an event was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The current page does not mount the controller the event targets.
    NotOnPage {
        /// Event kind, as in [`PageEvent::kind`].
        event: &'static str,
        /// Page that rejected it.
        page: Page,
    },
    /// FAQ toggle rejected.
    Disclosure(DisclosureError),
    /// Gallery filter or selection rejected.
    Gallery(GalleryError),
    /// Path does not name a page.
    UnknownRoute(String),
    /// The shell was unmounted.
    Unmounted,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOnPage { event, page } => write!(f, "{event} event not handled on {page}"),
            Self::Disclosure(err) => write!(f, "disclosure: {err}"),
            Self::Gallery(err) => write!(f, "gallery: {err}"),
            Self::UnknownRoute(path) => write!(f, "unknown route {path:?}"),
            Self::Unmounted => f.write_str("page shell unmounted"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Disclosure(err) => Some(err),
            Self::Gallery(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DisclosureError> for ShellError {
    fn from(err: DisclosureError) -> Self {
        Self::Disclosure(err)
    }
}

impl From<GalleryError> for ShellError {
    fn from(err: GalleryError) -> Self {
        Self::Gallery(err)
    }
}

bitflags! {
    /// Overlay layers the renderer must stack.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerFlags: u8 {
        /// Splash overlay is rendered.
        const SPLASH        = 0b0000_0001;
        /// Splash overlay is fading out.
        const SPLASH_FADING = 0b0000_0010;
        /// Sticky header is translated out of view.
        const HEADER_HIDDEN = 0b0000_0100;
        /// Mobile nav drawer is open.
        const NAV_OPEN      = 0b0000_1000;
        /// Gallery lightbox is open.
        const LIGHTBOX      = 0b0001_0000;
    }
}

/// Owned form of [`Lightbox`] for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxView {
    /// Nothing selected.
    Closed,
    /// Selected item.
    Image(GalleryItem),
    /// Selection no longer in the catalog.
    NoImage {
        /// The unresolved id.
        id: ItemId,
        /// Image to draw instead.
        fallback_src: &'static str,
    },
}

impl From<Lightbox<'_>> for LightboxView {
    fn from(lightbox: Lightbox<'_>) -> Self {
        match lightbox {
            Lightbox::Closed => Self::Closed,
            Lightbox::Image(item) => Self::Image(*item),
            Lightbox::NoImage { id, fallback_src } => Self::NoImage { id, fallback_src },
        }
    }
}

/// Gallery portion of a [`PageSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    /// Active filter.
    pub category: Category,
    /// Filter bar, active chip flagged.
    pub chips: [FilterChip; 9],
    /// Ids passing the active filter, in catalog order.
    pub visible: Vec<ItemId>,
    /// Lightbox overlay content.
    pub lightbox: LightboxView,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    /// Mounted page.
    pub page: Page,
    /// Splash overlay, `None` once hidden.
    pub splash: Option<SplashOverlay>,
    /// Whether the sticky header is translated out of view.
    pub header_hidden: bool,
    /// Whether the mobile nav drawer is open.
    pub nav_open: bool,
    /// Open FAQ panels; empty off the FAQ page.
    pub open_panels: Vec<PanelId>,
    /// Gallery state; `None` off the gallery page.
    pub gallery: Option<GalleryView>,
    /// Overlay layers derived from the fields above.
    pub layers: LayerFlags,
}

/// Result of a single [`PageShell::step`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the shell is still mounted.
    pub mounted: bool,
    /// Number of events applied during this step.
    pub events_processed: u32,
    /// Number of events rejected during this step.
    pub events_rejected: u32,
    /// Number of timers fired during this step.
    pub timers_fired: u32,
    /// Whether anything visible changed.
    pub changed: bool,
}

/// Controllers for one mounted page.
///
/// # Lifecycle
///
/// 1. [`PageShell::new`] mounts every controller the page uses.
/// 2. [`PageShell::step`] is called repeatedly from the host loop.
/// 3. [`PageShell::unmount`] (or drop) cancels timers and releases listeners.
pub struct PageShell<C: Clock = DeterministicClock> {
    page: Page,
    clock: C,
    timers: TimerQueue<ShellTimer>,
    scroll: ScrollSignal,
    gate: VisitGate,
    header: ScrollVisibility,
    nav: NavMenu,
    faq: Option<DisclosureGroup>,
    gallery: Option<GalleryState>,
    catalog: Vec<GalleryItem>,
    events: VecDeque<PageEvent>,
    mounted: bool,
}

impl<C: Clock> PageShell<C> {
    /// Mount `page` at the clock's current time.
    pub fn new(page: Page, config: ShellConfig, store: Arc<dyn KeyValueStore>, clock: C) -> Self {
        let mut timers = TimerQueue::new();
        let scroll = ScrollSignal::new();
        let gate = VisitGate::mount(config.gate, store, &mut timers, clock.now());
        let header = ScrollVisibility::mount(config.scroll, &scroll);
        let faq = (page == Page::Faq)
            .then(|| DisclosureGroup::from_section_sizes(&content::faq_section_sizes()));
        let gallery = (page == Page::Gallery).then(GalleryState::new);
        debug!(%page, splash = ?gate.phase(), "page mounted");
        Self {
            page,
            clock,
            timers,
            scroll,
            gate,
            header,
            nav: NavMenu::new(),
            faq,
            gallery,
            catalog: content::GALLERY.to_vec(),
            events: VecDeque::new(),
            mounted: true,
        }
    }

    /// Mounted page.
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// Whether the shell is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The clock driving timers.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Scroll signal the header controller listens on.
    #[must_use]
    pub fn scroll_signal(&self) -> &ScrollSignal {
        &self.scroll
    }

    /// Current splash phase.
    #[must_use]
    pub fn splash_phase(&self) -> SplashPhase {
        self.gate.phase()
    }

    /// The splash gate.
    #[must_use]
    pub fn gate(&self) -> &VisitGate {
        &self.gate
    }

    /// Timers still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    /// Gallery catalog the page renders.
    #[must_use]
    pub fn catalog(&self) -> &[GalleryItem] {
        &self.catalog
    }

    /// Swap the gallery catalog. An existing selection is kept and may go
    /// stale.
    pub fn replace_catalog(&mut self, catalog: Vec<GalleryItem>) {
        debug!(items = catalog.len(), "gallery catalog replaced");
        self.catalog = catalog;
    }

    /// Queue an event for the next [`step`](Self::step).
    pub fn push_event(&mut self, event: PageEvent) {
        if !self.mounted {
            trace!(kind = event.kind(), "event after unmount dropped");
            return;
        }
        self.events.push_back(event);
    }

    /// Fire due timers, pump the scroll signal, then apply every queued event.
    pub fn step(&mut self) -> StepResult {
        if !self.mounted {
            return StepResult::default();
        }
        let span = debug_span!("page_shell.step", page = %self.page);
        let _guard = span.enter();

        let mut result = StepResult {
            mounted: true,
            ..StepResult::default()
        };

        for fired in self.timers.fire_due(self.clock.now()) {
            result.timers_fired += 1;
            match fired.payload {
                ShellTimer::Gate(timer) => result.changed |= self.gate.on_timer(timer),
            }
        }

        // Offsets the host emitted directly on the signal.
        result.changed |= self.header.pump();

        while let Some(event) = self.events.pop_front() {
            let kind = event.kind();
            match self.apply(event) {
                Ok(changed) => {
                    result.events_processed += 1;
                    result.changed |= changed;
                }
                Err(err) => {
                    result.events_rejected += 1;
                    debug!(kind, error = %err, "event rejected");
                }
            }
        }

        result
    }

    /// Apply one event immediately. Returns whether anything visible changed.
    ///
    /// Fails with [`ShellError::Unmounted`] once the shell is unmounted.
    pub fn apply(&mut self, event: PageEvent) -> Result<bool, ShellError> {
        if !self.mounted {
            return Err(ShellError::Unmounted);
        }
        let page = self.page;
        let not_on_page = |event: &PageEvent| ShellError::NotOnPage {
            event: event.kind(),
            page,
        };
        match event {
            PageEvent::Scroll { offset_y } => {
                self.scroll.emit(offset_y);
                Ok(self.header.pump())
            }
            PageEvent::ToggleNavMenu => {
                self.nav.toggle();
                Ok(true)
            }
            PageEvent::CloseNavMenu => Ok(self.nav.close()),
            PageEvent::TogglePanel { ref id } => {
                let faq = self.faq.as_mut().ok_or_else(|| not_on_page(&event))?;
                faq.toggle_str(id)?;
                Ok(true)
            }
            PageEvent::SetCategory { ref category } => {
                let gallery = self.gallery.as_mut().ok_or_else(|| not_on_page(&event))?;
                let before = gallery.category();
                Ok(gallery.set_category(category)? != before)
            }
            PageEvent::SelectItem { id } => {
                let gallery = self.gallery.as_mut().ok_or_else(|| not_on_page(&event))?;
                let before = gallery.selected();
                gallery.select(&self.catalog, ItemId(id))?;
                Ok(before != Some(ItemId(id)))
            }
            PageEvent::ClearSelection => {
                let gallery = self.gallery.as_mut().ok_or_else(|| not_on_page(&event))?;
                Ok(gallery.clear_selection())
            }
        }
    }

    /// What to render right now.
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        let splash = self.gate.overlay();
        let header_hidden = self.header.header_hidden();
        let nav_open = self.nav.is_open();
        let gallery = self.gallery.as_ref().map(|state| GalleryView {
            category: state.category(),
            chips: state.filter_chips(),
            visible: state
                .filtered(&self.catalog)
                .into_iter()
                .map(|item| item.id)
                .collect(),
            lightbox: state.lightbox(&self.catalog).into(),
        });

        let mut layers = LayerFlags::empty();
        layers.set(LayerFlags::SPLASH, splash.is_some());
        layers.set(
            LayerFlags::SPLASH_FADING,
            self.gate.phase() == SplashPhase::FadingOut,
        );
        layers.set(LayerFlags::HEADER_HIDDEN, header_hidden);
        layers.set(LayerFlags::NAV_OPEN, nav_open);
        layers.set(
            LayerFlags::LIGHTBOX,
            gallery
                .as_ref()
                .is_some_and(|view| view.lightbox != LightboxView::Closed),
        );

        PageSnapshot {
            page: self.page,
            splash,
            header_hidden,
            nav_open,
            open_panels: self
                .faq
                .as_ref()
                .map(DisclosureGroup::open_ids)
                .unwrap_or_default(),
            gallery,
            layers,
        }
    }

    /// Cancel all timers, release listeners and drop queued events.
    ///
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.gate.unmount(&mut self.timers);
        self.header.unmount();
        self.timers.cancel_all();
        self.events.clear();
        self.mounted = false;
        debug!(page = %self.page, "page unmounted");
    }
}

impl PageShell<DeterministicClock> {
    /// Mount `page` on a host-advanced clock starting at zero.
    pub fn deterministic(page: Page, config: ShellConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(page, config, store, DeterministicClock::new())
    }

    /// Advance the deterministic clock. Timers fire on the next step.
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }
}

impl<C: Clock> Drop for PageShell<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<C: Clock> fmt::Debug for PageShell<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageShell")
            .field("page", &self.page)
            .field("gate", &self.gate)
            .field("header_hidden", &self.header.header_hidden())
            .field("nav", &self.nav)
            .field("pending_timers", &self.timers.pending_count())
            .field("queued_events", &self.events.len())
            .field("mounted", &self.mounted)
            .finish()
    }
}
