//! End-to-end page flows through the host-driven shell.
//!
//!   cargo test -p bliss-web --test page_shell_flow

use std::sync::Arc;
use std::time::Duration;

use bliss_core::PageEvent;
use bliss_runtime::{
    GateConfig, KeyValueStore, MemoryStore, ScrollConfig, ShellConfig, UnavailableStore,
};
use bliss_web::{LayerFlags, LightboxView, Page, PageShell};
use bliss_widgets::{
    Category, FALLBACK_IMAGE, GalleryItem, ItemId, Opacity, PanelId, Persistence, SplashPhase,
};
use pretty_assertions::assert_eq;

const KEY: &str = "blissful-splash-seen";

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn mount(page: Page, store: Arc<MemoryStore>) -> PageShell {
    PageShell::deterministic(page, ShellConfig::default(), store)
}

fn tick(shell: &mut PageShell, dt: u64) {
    shell.advance_time(ms(dt));
    shell.step();
}

#[test]
fn first_visit_splash_then_return_visit() {
    let store = Arc::new(MemoryStore::new());
    let mut shell = mount(Page::Home, store.clone());

    let snap = shell.snapshot();
    assert_eq!(snap.splash.map(|s| s.opacity), Some(Opacity::Opaque));
    assert_eq!(shell.pending_timers(), 2);

    tick(&mut shell, 2_099);
    assert_eq!(shell.splash_phase(), SplashPhase::Visible);

    tick(&mut shell, 1);
    assert_eq!(shell.splash_phase(), SplashPhase::FadingOut);
    assert_eq!(store.write_count(), 0);

    tick(&mut shell, 500);
    assert_eq!(shell.splash_phase(), SplashPhase::Hidden);
    assert_eq!(shell.snapshot().splash, None);
    assert_eq!(store.write_count(), 1);
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("1"));
    drop(shell);

    // Navigating to another page re-mounts the gate against the same record.
    let shell = mount(Page::Menu, store.clone());
    assert_eq!(shell.splash_phase(), SplashPhase::Hidden);
    assert_eq!(shell.pending_timers(), 0);
    assert_eq!(store.write_count(), 1);
}

#[test]
fn leaving_before_hold_never_records() {
    let store = Arc::new(MemoryStore::new());
    let mut shell = mount(Page::Home, store.clone());
    tick(&mut shell, 2_300);
    assert_eq!(shell.splash_phase(), SplashPhase::FadingOut);

    shell.unmount();
    shell.advance_time(ms(10_000));
    shell.step();
    assert_eq!(store.write_count(), 0);

    let shell = mount(Page::Home, store);
    assert_eq!(shell.splash_phase(), SplashPhase::Visible);
}

#[test]
fn disabled_storage_shows_splash_every_load() {
    for _ in 0..2 {
        let store: Arc<dyn KeyValueStore> = Arc::new(UnavailableStore::default());
        let mut shell = PageShell::deterministic(Page::Home, ShellConfig::default(), store);
        assert_eq!(shell.splash_phase(), SplashPhase::Visible);
        assert_eq!(shell.gate().persistence(), Persistence::Degraded);
        tick(&mut shell, 3_000);
        assert_eq!(shell.splash_phase(), SplashPhase::Hidden);
        assert!(!shell.gate().recorded());
    }
}

#[test]
fn header_hides_on_scroll_down_and_returns_on_scroll_up() {
    let store = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = mount(Page::Home, store);

    let mut hidden = Vec::new();
    for offset in [0.0, 50.0, 120.0, 80.0, 5.0] {
        shell.push_event(PageEvent::Scroll { offset_y: offset });
        shell.step();
        hidden.push(shell.snapshot().header_hidden);
    }
    assert_eq!(hidden, vec![false, true, true, false, false]);
}

#[test]
fn step_pumps_offsets_emitted_on_the_signal() {
    let store = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = mount(Page::Home, store);
    let signal = shell.scroll_signal().clone();

    let mut hidden = Vec::new();
    for offset in [0.0, 50.0, 120.0, 80.0, 5.0] {
        signal.emit(offset);
        shell.step();
        hidden.push(shell.snapshot().header_hidden);
    }
    assert_eq!(hidden, vec![false, true, true, false, false]);

    signal.emit(50.0);
    signal.emit(120.0);
    let result = shell.step();
    assert!(result.changed);
    assert_eq!(result.events_processed, 0);
    assert!(shell.snapshot().header_hidden);
}

#[test]
fn scroll_threshold_comes_from_config() {
    let config = ShellConfig::default().with_scroll(ScrollConfig::default().threshold_px(200.0));
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = PageShell::deterministic(Page::About, config, store);

    shell.push_event(PageEvent::Scroll { offset_y: 150.0 });
    shell.step();
    assert!(!shell.snapshot().header_hidden);

    shell.push_event(PageEvent::Scroll { offset_y: 250.0 });
    shell.step();
    assert!(shell.snapshot().layers.contains(LayerFlags::HEADER_HIDDEN));
}

#[test]
fn faq_panels_open_independently() {
    let store = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = mount(Page::Faq, store);

    shell.push_event(PageEvent::TogglePanel { id: "2-1".into() });
    shell.push_event(PageEvent::TogglePanel { id: "2-1".into() });
    shell.step();
    assert_eq!(shell.snapshot().open_panels, Vec::<PanelId>::new());

    shell.push_event(PageEvent::TogglePanel { id: "0-0".into() });
    shell.push_event(PageEvent::TogglePanel { id: "1-2".into() });
    let result = shell.step();
    assert_eq!(result.events_processed, 2);
    assert_eq!(
        shell.snapshot().open_panels,
        vec![PanelId::new(0, 0), PanelId::new(1, 2)]
    );

    // Section 1 only has three questions.
    shell.push_event(PageEvent::TogglePanel { id: "1-3".into() });
    let result = shell.step();
    assert_eq!(result.events_rejected, 1);
    assert!(!result.changed);
    assert_eq!(shell.snapshot().open_panels.len(), 2);
}

#[test]
fn gallery_filter_select_and_clear() {
    let store = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = mount(Page::Gallery, store);
    shell.replace_catalog(vec![
        GalleryItem::new(1, Category::Cookies, "Chunky filled cookies", "/a.jpg"),
        GalleryItem::new(2, Category::Cakes, "Plum cake", "/b.jpg"),
        GalleryItem::new(3, Category::Cookies, "Cookies box", "/c.jpg"),
    ]);

    shell.push_event(PageEvent::SetCategory {
        category: "cookies".into(),
    });
    shell.step();
    let view = shell.snapshot().gallery.unwrap();
    assert_eq!(view.category, Category::Cookies);
    assert_eq!(view.visible, vec![ItemId(1), ItemId(3)]);

    shell.push_event(PageEvent::SelectItem { id: 3 });
    shell.step();
    let snap = shell.snapshot();
    assert!(snap.layers.contains(LayerFlags::LIGHTBOX));
    assert!(matches!(
        snap.gallery.unwrap().lightbox,
        LightboxView::Image(item) if item.id == ItemId(3)
    ));

    shell.push_event(PageEvent::ClearSelection);
    shell.push_event(PageEvent::ClearSelection);
    let result = shell.step();
    assert_eq!(result.events_processed, 2);
    assert_eq!(
        shell.snapshot().gallery.unwrap().lightbox,
        LightboxView::Closed
    );
}

#[test]
fn cookie_filter_over_ten_items() {
    let store = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = mount(Page::Gallery, store);
    let categories = [
        Category::Cookies,
        Category::Cakes,
        Category::Brownies,
        Category::Cookies,
        Category::Pastries,
        Category::Donuts,
        Category::Cookies,
        Category::Macarons,
        Category::Cupcakes,
        Category::Specialty,
    ];
    shell.replace_catalog(
        categories
            .iter()
            .enumerate()
            .map(|(i, &c)| GalleryItem::new(i as u32 + 1, c, "item", "/item.jpg"))
            .collect(),
    );

    shell.push_event(PageEvent::SetCategory {
        category: "Cookies".into(),
    });
    shell.step();
    assert_eq!(
        shell.snapshot().gallery.unwrap().visible,
        vec![ItemId(1), ItemId(4), ItemId(7)]
    );

    shell.push_event(PageEvent::SetCategory {
        category: "All".into(),
    });
    shell.step();
    assert_eq!(shell.snapshot().gallery.unwrap().visible.len(), 10);
}

#[test]
fn stale_selection_shows_fallback() {
    let store = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = mount(Page::Gallery, store);
    shell.push_event(PageEvent::SelectItem { id: 90 });
    shell.step();

    let trimmed: Vec<_> = shell
        .catalog()
        .iter()
        .filter(|item| item.id != ItemId(90))
        .copied()
        .collect();
    shell.replace_catalog(trimmed);

    assert_eq!(
        shell.snapshot().gallery.unwrap().lightbox,
        LightboxView::NoImage {
            id: ItemId(90),
            fallback_src: FALLBACK_IMAGE,
        }
    );
}

#[test]
fn invalid_category_is_rejected() {
    let store = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = mount(Page::Gallery, store);
    shell.push_event(PageEvent::SetCategory {
        category: "Cakes".into(),
    });
    shell.push_event(PageEvent::SetCategory {
        category: "croissants".into(),
    });
    let result = shell.step();
    assert_eq!(result.events_rejected, 1);
    assert_eq!(shell.snapshot().gallery.unwrap().category, Category::Cakes);
}

#[test]
fn nav_menu_toggles_independently_of_header() {
    let store = Arc::new(MemoryStore::with_entry(KEY, "1"));
    let mut shell = mount(Page::Contact, store);

    shell.push_event(PageEvent::ToggleNavMenu);
    shell.push_event(PageEvent::Scroll { offset_y: 400.0 });
    shell.step();
    let snap = shell.snapshot();
    assert!(snap.nav_open);
    assert!(snap.header_hidden);

    shell.push_event(PageEvent::CloseNavMenu);
    let result = shell.step();
    assert!(result.changed);
    assert!(!shell.snapshot().nav_open);
    assert!(shell.snapshot().header_hidden);
}

#[test]
fn custom_gate_timing() {
    let store = Arc::new(MemoryStore::new());
    let config = ShellConfig::default().with_gate(GateConfig::default().hold(ms(1_000)).fade(ms(200)));
    let mut shell = PageShell::deterministic(Page::Home, config, store.clone());

    tick(&mut shell, 800);
    assert_eq!(shell.splash_phase(), SplashPhase::FadingOut);
    tick(&mut shell, 200);
    assert_eq!(shell.splash_phase(), SplashPhase::Hidden);
    assert_eq!(store.write_count(), 1);
}

#[test]
fn drop_releases_everything() {
    let store = Arc::new(MemoryStore::new());
    let shell = mount(Page::Gallery, store.clone());
    assert_eq!(shell.scroll_signal().listener_count(), 1);
    let signal = shell.scroll_signal().clone();
    drop(shell);
    assert_eq!(signal.listener_count(), 0);
    assert_eq!(store.write_count(), 0);
}
