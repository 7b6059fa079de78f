//! Visit record persistence across page loads through a JSON file.
//!
//!   cargo test -p bliss-web --features state-persistence --test file_persistence

#![cfg(feature = "state-persistence")]

use std::sync::Arc;
use std::time::Duration;

use bliss_runtime::{FileStore, KeyValueStore, ShellConfig};
use bliss_web::{Page, PageShell};
use bliss_widgets::SplashPhase;
use tempfile::TempDir;

fn load(path: &std::path::Path) -> PageShell {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(path));
    PageShell::deterministic(Page::Home, ShellConfig::default(), store)
}

#[test]
fn record_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("visit.json");

    let mut first = load(&path);
    assert_eq!(first.splash_phase(), SplashPhase::Visible);
    first.advance_time(Duration::from_millis(2_600));
    first.step();
    assert_eq!(first.splash_phase(), SplashPhase::Hidden);
    drop(first);

    assert!(path.exists());
    let second = load(&path);
    assert_eq!(second.splash_phase(), SplashPhase::Hidden);
    assert_eq!(second.pending_timers(), 0);
}

#[test]
fn corrupt_file_degrades_to_splash() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("visit.json");
    std::fs::write(&path, "not json").unwrap();

    let shell = load(&path);
    assert_eq!(shell.splash_phase(), SplashPhase::Visible);
}
