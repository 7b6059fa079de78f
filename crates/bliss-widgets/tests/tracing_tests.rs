#![forbid(unsafe_code)]
#![cfg(feature = "tracing")]

//! Log event integration tests.
//!
//! Degraded storage must never surface as an error, but it must be visible
//! in the logs. These tests capture events emitted by the controllers.
//!
//!   cargo test -p bliss-widgets --test tracing_tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bliss_runtime::{GateConfig, KeyValueStore, MemoryStore, TimerQueue, UnavailableStore};
use bliss_widgets::{GalleryState, VisitGate};

use tracing_subscriber::layer::SubscriberExt;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured log event.
#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
}

/// A tracing Layer that records every event.
struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

/// Visitor that extracts the `message` field.
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0 = value.to_string();
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

fn with_captured_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    events.lock().unwrap().clone()
}

fn run_gate(store: Arc<dyn KeyValueStore>) {
    let mut timers = TimerQueue::new();
    let mut gate = VisitGate::mount(GateConfig::default(), store, &mut timers, Duration::ZERO);
    for fired in timers.fire_due(Duration::from_secs(3)) {
        gate.on_timer(fired.payload);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn unreadable_storage_logs_warning() {
    let events = with_captured_events(|| run_gate(Arc::new(UnavailableStore::default())));

    let warnings: Vec<_> = events
        .iter()
        .filter(|e| e.level == tracing::Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1, "events: {events:?}");
    assert!(warnings[0].message.contains("without persistence"));
}

#[test]
fn healthy_first_visit_logs_no_warnings() {
    let events = with_captured_events(|| run_gate(Arc::new(MemoryStore::new())));

    assert!(events.iter().all(|e| e.level != tracing::Level::WARN));
    assert!(events.iter().any(|e| e.message == "visit recorded"));
    assert!(events.iter().any(|e| e.message == "splash shown"));
}

#[test]
fn rejected_category_logs_at_debug_only() {
    let events = with_captured_events(|| {
        let mut state = GalleryState::new();
        assert!(state.set_category("croissants").is_err());
    });

    assert!(
        events
            .iter()
            .any(|e| e.level == tracing::Level::DEBUG && e.message.contains("rejected"))
    );
    assert!(events.iter().all(|e| e.level > tracing::Level::INFO));
}
