#![forbid(unsafe_code)]

//! Passive scroll signal with scoped listener registration.
//!
//! The host pushes vertical offsets into a [`ScrollSignal`]; controllers
//! receive them through a [`ScrollListener`]. A listener is the only way to
//! subscribe, and dropping it (or calling [`ScrollListener::release`])
//! removes the registration, so a listener can never outlive the controller
//! that owns it.
//!
//! # How it works
//!
//! 1. [`ScrollSignal::subscribe`] registers a channel sender under a fresh [`SubId`].
//! 2. [`ScrollSignal::emit`] records the latest offset and forwards it to every live sender.
//! 3. The owner drains its listener with [`ScrollListener::drain`] on its own schedule.
//! 4. Release removes the sender; emitting afterwards reaches nobody.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard};

/// A unique identifier for a subscription.
pub type SubId = u64;

#[derive(Default)]
struct Registry {
    senders: Vec<(SubId, mpsc::Sender<f64>)>,
    next_id: SubId,
    last_offset: f64,
}

fn lock(inner: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    // A poisoned registry still holds a consistent sender list.
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Host-side scroll signal.
///
/// Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    inner: Arc<Mutex<Registry>>,
}

impl ScrollSignal {
    /// Create a signal whose current offset is `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signal starting at `offset` (the page may load scrolled).
    #[must_use]
    pub fn with_offset(offset: f64) -> Self {
        let signal = Self::default();
        lock(&signal.inner).last_offset = offset;
        signal
    }

    /// Latest offset emitted by the host.
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        lock(&self.inner).last_offset
    }

    /// Register a listener. The registration lives as long as the returned guard.
    #[must_use = "dropping the listener unsubscribes immediately"]
    pub fn subscribe(&self) -> ScrollListener {
        let (sender, receiver) = mpsc::channel();
        let mut registry = lock(&self.inner);
        registry.next_id = registry.next_id.wrapping_add(1);
        let id = registry.next_id;
        registry.senders.push((id, sender));
        tracing::debug!(
            sub_id = id,
            listeners = registry.senders.len(),
            "scroll listener added"
        );

        ScrollListener {
            id,
            receiver,
            registry: Arc::clone(&self.inner),
            released: false,
        }
    }

    /// Publish a new offset to every registered listener.
    ///
    /// Returns the number of listeners reached.
    pub fn emit(&self, offset: f64) -> usize {
        let mut registry = lock(&self.inner);
        registry.last_offset = offset;
        // Prune senders whose receiver is gone.
        registry
            .senders
            .retain(|(_, sender)| sender.send(offset).is_ok());
        registry.senders.len()
    }

    /// Number of live registrations.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.inner).senders.len()
    }
}

impl std::fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = lock(&self.inner);
        f.debug_struct("ScrollSignal")
            .field("listeners", &registry.senders.len())
            .field("last_offset", &registry.last_offset)
            .finish()
    }
}

/// A scoped scroll subscription.
///
/// Unsubscribes on [`release`](Self::release) or on drop, whichever comes first.
pub struct ScrollListener {
    id: SubId,
    receiver: mpsc::Receiver<f64>,
    registry: Arc<Mutex<Registry>>,
    released: bool,
}

impl ScrollListener {
    /// Subscription id.
    #[must_use]
    pub fn id(&self) -> SubId {
        self.id
    }

    /// Take every offset received since the last drain, oldest first.
    pub fn drain(&self) -> Vec<f64> {
        let mut offsets = Vec::new();
        while let Ok(offset) = self.receiver.try_recv() {
            offsets.push(offset);
        }
        offsets
    }

    /// Explicitly unsubscribe.
    pub fn release(mut self) {
        self.unregister();
    }

    fn unregister(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let mut registry = lock(&self.registry);
        registry.senders.retain(|(id, _)| *id != self.id);
        tracing::debug!(
            sub_id = self.id,
            listeners = registry.senders.len(),
            "scroll listener removed"
        );
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.unregister();
    }
}

impl std::fmt::Debug for ScrollListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollListener")
            .field("id", &self.id)
            .field("released", &self.released)
            .finish()
    }
}
