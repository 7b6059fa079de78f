#![forbid(unsafe_code)]

//! Host-driven one-shot timers with cancellable handles.
//!
//! A [`TimerQueue`] replaces `setTimeout`/`clearTimeout` for controllers that
//! must not read wall-clock time. Deadlines are expressed against the page
//! shell's monotonic clock; the shell calls [`TimerQueue::fire_due`] after
//! advancing time.
//!
//! # Invariants
//!
//! 1. A timer fires at most once.
//! 2. A cancelled timer never fires, even if its deadline has already passed
//!    when [`TimerQueue::fire_due`] runs.
//! 3. Due timers fire in deadline order; ties fire in scheduling order.
//! 4. Every [`TimerHandle`] shares a liveness flag with its queue entry, so a
//!    handle dropped by an unmounted controller can still be checked or
//!    cancelled from either side.

use core::time::Duration;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Identifier of a scheduled timer, unique per queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Handle returned by [`TimerQueue::schedule`].
///
/// Cloning a handle shares the same liveness flag.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    id: TimerId,
    deadline: Duration,
    live: Arc<AtomicBool>,
}

impl TimerHandle {
    /// Id of the underlying timer.
    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Absolute deadline on the owning queue's clock.
    #[must_use]
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Whether the timer is still pending (neither fired nor cancelled).
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Mark the timer dead. The queue drops it on its next pass.
    ///
    /// Returns `true` if this call cancelled a pending timer.
    pub fn cancel(&self) -> bool {
        self.live.swap(false, Ordering::AcqRel)
    }
}

struct Scheduled<T> {
    id: TimerId,
    deadline: Duration,
    payload: T,
    live: Arc<AtomicBool>,
}

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    /// Id of the timer that fired.
    pub id: TimerId,
    /// The deadline it was scheduled for.
    pub deadline: Duration,
    /// Caller-supplied payload.
    pub payload: T,
}

/// One-shot timer queue keyed on a monotonic clock.
pub struct TimerQueue<T> {
    pending: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire once `delay` has elapsed after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, payload: T) -> TimerHandle {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let deadline = now.saturating_add(delay);
        let live = Arc::new(AtomicBool::new(true));

        self.pending.push(Scheduled {
            id,
            deadline,
            payload,
            live: Arc::clone(&live),
        });
        tracing::trace!(
            timer_id = id.0,
            deadline_ms = deadline.as_millis() as u64,
            "timer scheduled"
        );

        TimerHandle { id, deadline, live }
    }

    /// Cancel a timer by handle and drop it from the queue.
    ///
    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, handle: &TimerHandle) -> bool {
        let was_live = handle.cancel();
        self.pending.retain(|s| s.id != handle.id);
        if was_live {
            tracing::trace!(timer_id = handle.id.0, "timer cancelled");
        }
        was_live
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        let count = self.pending.len();
        for scheduled in self.pending.drain(..) {
            scheduled.live.store(false, Ordering::Release);
        }
        if count > 0 {
            tracing::debug!(cancelled = count, "cancelled all pending timers");
        }
    }

    /// Remove and return every live timer whose deadline is `<= now`.
    ///
    /// Entries cancelled through their handle are discarded without firing.
    pub fn fire_due(&mut self, now: Duration) -> Vec<Fired<T>> {
        let mut due = Vec::new();
        let mut keep = Vec::with_capacity(self.pending.len());
        for scheduled in self.pending.drain(..) {
            if !scheduled.live.load(Ordering::Acquire) {
                continue;
            }
            if scheduled.deadline <= now {
                due.push(scheduled);
            } else {
                keep.push(scheduled);
            }
        }
        self.pending = keep;

        // Ids are issued in scheduling order, so (deadline, id) is stable.
        due.sort_by_key(|s| (s.deadline, s.id));
        due.into_iter()
            .map(|s| {
                s.live.store(false, Ordering::Release);
                Fired {
                    id: s.id,
                    deadline: s.deadline,
                    payload: s.payload,
                }
            })
            .collect()
    }

    /// Number of timers still pending (live, not yet fired).
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
            .iter()
            .filter(|s| s.live.load(Ordering::Acquire))
            .count()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .filter(|s| s.live.load(Ordering::Acquire))
            .map(|s| s.deadline)
            .min()
    }

    /// Whether no live timers remain.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending_count() == 0
    }
}

impl<T> std::fmt::Debug for TimerQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.pending_count())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_only_when_due() {
        let mut q = TimerQueue::new();
        q.schedule(ms(0), ms(100), "a");

        assert!(q.fire_due(ms(99)).is_empty());
        let fired = q.fire_due(ms(100));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].payload, "a");
        assert_eq!(fired[0].deadline, ms(100));
        assert!(q.is_idle());
    }

    #[test]
    fn fires_at_most_once() {
        let mut q = TimerQueue::new();
        let h = q.schedule(ms(0), ms(10), 1);
        assert_eq!(q.fire_due(ms(50)).len(), 1);
        assert!(q.fire_due(ms(100)).is_empty());
        assert!(!h.is_live());
    }

    #[test]
    fn ordered_by_deadline_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(0), ms(30), "late");
        q.schedule(ms(0), ms(10), "first");
        q.schedule(ms(0), ms(10), "second");

        let fired: Vec<_> = q.fire_due(ms(30)).into_iter().map(|f| f.payload).collect();
        assert_eq!(fired, vec!["first", "second", "late"]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let h = q.schedule(ms(0), ms(10), ());
        assert!(q.cancel(&h));
        assert!(!q.cancel(&h));
        assert!(q.fire_due(ms(1_000)).is_empty());
    }

    #[test]
    fn handle_cancel_without_queue_access() {
        let mut q = TimerQueue::new();
        let h = q.schedule(ms(0), ms(10), ());
        // Overdue but cancelled through the handle alone.
        assert!(h.cancel());
        assert_eq!(q.pending_count(), 0);
        assert!(q.fire_due(ms(20)).is_empty());
    }

    #[test]
    fn cancel_all_clears_pending() {
        let mut q = TimerQueue::new();
        let a = q.schedule(ms(0), ms(10), 1);
        let b = q.schedule(ms(0), ms(20), 2);
        q.cancel_all();
        assert!(!a.is_live());
        assert!(!b.is_live());
        assert!(q.is_idle());
        assert!(q.fire_due(ms(100)).is_empty());
    }

    #[test]
    fn next_deadline_tracks_earliest_live() {
        let mut q = TimerQueue::new();
        assert_eq!(q.next_deadline(), None);
        let early = q.schedule(ms(5), ms(10), ());
        q.schedule(ms(5), ms(50), ());
        assert_eq!(q.next_deadline(), Some(ms(15)));
        early.cancel();
        assert_eq!(q.next_deadline(), Some(ms(55)));
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let mut q = TimerQueue::new();
        q.schedule(ms(40), Duration::ZERO, ());
        assert_eq!(q.fire_due(ms(40)).len(), 1);
    }

    #[test]
    fn ids_are_unique() {
        let mut q = TimerQueue::new();
        let a = q.schedule(ms(0), ms(1), ());
        let b = q.schedule(ms(0), ms(1), ());
        assert_ne!(a.id(), b.id());
        assert!(a.id() < b.id());
    }
}
