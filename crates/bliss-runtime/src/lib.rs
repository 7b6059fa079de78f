#![forbid(unsafe_code)]

//! Blissful Bites runtime
//!
//! Host-facing plumbing shared by the presentation controllers.
//!
//! # Key Components
//!
//! - [`KeyValueStore`] - Injected client storage capability
//! - [`TimerQueue`] - One-shot timers on a host-driven clock
//! - [`ScrollSignal`] / [`ScrollListener`] - Passive scroll signal with scoped listeners
//! - [`ShellConfig`] - Timing and threshold configuration

pub mod config;
pub mod storage;
pub mod subscription;
pub mod timer;

pub use config::{ConfigError, GateConfig, ScrollConfig, ShellConfig};
#[cfg(feature = "state-persistence")]
pub use storage::FileStore;
pub use storage::{
    KeyValueStore, MemoryStore, StorageError, StorageResult, UnavailableStore,
};
pub use subscription::{ScrollListener, ScrollSignal, SubId};
pub use timer::{Fired, TimerHandle, TimerId, TimerQueue};
