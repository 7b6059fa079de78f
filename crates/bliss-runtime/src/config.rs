#![forbid(unsafe_code)]

//! Configuration for the presentation controllers.
//!
//! Plain structs with defaults and `#[must_use]` builder methods. The only
//! external source is the process environment, read through
//! [`ShellConfig::from_env`]; tests use [`ShellConfig::from_lookup`] with a
//! closure instead of mutating the environment.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `BLISS_SPLASH_KEY` | [`GateConfig::storage_key`] | `blissful-splash-seen` |
//! | `BLISS_SPLASH_HOLD_MS` | [`GateConfig::hold`] | 2600 |
//! | `BLISS_SPLASH_FADE_MS` | [`GateConfig::fade`] | 500 |
//! | `BLISS_SCROLL_THRESHOLD_PX` | [`ScrollConfig::threshold_px`] | 10 |

use core::time::Duration;
use std::fmt;

/// Storage key under which the splash marker is persisted.
pub const DEFAULT_SPLASH_KEY: &str = "blissful-splash-seen";

/// Marker value written once the splash has been shown.
pub const SPLASH_MARKER: &str = "1";

/// Total time the splash stays mounted.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(2600);

/// Length of the opacity fade at the end of the hold.
pub const DEFAULT_FADE: Duration = Duration::from_millis(500);

/// Offset at or below which the header is always shown.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Error raised when a configuration value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A value was present but could not be parsed or was out of range.
    InvalidValue {
        /// Environment variable name.
        key: &'static str,
        /// Raw value as found.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Splash gate timing and persistence key.
#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    /// Storage key for the visit record.
    pub storage_key: String,
    /// Value written under `storage_key`.
    pub marker: String,
    /// Total time from mount to dismissal.
    pub hold: Duration,
    /// Fade duration at the end of `hold`.
    pub fade: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_SPLASH_KEY.to_owned(),
            marker: SPLASH_MARKER.to_owned(),
            hold: DEFAULT_HOLD,
            fade: DEFAULT_FADE,
        }
    }
}

impl GateConfig {
    /// Set the storage key.
    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the hold duration.
    #[must_use]
    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Set the fade duration.
    #[must_use]
    pub fn fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// Delay from mount until the fade starts, clamped at zero.
    #[must_use]
    pub fn fade_start(&self) -> Duration {
        self.hold.saturating_sub(self.fade)
    }
}

/// Header auto-hide tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Offsets at or below this never hide the header.
    pub threshold_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

impl ScrollConfig {
    /// Set the threshold.
    #[must_use]
    pub fn threshold_px(mut self, threshold_px: f64) -> Self {
        self.threshold_px = threshold_px;
        self
    }
}

/// Configuration for a mounted page shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellConfig {
    /// Splash gate settings.
    pub gate: GateConfig,
    /// Header visibility settings.
    pub scroll: ScrollConfig,
}

impl ShellConfig {
    /// Replace the gate settings.
    #[must_use]
    pub fn with_gate(mut self, gate: GateConfig) -> Self {
        self.gate = gate;
        self
    }

    /// Replace the scroll settings.
    #[must_use]
    pub fn with_scroll(mut self, scroll: ScrollConfig) -> Self {
        self.scroll = scroll;
        self
    }

    /// Defaults overridden by `BLISS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `BLISS_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = lookup("BLISS_SPLASH_KEY") {
            let trimmed = key.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "BLISS_SPLASH_KEY",
                    value: key,
                });
            }
            config.gate.storage_key = trimmed.to_owned();
        }
        if let Some(hold) = parse_millis(&lookup, "BLISS_SPLASH_HOLD_MS")? {
            config.gate.hold = hold;
        }
        if let Some(fade) = parse_millis(&lookup, "BLISS_SPLASH_FADE_MS")? {
            config.gate.fade = fade;
        }
        if let Some(raw) = lookup("BLISS_SCROLL_THRESHOLD_PX") {
            let threshold = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "BLISS_SCROLL_THRESHOLD_PX",
                    value: raw.clone(),
                })?;
            config.scroll.threshold_px = threshold;
        }

        tracing::debug!(
            storage_key = %config.gate.storage_key,
            hold_ms = config.gate.hold.as_millis() as u64,
            fade_ms = config.gate.fade.as_millis() as u64,
            threshold_px = config.scroll.threshold_px,
            "shell config resolved"
        );
        Ok(config)
    }
}

fn parse_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
