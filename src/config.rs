//! Runtime configuration.
//!
//! Values come from the environment first (`BIZCARD_DARK`, `BIZCARD_TICK_MS`,
//! `BIZCARD_EASING`) and are then overridden by command-line flags.
//!
//! The environment is read before a log subscriber exists, so values that
//! fail to parse are handed back as [`RejectedVar`]s for the caller to report
//! once logging is up.

use std::fmt;
use std::time::Duration;

use crate::animation::{AnimationTiming, Easing};
use crate::cli::RunOptions;
use crate::theme::ThemeMode;

/// Frame tick when nothing overrides it (~60fps).
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

const MIN_TICK_MS: u64 = 8;
const MAX_TICK_MS: u64 = 100;

/// Snapshot size used by `--preview` without `--size`.
pub const DEFAULT_PREVIEW_SIZE: (u16, u16) = (60, 48);

/// An environment variable whose value was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedVar {
    pub name: &'static str,
    pub value: String,
}

impl RejectedVar {
    fn new(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }

    pub fn log(&self) {
        tracing::warn!(name = self.name, value = %self.value, "ignoring environment variable");
    }
}

impl fmt::Display for RejectedVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ignoring {}={:?}", self.name, self.value)
    }
}

/// Configuration for a run of the app.
///
/// # Example
///
/// ```
/// use bizcard::config::AppConfig;
/// use bizcard::theme::ThemeMode;
///
/// let config = AppConfig::default().with_theme(ThemeMode::Dark);
/// assert_eq!(config.theme, ThemeMode::Dark);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Theme at startup
    pub theme: ThemeMode,
    /// Frame tick for the event loop
    pub tick: Duration,
    /// Render one static expanded frame to stdout instead of running
    pub preview: bool,
    /// Width and height of the preview frame
    pub preview_size: (u16, u16),
    pub timing: AnimationTiming,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            tick: DEFAULT_TICK,
            preview: false,
            preview_size: DEFAULT_PREVIEW_SIZE,
            timing: AnimationTiming::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set the frame tick, clamped to a sane range.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = clamp_tick(tick);
        self
    }

    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn with_preview_size(mut self, width: u16, height: u16) -> Self {
        self.preview_size = (width, height);
        self
    }

    /// Build from the process environment.
    pub fn from_env() -> (Self, Vec<RejectedVar>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup, along with every value that
    /// was ignored.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<RejectedVar>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if lookup("BIZCARD_DARK").is_some_and(|value| is_truthy(&value)) {
            config.theme = ThemeMode::Dark;
        }

        if let Some(raw) = lookup("BIZCARD_TICK_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config = config.with_tick(Duration::from_millis(ms)),
                Err(_) => rejected.push(RejectedVar::new("BIZCARD_TICK_MS", &raw)),
            }
        }

        if let Some(raw) = lookup("BIZCARD_EASING") {
            match Easing::from_name(raw.trim()) {
                Some(easing) => config.timing.easing = easing,
                None => rejected.push(RejectedVar::new("BIZCARD_EASING", &raw)),
            }
        }

        (config, rejected)
    }

    /// Apply command-line options on top of this config.
    pub fn apply(mut self, options: &RunOptions) -> Self {
        if options.dark {
            self.theme = ThemeMode::Dark;
        }
        if options.preview {
            self.preview = true;
        }
        if let Some((width, height)) = options.size {
            self.preview_size = (width, height);
        }
        self
    }
}

fn clamp_tick(tick: Duration) -> Duration {
    let ms = (tick.as_millis() as u64).clamp(MIN_TICK_MS, MAX_TICK_MS);
    Duration::from_millis(ms)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
