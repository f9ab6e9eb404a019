//! Light/dark theme state.
//!
//! [`ThemeState`] owns the current [`ThemeMode`] for the session and
//! publishes every change on a `watch` channel, so views that care can
//! subscribe instead of polling a global.

mod palette;

pub use palette::Palette;

use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        Palette::for_mode(self)
    }
}

#[derive(Debug)]
pub struct ThemeState {
    sender: watch::Sender<ThemeMode>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        let (sender, _) = watch::channel(mode);
        Self { sender }
    }

    pub fn current(&self) -> ThemeMode {
        *self.sender.borrow()
    }

    /// Flip between light and dark and notify subscribers.
    pub fn toggle(&self) {
        let next = self.current().toggled();
        self.sender.send_replace(next);
        info!(mode = ?next, "theme toggled");
    }

    /// Receiver that observes every future toggle.
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.sender.subscribe()
    }

    pub fn palette(&self) -> Palette {
        self.current().palette()
    }
}
