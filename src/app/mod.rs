//! Application state for the TUI.
//!
//! [`App`] owns the card, the theme and the per-frame bookkeeping (hit
//! areas, scroll, hover). Input arrives as [`Command`]s; time arrives through
//! [`App::tick`].

mod card;

pub use card::CardState;

use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tokio::sync::watch;
use tracing::debug;

use crate::config::AppConfig;
use crate::input::{Command, KeybindingConfig, SCROLL_STEP};
use crate::theme::{Palette, ThemeMode, ThemeState};
use crate::ui::hit_area::{ClickAction, HitAreaRegistry};

impl From<ClickAction> for Command {
    fn from(action: ClickAction) -> Self {
        match action {
            ClickAction::ToggleTheme => Command::ToggleTheme,
            ClickAction::ToggleExpansion => Command::ToggleExpansion,
        }
    }
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub theme: ThemeState,
    /// Observes theme changes, whoever made them
    theme_rx: watch::Receiver<ThemeMode>,
    pub card: CardState,
    keybindings: KeybindingConfig,
    /// Rebuilt on every draw
    pub hit_areas: HitAreaRegistry,
    /// Rows of the list scrolled off the top
    pub list_scroll: u16,
    /// Upper bound for `list_scroll`, known after the last draw
    pub max_list_scroll: u16,
    /// Last mouse position, for hover styling
    pub mouse_position: Option<Position>,
    /// Dirty flag: set on state changes, cleared after each draw.
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub tick_count: u64,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let theme = ThemeState::new(config.theme);
        let theme_rx = theme.subscribe();
        let card = CardState::new(config.timing);
        Self {
            config,
            theme,
            theme_rx,
            card,
            keybindings: KeybindingConfig::new(),
            hit_areas: HitAreaRegistry::new(),
            list_scroll: 0,
            max_list_scroll: 0,
            mouse_position: None,
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
        }
    }

    /// App with the list already expanded, for static snapshots.
    pub fn preview(config: AppConfig) -> Self {
        let mut app = Self::new(config);
        app.card.snap_expanded();
        app
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations to `now`. Keeps the dirty flag up while anything
    /// is moving.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.theme_rx.has_changed().unwrap_or(false) {
            self.theme_rx.mark_unchanged();
            self.mark_dirty();
        }

        let animating = self.card.section.is_animating(now);
        if self.card.section.update(now) || animating {
            self.mark_dirty();
        }
    }

    pub fn execute(&mut self, command: Command, now: Instant) {
        debug!(command = command.name(), "executing command");
        match command {
            Command::ToggleTheme => self.theme.toggle(),
            Command::ToggleExpansion => {
                self.card.toggle_expansion(now);
                if !self.card.is_expanded() {
                    self.list_scroll = 0;
                }
            }
            Command::ScrollUp(rows) => self.scroll_list(-i32::from(rows)),
            Command::ScrollDown(rows) => self.scroll_list(i32::from(rows)),
            Command::Quit => self.should_quit = true,
        }
        self.mark_dirty();
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        if let Some(command) = self.keybindings.dispatch(key) {
            self.execute(command, now);
        }
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    self.execute(action.into(), now);
                }
            }
            MouseEventKind::ScrollUp => self.execute(Command::ScrollUp(SCROLL_STEP), now),
            MouseEventKind::ScrollDown => self.execute(Command::ScrollDown(SCROLL_STEP), now),
            MouseEventKind::Moved => {
                if self.mouse_position != Some(position) {
                    self.mouse_position = Some(position);
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn scroll_list(&mut self, delta: i32) {
        let next = (i32::from(self.list_scroll) + delta).clamp(0, i32::from(self.max_list_scroll));
        self.list_scroll = next as u16;
    }
}
