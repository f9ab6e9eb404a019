//! Keyboard input.
//!
//! ```text
//! KeyEvent -> KeybindingConfig::dispatch() -> Command -> App::execute()
//! ```
//!
//! Mouse input goes through the UI's hit areas instead and ends up as the
//! same [`Command`].

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig, SCROLL_STEP};
