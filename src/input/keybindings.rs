//! Default key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// Rows moved by one arrow key or wheel notch.
pub const SCROLL_STEP: u16 = 1;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Combo for an incoming event. Shift is dropped for character keys,
    /// since the character already carries it.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);

        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('p')] {
            bindings.insert(KeyCombo::plain(code), Command::ToggleExpansion);
        }

        for code in [KeyCode::Up, KeyCode::Char('k')] {
            bindings.insert(KeyCombo::plain(code), Command::ScrollUp(SCROLL_STEP));
        }
        for code in [KeyCode::Down, KeyCode::Char('j')] {
            bindings.insert(KeyCombo::plain(code), Command::ScrollDown(SCROLL_STEP));
        }

        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        bindings.insert(KeyCombo::plain(KeyCode::Esc), Command::Quit);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        Self { bindings }
    }

    pub fn get(&self, combo: &KeyCombo) -> Option<Command> {
        self.bindings.get(combo).copied()
    }

    /// Command for a key event. Releases and repeats of non-scroll keys are
    /// ignored so a held key does not flicker the theme.
    pub fn dispatch(&self, key: &KeyEvent) -> Option<Command> {
        let command = self.get(&KeyCombo::from_event(key))?;
        match (key.kind, command) {
            (KeyEventKind::Press, _) => Some(command),
            (KeyEventKind::Repeat, Command::ScrollUp(_) | Command::ScrollDown(_)) => Some(command),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_default_bindings() {
        let config = KeybindingConfig::new();
        assert_eq!(config.dispatch(&press(KeyCode::Char('t'))), Some(Command::ToggleTheme));
        assert_eq!(config.dispatch(&press(KeyCode::Enter)), Some(Command::ToggleExpansion));
        assert_eq!(config.dispatch(&press(KeyCode::Char(' '))), Some(Command::ToggleExpansion));
        assert_eq!(config.dispatch(&press(KeyCode::Char('p'))), Some(Command::ToggleExpansion));
        assert_eq!(config.dispatch(&press(KeyCode::Down)), Some(Command::ScrollDown(1)));
        assert_eq!(config.dispatch(&press(KeyCode::Char('k'))), Some(Command::ScrollUp(1)));
        assert_eq!(config.dispatch(&press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(config.dispatch(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_does_not() {
        let config = KeybindingConfig::new();
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(config.dispatch(&ctrl_c), Some(Command::Quit));
        assert_eq!(config.dispatch(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_shift_is_ignored_for_chars() {
        let config = KeybindingConfig::new();
        let shifted = key(KeyCode::Char('t'), KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(config.dispatch(&shifted), Some(Command::ToggleTheme));
    }

    #[test]
    fn test_repeat_only_scrolls() {
        let config = KeybindingConfig::new();
        let held_down = key(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Repeat);
        let held_t = key(KeyCode::Char('t'), KeyModifiers::NONE, KeyEventKind::Repeat);
        let released = key(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(config.dispatch(&held_down), Some(Command::ScrollDown(1)));
        assert_eq!(config.dispatch(&held_t), None);
        assert_eq!(config.dispatch(&released), None);
    }
}
