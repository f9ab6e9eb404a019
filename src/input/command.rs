//! Commands the card reacts to, decoupled from the keys that trigger them.

/// A user action, from either the keyboard or the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch between light and dark palettes
    ToggleTheme,
    /// Expand or collapse the fruit projects list
    ToggleExpansion,
    /// Scroll the list by the given number of rows
    ScrollUp(u16),
    ScrollDown(u16),
    Quit,
}

impl Command {
    /// Name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ToggleTheme => "toggle_theme",
            Command::ToggleExpansion => "toggle_expansion",
            Command::ScrollUp(_) => "scroll_up",
            Command::ScrollDown(_) => "scroll_down",
            Command::Quit => "quit",
        }
    }
}
