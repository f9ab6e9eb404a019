//! Escape sequences for entering and leaving TUI mode.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen, capture the mouse and hide the cursor.
///
/// Raw mode is enabled separately by the caller.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Undo [`enter_tui_mode`] and raw mode.
///
/// Errors are ignored; this runs on exit and from the panic hook, where
/// there is nothing left to report them to.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout from any state.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_writes_alternate_screen_and_hides_cursor() {
        let mut out = Vec::new();
        enter_tui_mode(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\x1b[?1049h"));
        assert!(out.contains("\x1b[?25l"));
    }

    #[test]
    fn test_leave_writes_main_screen_and_shows_cursor() {
        let mut out = Vec::new();
        leave_tui_mode(&mut out);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\x1b[?1049l"));
        assert!(out.ends_with("\x1b[?25h"));
    }
}
