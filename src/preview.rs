//! Static snapshot of the expanded card.
//!
//! Draws one frame into an in-memory backend and returns it as plain text.
//! Used by `--preview`, and handy for eyeballing layout changes without a
//! real terminal.

use std::time::Instant;

use ratatui::{backend::TestBackend, Terminal};

use crate::app::App;
use crate::cli::args::MAX_PREVIEW_SIDE;
use crate::config::AppConfig;
use crate::error::{BizcardError, BizcardResult};
use crate::ui::{self, snapshot::buffer_to_string};

/// Render the fully expanded card at `config.preview_size`.
pub fn render_preview(config: &AppConfig) -> BizcardResult<String> {
    let (width, height) = config.preview_size;
    if width == 0 || height == 0 || width > MAX_PREVIEW_SIDE || height > MAX_PREVIEW_SIDE {
        return Err(BizcardError::Render(format!(
            "preview size {}x{} is outside 1..={}",
            width, height, MAX_PREVIEW_SIDE
        )));
    }
    let mut app = App::preview(config.clone());

    let mut terminal = Terminal::new(TestBackend::new(width, height))
        .map_err(|e| BizcardError::Render(e.to_string()))?;
    let now = Instant::now();
    terminal
        .draw(|frame| ui::render(frame, &mut app, now))
        .map_err(|e| BizcardError::Render(e.to_string()))?;

    Ok(buffer_to_string(terminal.backend().buffer()))
}
