//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use bizcard::app::App;
use bizcard::ui;
use bizcard::ui::snapshot::buffer_to_lines;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

pub const FRAME: Duration = Duration::from_millis(16);

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Draw one frame of `app` at `now` and return the buffer.
pub fn render_buffer(app: &mut App, width: u16, height: u16, now: Instant) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app, now)).unwrap();
    terminal.backend().buffer().clone()
}

pub fn render_lines(app: &mut App, width: u16, height: u16, now: Instant) -> Vec<String> {
    buffer_to_lines(&render_buffer(app, width, height, now))
}

/// Tick the app at frame rate from `from` until `until`, inclusive.
pub fn run_frames(app: &mut App, from: Instant, until: Instant) {
    let mut now = from;
    while now <= until {
        app.tick(now);
        now += FRAME;
    }
    app.tick(until);
}
