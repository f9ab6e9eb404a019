//! Rendering for the business card.
//!
//! [`render`] is the only entry point. It draws the whole frame from the
//! [`App`] state at a given instant and rebuilds the hit areas as it goes,
//! so mouse handling always matches what is on screen.

mod assets;
mod card;
pub mod hit_area;
mod item;
pub mod layout;
pub mod reveal;
mod section;
pub mod snapshot;

pub use card::BUTTON_LABEL;
pub use layout::CardLayout;

use std::time::Instant;

use ratatui::{prelude::*, Frame};

use crate::app::App;
use section::{max_scroll, render_section, SectionView};

/// Draw one frame of the card.
pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    let palette = app.palette();
    let buf = frame.buffer_mut();

    app.hit_areas.clear();
    buf.set_style(area, Style::default().bg(palette.background));

    let section = &app.card.section;
    let layout = CardLayout::compute(area, section.container_progress(now), section.item_count());

    app.max_list_scroll = max_scroll(&layout, app.card.entries.len());
    app.list_scroll = app.list_scroll.min(app.max_list_scroll);

    card::render_card(
        buf,
        &layout,
        &app.card.profile,
        &palette,
        app.mouse_position,
        &mut app.hit_areas,
    );

    let view = SectionView {
        section: &app.card.section,
        entries: &app.card.entries,
        palette: &palette,
        scroll: app.list_scroll,
        now,
    };
    render_section(buf, &layout, &view);
}
