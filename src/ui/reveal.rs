//! Clipped reveal of pre-rendered content.
//!
//! Expand/collapse animations never re-layout their content. The content is
//! rendered once at full size into a scratch [`Buffer`] and a window of it is
//! copied into the frame: a centered band of rows for vertical expansion, or
//! a run of columns anchored at one edge for horizontal expansion.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::models::Edge;

/// Scale a full length by an eased progress value.
pub fn scaled_len(full: u16, progress: f32) -> u16 {
    let scaled = (f32::from(full) * progress.clamp(0.0, 1.0)).round();
    (scaled as u16).min(full)
}

/// Band of `height` rows centered vertically in `full`.
pub fn vertical_center_window(full: Rect, height: u16) -> Rect {
    let height = height.min(full.height);
    let top = (full.height - height) / 2;
    Rect::new(full.x, full.y + top, full.width, height)
}

/// Run of `width` columns at the `origin` edge of `full`.
///
/// `Edge::Leading` keeps the leftmost columns, `Edge::Trailing` the
/// rightmost.
pub fn horizontal_window(full: Rect, width: u16, origin: Edge) -> Rect {
    let width = width.min(full.width);
    let x = match origin {
        Edge::Leading => full.x,
        Edge::Trailing => full.x + (full.width - width),
    };
    Rect::new(x, full.y, width, full.height)
}

/// Copy `window` of `src` into `dst` with its top-left corner at `origin`.
///
/// Cells landing outside `dst` are dropped. A wide glyph that would spill
/// past the right edge of the window is blanked.
pub fn blit(src: &Buffer, window: Rect, dst: &mut Buffer, origin: Position) {
    let window = window.intersection(src.area);

    for dy in 0..window.height {
        for dx in 0..window.width {
            let (Some(tx), Some(ty)) = (origin.x.checked_add(dx), origin.y.checked_add(dy)) else {
                continue;
            };
            if !dst.area.contains(Position::new(tx, ty)) {
                continue;
            }

            let cell = &src[(window.x + dx, window.y + dy)];
            let fits = cell.symbol().width() <= usize::from(window.width - dx);
            if let Some(target) = dst.cell_mut((tx, ty)) {
                *target = cell.clone();
                if !fits {
                    target.set_symbol(" ");
                }
            }
        }
    }
}
