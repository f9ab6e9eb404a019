//! One row of the fruit project list.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::{Asset, ItemLayout, ListEntry};
use crate::theme::Palette;

use super::assets::glyph;

/// Columns taken by the icon, e.g. `(☕)`.
const ICON_WIDTH: u16 = 4;

/// Card for a single list entry.
///
/// Rendering is pure: visibility, clipping and placement are the parent's
/// job. Odd rows are mirrored, with the icon on the right and the text
/// right-aligned.
pub struct FruitProjectCard<'a> {
    index: usize,
    entry: &'a ListEntry,
    palette: &'a Palette,
}

impl<'a> FruitProjectCard<'a> {
    pub fn new(index: usize, entry: &'a ListEntry, palette: &'a Palette) -> Self {
        Self {
            index,
            entry,
            palette,
        }
    }
}

impl Widget for FruitProjectCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.border))
            .style(Style::default().bg(self.palette.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = ItemLayout::for_index(self.index);
        let (icon_area, text_area, alignment) = if layout.is_mirrored() {
            let [text, _, icon] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(ICON_WIDTH),
            ])
            .areas(inner);
            (icon, text, Alignment::Right)
        } else {
            let [icon, _, text] = Layout::horizontal([
                Constraint::Length(ICON_WIDTH),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(inner);
            (icon, text, Alignment::Left)
        };

        let icon = format!("({})", glyph(Asset::Breakfast));
        Paragraph::new(icon)
            .style(Style::default().fg(self.palette.secondary))
            .render(icon_area, buf);

        let lines = vec![
            Line::from(Span::styled(
                self.entry.label,
                Style::default()
                    .fg(self.palette.on_surface)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.entry.caption(),
                Style::default().fg(self.palette.dim),
            )),
        ];
        Paragraph::new(lines)
            .alignment(alignment)
            .render(text_area, buf);
    }
}
