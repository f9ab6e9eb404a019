//! The expandable list of fruit projects.
//!
//! The section is drawn at full height into a scratch buffer and then a
//! center band of it, as tall as the container animation allows, is copied
//! into the frame. Each item is drawn the same way: full width into its own
//! buffer, then a run of columns anchored at the item's origin edge.

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use crate::animation::{AnimatedListSection, ItemPhase};
use crate::models::{ItemLayout, ListEntry, RowPlacement};
use crate::theme::Palette;

use super::item::FruitProjectCard;
use super::layout::{CardLayout, ITEM_HEIGHT, ITEM_WIDTH};
use super::reveal::{blit, horizontal_window, scaled_len, vertical_center_window};

/// Inputs for one frame of the section.
pub struct SectionView<'a> {
    pub section: &'a AnimatedListSection,
    pub entries: &'a [ListEntry],
    pub palette: &'a Palette,
    /// Rows of the list scrolled off the top
    pub scroll: u16,
    pub now: Instant,
}

/// Rows of list content hidden below the section when it is full height.
pub fn max_scroll(layout: &CardLayout, item_count: usize) -> u16 {
    let inner = layout.section_full.height.saturating_sub(2);
    list_height(item_count).saturating_sub(inner)
}

fn list_height(item_count: usize) -> u16 {
    u16::try_from(item_count)
        .unwrap_or(u16::MAX)
        .saturating_mul(ITEM_HEIGHT)
}

pub fn render_section(buf: &mut Buffer, layout: &CardLayout, view: &SectionView<'_>) {
    let full = layout.section_full;
    if full.is_empty() || layout.section_visible == 0 {
        return;
    }

    let mut scratch = Buffer::empty(Rect::new(0, 0, full.width, full.height));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(view.palette.border))
        .style(Style::default().bg(view.palette.surface));
    let inner = block.inner(scratch.area);
    block.render(scratch.area, &mut scratch);

    if !inner.is_empty() {
        let list = render_list(inner.width, view);
        let scroll = view.scroll.min(max_scroll(layout, view.entries.len()));
        let window = Rect::new(0, scroll, inner.width, inner.height);
        blit(&list, window, &mut scratch, inner.as_position());
    }

    let band = vertical_center_window(scratch.area, layout.section_visible);
    blit(&scratch, band, buf, full.as_position());
}

/// Every item at its current width, stacked at full list height.
fn render_list(width: u16, view: &SectionView<'_>) -> Buffer {
    let area = Rect::new(0, 0, width, list_height(view.entries.len()));
    let mut list = Buffer::empty(area);
    list.set_style(area, Style::default().bg(view.palette.surface));

    let card_width = ITEM_WIDTH.min(width);
    let card_area = Rect::new(0, 0, card_width, ITEM_HEIGHT);

    for (index, entry) in view.entries.iter().enumerate() {
        if view.section.item_phase(index, view.now) == ItemPhase::Hidden {
            continue;
        }
        let visible = scaled_len(card_width, view.section.item_progress(index, view.now));
        if visible == 0 {
            continue;
        }

        let mut card = Buffer::empty(card_area);
        FruitProjectCard::new(index, entry, view.palette).render(card_area, &mut card);

        let layout = ItemLayout::for_index(index);
        let window = horizontal_window(card_area, visible, layout.origin);
        let x = match layout.placement {
            RowPlacement::Start => 0,
            RowPlacement::End => width - visible,
        };
        let y = list_height(index);
        blit(&card, window, &mut list, Position::new(x, y));
    }

    list
}
