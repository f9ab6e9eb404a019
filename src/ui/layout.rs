//! Card geometry.
//!
//! The card is a fixed stack of rows: avatar, divider, profile info, button,
//! then the list section whose height follows the container animation. The
//! card wraps its content, so its own height grows and shrinks with the
//! section.

use ratatui::layout::{Margin, Rect};

use super::reveal::scaled_len;

/// Widest the card gets on large terminals.
pub const CARD_MAX_WIDTH: u16 = 64;

pub const LIGHTBULB_WIDTH: u16 = 6;
pub const LIGHTBULB_HEIGHT: u16 = 3;

pub const AVATAR_WIDTH: u16 = 10;
pub const AVATAR_HEIGHT: u16 = 5;
/// Avatar plus one blank row above and below
const AVATAR_BLOCK: u16 = AVATAR_HEIGHT + 2;

/// Name, title and handle, padded by a row each side
const INFO_BLOCK: u16 = 5;

pub const BUTTON_WIDTH: u16 = 20;
pub const BUTTON_HEIGHT: u16 = 3;
/// Button plus a blank row under it
const BUTTON_BLOCK: u16 = BUTTON_HEIGHT + 1;

/// Rows per list item, including its border.
pub const ITEM_HEIGHT: u16 = 4;
/// Width of a list item card when the list is wide enough.
pub const ITEM_WIDTH: u16 = 36;

/// Height of the section when every item fits, borders included.
pub fn natural_section_height(item_count: usize) -> u16 {
    let items = u16::try_from(item_count).unwrap_or(u16::MAX);
    items.saturating_mul(ITEM_HEIGHT).saturating_add(2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub card: Rect,
    pub lightbulb: Rect,
    pub avatar: Rect,
    pub divider: Rect,
    pub info: Rect,
    pub button: Rect,
    /// Where the section would sit at full height
    pub section_full: Rect,
    /// Rows of the section currently shown
    pub section_visible: u16,
}

impl CardLayout {
    /// Lay the card out in `area` with the container at `container_progress`.
    ///
    /// Every rect is clipped to `area`, so a tiny terminal yields empty rects
    /// rather than out-of-bounds ones.
    pub fn compute(area: Rect, container_progress: f32, item_count: usize) -> Self {
        let outer = area.inner(Margin::new(1, 1));
        let width = outer.width.min(CARD_MAX_WIDTH);
        let x = outer.x + (outer.width - width) / 2;
        let inner_x = x + 1;
        let inner_width = width.saturating_sub(2);

        let centered = |w: u16, y: u16, h: u16| {
            let w = w.min(inner_width);
            Rect::new(inner_x + (inner_width - w) / 2, y, w, h)
        };

        let mut y = outer.y + 1;
        let avatar = centered(AVATAR_WIDTH, y + 1, AVATAR_HEIGHT);
        y += AVATAR_BLOCK;
        let divider = Rect::new(inner_x, y, inner_width, 1);
        y += 1;
        let info = Rect::new(inner_x, y + 1, inner_width, INFO_BLOCK - 2);
        y += INFO_BLOCK;
        let button = centered(BUTTON_WIDTH, y, BUTTON_HEIGHT);
        y += BUTTON_BLOCK;

        // One row is kept for the card's bottom border
        let available = outer.bottom().saturating_sub(y.saturating_add(1));
        let section_height = natural_section_height(item_count).min(available);
        let section_full = Rect::new(inner_x, y, inner_width, section_height);
        let section_visible = scaled_len(section_height, container_progress);

        let card_height = (y - outer.y) + section_visible + 1;
        let card = Rect::new(x, outer.y, width, card_height.min(outer.height));

        let lightbulb = Rect::new(
            (x + width).saturating_sub(LIGHTBULB_WIDTH + 1),
            outer.y + 1,
            LIGHTBULB_WIDTH.min(inner_width),
            LIGHTBULB_HEIGHT,
        );

        Self {
            card: card.intersection(area),
            lightbulb: lightbulb.intersection(area),
            avatar: avatar.intersection(area),
            divider: divider.intersection(area),
            info: info.intersection(area),
            button: button.intersection(area),
            section_full,
            section_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 60,
    };

    #[test]
    fn test_natural_section_height() {
        assert_eq!(natural_section_height(5), 22);
        assert_eq!(natural_section_height(0), 2);
    }

    #[test]
    fn test_card_is_centered_and_capped() {
        let layout = CardLayout::compute(AREA, 0.0, 5);
        assert_eq!(layout.card.width, CARD_MAX_WIDTH);
        assert_eq!(layout.card.x, (78 - CARD_MAX_WIDTH) / 2 + 1);
    }

    #[test]
    fn test_collapsed_section_has_no_rows() {
        let layout = CardLayout::compute(AREA, 0.0, 5);
        assert_eq!(layout.section_visible, 0);
        assert_eq!(layout.section_full.height, 22);
        // Card ends right after the button block
        assert_eq!(layout.card.bottom(), layout.section_full.y + 1);
    }

    #[test]
    fn test_card_grows_with_container() {
        let collapsed = CardLayout::compute(AREA, 0.0, 5);
        let half = CardLayout::compute(AREA, 0.5, 5);
        let full = CardLayout::compute(AREA, 1.0, 5);

        assert_eq!(half.section_visible, 11);
        assert_eq!(full.section_visible, 22);
        assert_eq!(full.card.height, collapsed.card.height + 22);
        assert!(half.card.height > collapsed.card.height);
        assert!(half.card.height < full.card.height);
    }

    #[test]
    fn test_rows_are_stacked_in_order() {
        let layout = CardLayout::compute(AREA, 1.0, 5);
        assert!(layout.avatar.bottom() <= layout.divider.y);
        assert!(layout.divider.bottom() <= layout.info.y);
        assert!(layout.info.bottom() <= layout.button.y);
        assert!(layout.button.bottom() <= layout.section_full.y);
        assert!(layout.section_full.bottom() < layout.card.bottom() + 1);
    }

    #[test]
    fn test_lightbulb_in_top_right_corner() {
        let layout = CardLayout::compute(AREA, 0.0, 5);
        assert_eq!(layout.lightbulb.right(), layout.card.right() - 1);
        assert_eq!(layout.lightbulb.y, layout.card.y + 1);
    }

    #[test]
    fn test_short_terminal_shrinks_section() {
        let short = Rect::new(0, 0, 80, 30);
        let layout = CardLayout::compute(short, 1.0, 5);
        assert!(layout.section_full.height < 22);
        assert!(layout.card.bottom() <= short.bottom());
    }

    #[test]
    fn test_tiny_terminal_does_not_overflow() {
        let tiny = Rect::new(0, 0, 4, 3);
        let layout = CardLayout::compute(tiny, 1.0, 5);
        for rect in [
            layout.card,
            layout.lightbulb,
            layout.avatar,
            layout.divider,
            layout.info,
            layout.button,
        ] {
            assert!(
                rect.is_empty() || (rect.right() <= tiny.right() && rect.bottom() <= tiny.bottom()),
                "{:?} escapes {:?}",
                rect,
                tiny
            );
        }
        assert_eq!(layout.section_visible, 0);
    }
}
