//! Card chrome: frame, lightbulb toggle, avatar, profile text and the
//! expand button.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::models::{Asset, Profile};
use crate::theme::Palette;

use super::assets::glyph;
use super::hit_area::{ClickAction, HitAreaRegistry};
use super::layout::CardLayout;

pub const BUTTON_LABEL: &str = "Fruit projects";

fn bordered(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface))
}

/// Draw everything above the list section and register the clickable parts.
pub fn render_card(
    buf: &mut Buffer,
    layout: &CardLayout,
    profile: &Profile,
    palette: &Palette,
    hover: Option<Position>,
    hit_areas: &mut HitAreaRegistry,
) {
    if layout.card.is_empty() {
        return;
    }
    bordered(palette).render(layout.card, buf);

    if !layout.avatar.is_empty() {
        Paragraph::new(glyph(Asset::Profile))
            .alignment(Alignment::Center)
            .block(bordered(palette).padding(Padding::vertical(1)))
            .render(layout.avatar, buf);
    }

    if !layout.divider.is_empty() {
        let rule = "━".repeat(usize::from(layout.divider.width));
        buf.set_string(
            layout.divider.x,
            layout.divider.y,
            rule,
            Style::default().fg(palette.border),
        );
    }

    render_info(buf, layout.info, profile, palette);
    render_button(buf, layout.button, palette, hover, hit_areas);

    // Drawn last so it sits above the avatar row in the hit registry
    if !layout.lightbulb.is_empty() {
        Paragraph::new(glyph(Asset::Lightbulb))
            .alignment(Alignment::Center)
            .block(bordered(palette))
            .render(layout.lightbulb, buf);
        hit_areas.register(layout.lightbulb, ClickAction::ToggleTheme);
    }
}

fn render_info(buf: &mut Buffer, area: Rect, profile: &Profile, palette: &Palette) {
    if area.is_empty() {
        return;
    }
    let text = Style::default().fg(palette.on_surface);
    let lines = vec![
        Line::from(Span::styled(
            profile.name,
            Style::default()
                .fg(palette.primary_variant)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.title, text)),
        Line::from(Span::styled(profile.handle, text)),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_button(
    buf: &mut Buffer,
    area: Rect,
    palette: &Palette,
    hover: Option<Position>,
    hit_areas: &mut HitAreaRegistry,
) {
    if area.is_empty() {
        return;
    }
    let hovered = hover.is_some_and(|pos| area.contains(pos));
    let bg = if hovered {
        palette.primary_variant
    } else {
        palette.primary
    };

    // Label on the middle row of the button
    let label_area = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    buf.set_style(area, Style::default().bg(bg));
    Paragraph::new(BUTTON_LABEL)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.on_primary)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .render(label_area, buf);

    hit_areas.register(area, ClickAction::ToggleExpansion);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snapshot::buffer_to_lines;

    fn draw(hover: Option<Position>) -> (Buffer, CardLayout, HitAreaRegistry) {
        let area = Rect::new(0, 0, 60, 30);
        let layout = CardLayout::compute(area, 0.0, 5);
        let mut buf = Buffer::empty(area);
        let mut hits = HitAreaRegistry::new();
        render_card(
            &mut buf,
            &layout,
            &Profile::default(),
            &Palette::light(),
            hover,
            &mut hits,
        );
        (buf, layout, hits)
    }

    #[test]
    fn test_profile_lines_are_shown() {
        let (buf, _, _) = draw(None);
        let text = buffer_to_lines(&buf).join("\n");
        assert!(text.contains("George J."));
        assert!(text.contains("Competent Fruit Seller"));
        assert!(text.contains("@bananananas578"));
        assert!(text.contains(BUTTON_LABEL));
        assert!(text.contains("💡"));
        assert!(text.contains("👤"));
    }

    #[test]
    fn test_registers_both_hit_areas() {
        let (_, layout, hits) = draw(None);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits.rect_for(ClickAction::ToggleTheme), Some(layout.lightbulb));
        assert_eq!(hits.rect_for(ClickAction::ToggleExpansion), Some(layout.button));
    }

    #[test]
    fn test_button_hover_changes_background() {
        let palette = Palette::light();
        let (idle, layout, _) = draw(None);
        let inside = Position::new(layout.button.x + 1, layout.button.y);
        let (hovered, _, _) = draw(Some(inside));

        let cell = (layout.button.x, layout.button.y);
        assert_eq!(idle[cell].bg, palette.primary);
        assert_eq!(hovered[cell].bg, palette.primary_variant);
    }

    #[test]
    fn test_empty_layout_draws_nothing() {
        let area = Rect::new(0, 0, 1, 1);
        let layout = CardLayout::compute(area, 1.0, 5);
        let mut buf = Buffer::empty(area);
        let mut hits = HitAreaRegistry::new();
        render_card(
            &mut buf,
            &layout,
            &Profile::default(),
            &Palette::dark(),
            None,
            &mut hits,
        );
        assert!(hits.is_empty());
    }
}
