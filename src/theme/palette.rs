//! Color tokens for each theme mode.

use ratatui::style::Color;

use super::ThemeMode;

/// Colors the renderer picks from; nothing draws with a literal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub primary_variant: Color,
    pub secondary: Color,
    pub background: Color,
    pub surface: Color,
    pub on_primary: Color,
    pub on_surface: Color,
    /// Outline around cards, the avatar and the divider
    pub border: Color,
    /// Secondary text such as captions
    pub dim: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(98, 0, 238),          // #6200EE
            primary_variant: Color::Rgb(55, 0, 179),  // #3700B3
            secondary: Color::Rgb(3, 218, 198),       // #03DAC6
            background: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(255, 255, 255),
            on_primary: Color::Rgb(255, 255, 255),
            on_surface: Color::Rgb(0, 0, 0),
            border: Color::Rgb(204, 204, 204),        // light gray
            dim: Color::Rgb(110, 110, 110),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(187, 134, 252),       // #BB86FC
            primary_variant: Color::Rgb(55, 0, 179),  // #3700B3
            secondary: Color::Rgb(3, 218, 198),
            background: Color::Rgb(18, 18, 18),       // #121212
            surface: Color::Rgb(30, 30, 30),
            on_primary: Color::Rgb(0, 0, 0),
            on_surface: Color::Rgb(255, 255, 255),
            border: Color::Rgb(204, 204, 204),
            dim: Color::Rgb(170, 170, 170),
        }
    }
}
