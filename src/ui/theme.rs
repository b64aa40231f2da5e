//! Light and dark palettes for the portfolio.
//!
//! Monochrome neutrals with a single emerald accent for live status.

use ratatui::style::{Color, Modifier, Style};

/// Page background in dark mode
pub const DARK_BG: Color = Color::Rgb(10, 10, 10); // #0A0A0A
/// Alternate section background in dark mode
pub const DARK_SURFACE: Color = Color::Rgb(20, 20, 20); // #141414
/// Rules and card borders in dark mode
pub const DARK_BORDER: Color = Color::Rgb(38, 38, 38); // #262626

pub const NEUTRAL_50: Color = Color::Rgb(250, 250, 250);
pub const NEUTRAL_100: Color = Color::Rgb(245, 245, 245);
pub const NEUTRAL_200: Color = Color::Rgb(229, 229, 229);
pub const NEUTRAL_400: Color = Color::Rgb(163, 163, 163);
pub const NEUTRAL_500: Color = Color::Rgb(115, 115, 115);
pub const NEUTRAL_600: Color = Color::Rgb(82, 82, 82);
pub const NEUTRAL_700: Color = Color::Rgb(64, 64, 64);
pub const NEUTRAL_800: Color = Color::Rgb(38, 38, 38);
pub const NEUTRAL_900: Color = Color::Rgb(23, 23, 23);

pub const EMERALD_300: Color = Color::Rgb(110, 231, 183);
pub const EMERALD_700: Color = Color::Rgb(4, 120, 87);

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    /// Headings and emphasized text
    pub heading: Color,
    /// Body copy
    pub body: Color,
    /// Captions, dates, labels
    pub muted: Color,
    /// Technology chips
    pub chip: Color,
    /// Live/available status
    pub success: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(255, 255, 255),
        surface: NEUTRAL_50,
        border: NEUTRAL_200,
        heading: NEUTRAL_900,
        body: NEUTRAL_600,
        muted: NEUTRAL_500,
        chip: NEUTRAL_700,
        success: EMERALD_700,
    };

    pub const DARK: Palette = Palette {
        background: DARK_BG,
        surface: DARK_SURFACE,
        border: DARK_BORDER,
        heading: NEUTRAL_100,
        body: NEUTRAL_400,
        muted: NEUTRAL_500,
        chip: NEUTRAL_200,
        success: EMERALD_300,
    };

    pub fn for_mode(dark: bool) -> Palette {
        if dark {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    pub fn body_style(&self) -> Style {
        Style::default().fg(self.body)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Base style for the whole page area.
    pub fn page_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert_eq!(Palette::for_mode(true), Palette::DARK);
        assert_eq!(Palette::for_mode(false), Palette::LIGHT);
        assert_eq!(Palette::DARK.background, DARK_BG);
    }

    #[test]
    fn test_heading_is_bold() {
        assert!(Palette::LIGHT
            .heading_style()
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
