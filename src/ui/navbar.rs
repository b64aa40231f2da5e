//! Fixed navbar: brand, section links, theme toggle and language switcher.
//!
//! Narrow terminals get the brand, the switcher and a menu button instead
//! of the links. The bottom rule only shows once the body has scrolled.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Palette;
use crate::app::SectionId;
use crate::i18n::{Lang, NavbarText, Translations};

/// Short brand used when the full name does not fit.
pub const SHORT_BRAND: &str = "MEP";

/// Inputs the navbar depends on.
#[derive(Debug, Clone, Copy)]
pub struct NavbarState {
    pub lang: Lang,
    pub dark: bool,
    pub scrolled: bool,
    pub mobile: bool,
    pub menu_open: bool,
}

/// Label for a navigation target.
pub fn nav_label(text: &NavbarText, section: SectionId) -> &str {
    match section {
        SectionId::About => &text.about,
        SectionId::Experience => &text.experience,
        SectionId::Projects => &text.projects,
        SectionId::Skills => &text.skills,
        SectionId::Certifications => &text.certifications,
        SectionId::Contact => &text.contact,
        _ => &text.brand,
    }
}

/// `TR|EN` with the active language highlighted.
pub fn language_switcher(lang: Lang, palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, option) in Lang::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("|", Style::default().fg(palette.border)));
        }
        let style = if option == lang {
            palette.heading_style().add_modifier(Modifier::REVERSED)
        } else {
            palette.muted_style()
        };
        spans.push(Span::styled(option.code().to_uppercase(), style));
    }
    spans
}

/// Theme button; names the mode a press switches to.
pub fn theme_toggle(t: &Translations, dark: bool, palette: &Palette) -> Span<'static> {
    let label = if dark {
        format!("☀ {}", t.common.theme_light)
    } else {
        format!("☾ {}", t.common.theme_dark)
    };
    Span::styled(label, palette.body_style())
}

fn links(text: &NavbarText, numbered: bool, palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, section) in SectionId::NAV.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        if numbered {
            spans.push(Span::styled(format!("{} ", i + 1), palette.muted_style()));
        }
        spans.push(Span::styled(
            nav_label(text, section).to_string(),
            palette.body_style(),
        ));
    }
    spans
}

/// The two navbar rows for a terminal `width` columns wide.
pub fn navbar_lines(t: &Translations, state: &NavbarState, palette: &Palette, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let inner = width.saturating_sub(2);

    let mut controls = vec![Span::raw("  "), theme_toggle(t, state.dark, palette), Span::raw("  ")];
    controls.extend(language_switcher(state.lang, palette));

    let candidates: Vec<(&str, Vec<Span<'static>>)> = if state.mobile {
        let mut right = controls.clone();
        let icon = if state.menu_open { "✕" } else { "☰" };
        right.push(Span::styled(
            format!("  {} {}", icon, t.common.menu),
            palette.heading_style(),
        ));
        vec![(t.navbar.brand.as_str(), right.clone()), (SHORT_BRAND, right)]
    } else {
        let with = |numbered: bool| {
            let mut right = links(&t.navbar, numbered, palette);
            right.extend(controls.clone());
            right
        };
        vec![
            (t.navbar.brand.as_str(), with(true)),
            (t.navbar.brand.as_str(), with(false)),
            (SHORT_BRAND, with(true)),
            (SHORT_BRAND, with(false)),
            (SHORT_BRAND, controls.clone()),
        ]
    };

    let fits = |brand: &str, right: &[Span<'static>]| {
        brand.width() + 2 + right.iter().map(|s| s.content.width()).sum::<usize>() <= inner
    };
    let (brand, right) = candidates
        .iter()
        .find(|(brand, right)| fits(brand, right))
        .or(candidates.last())
        .cloned()
        .unwrap_or((SHORT_BRAND, Vec::new()));

    let right_width: usize = right.iter().map(|s| s.content.width()).sum();
    let gap = inner.saturating_sub(brand.width() + right_width).max(1);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(brand.to_string(), palette.heading_style()),
        Span::raw(" ".repeat(gap)),
    ];
    spans.extend(right);
    let top = Line::from(spans);

    let bottom = if state.scrolled {
        Line::from(Span::styled("─".repeat(width), Style::default().fg(palette.border)))
    } else {
        Line::default()
    };

    vec![top, bottom]
}

/// Navbar background: raised once the body has scrolled.
pub fn navbar_style(scrolled: bool, palette: &Palette) -> Style {
    let bg = if scrolled {
        palette.surface
    } else {
        palette.background
    };
    Style::default().bg(bg)
}

pub fn render(frame: &mut Frame, area: Rect, t: &Translations, state: &NavbarState, palette: &Palette) {
    let lines = navbar_lines(t, state, palette, area.width);
    frame.render_widget(
        Paragraph::new(lines).style(navbar_style(state.scrolled, palette)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizationTable;
    use crate::ui::sections::test_support::text_of;
    use crate::ui::text::line_width;

    fn state(mobile: bool) -> NavbarState {
        NavbarState {
            lang: Lang::En,
            dark: false,
            scrolled: false,
            mobile,
            menu_open: false,
        }
    }

    #[test]
    fn test_wide_navbar_shows_numbered_links() {
        let table = LocalizationTable::load().unwrap();
        let t = table.get(Lang::En);
        let lines = navbar_lines(t, &state(false), &Palette::LIGHT, 160);
        let text = text_of(&lines[..1]);
        assert!(text.contains(&t.navbar.brand));
        assert!(text.contains("1 About"));
        assert!(text.contains("6 Contact"));
        assert!(text.contains("TR|EN"));
        assert!(line_width(&lines[0]) <= 160);
    }

    #[test]
    fn test_tight_navbar_falls_back_to_short_brand() {
        let table = LocalizationTable::load().unwrap();
        let t = table.get(Lang::En);
        let lines = navbar_lines(t, &state(false), &Palette::LIGHT, 80);
        let text = text_of(&lines[..1]);
        assert!(line_width(&lines[0]) <= 80);
        assert!(text.contains("Contact"));
    }

    #[test]
    fn test_mobile_navbar_has_menu_button() {
        let table = LocalizationTable::load().unwrap();
        let t = table.get(Lang::Tr);
        let mut s = state(true);
        s.lang = Lang::Tr;
        let text = text_of(&navbar_lines(t, &s, &Palette::DARK, 60)[..1]);
        assert!(text.contains("☰ Menü"));
        assert!(!text.contains(&t.navbar.experience));

        s.menu_open = true;
        let text = text_of(&navbar_lines(t, &s, &Palette::DARK, 60)[..1]);
        assert!(text.contains("✕"));
    }

    #[test]
    fn test_scrolled_adds_rule() {
        let table = LocalizationTable::load().unwrap();
        let t = table.get(Lang::En);
        let mut s = state(false);
        assert_eq!(text_of(&navbar_lines(t, &s, &Palette::LIGHT, 100)[1..]), "");
        s.scrolled = true;
        assert_eq!(
            text_of(&navbar_lines(t, &s, &Palette::LIGHT, 100)[1..]),
            "─".repeat(100)
        );
        assert_ne!(
            navbar_style(true, &Palette::LIGHT),
            navbar_style(false, &Palette::LIGHT)
        );
    }

    #[test]
    fn test_switcher_highlights_current_language() {
        let spans = language_switcher(Lang::Tr, &Palette::LIGHT);
        assert_eq!(spans[0].content, "TR");
        assert!(spans[0].style.add_modifier.contains(Modifier::REVERSED));
        assert!(!spans[2].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_theme_toggle_names_target_mode() {
        let table = LocalizationTable::load().unwrap();
        let t = table.get(Lang::En);
        assert!(theme_toggle(t, false, &Palette::LIGHT).content.contains(&t.common.theme_dark));
        assert!(theme_toggle(t, true, &Palette::DARK).content.contains(&t.common.theme_light));
    }
}
