//! Overlay navigation shown below the navbar on narrow terminals.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::navbar::{language_switcher, nav_label, theme_toggle};
use super::theme::Palette;
use crate::app::{SectionId, MobileMenu};
use crate::i18n::{Lang, Translations};

/// Rows inside the overlay: one per link, a spacer and the switcher row.
const MENU_CONTENT_ROWS: u16 = SectionId::NAV.len() as u16 + 2;

/// Overlay area: full width, directly under the navbar.
pub fn menu_area(body: Rect) -> Rect {
    Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: (MENU_CONTENT_ROWS + 2).min(body.height),
    }
}

pub fn menu_lines(
    t: &Translations,
    menu: &MobileMenu,
    lang: Lang,
    dark: bool,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let selected = menu.selected();
    let mut lines: Vec<Line<'static>> = SectionId::NAV
        .iter()
        .enumerate()
        .map(|(i, &section)| {
            let label = nav_label(&t.navbar, section).to_string();
            if section == selected {
                Line::from(vec![
                    Span::styled("▶ ", palette.heading_style()),
                    Span::styled(
                        label,
                        palette.heading_style().add_modifier(Modifier::REVERSED),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), palette.muted_style()),
                    Span::styled(label, palette.body_style()),
                ])
            }
        })
        .collect();

    lines.push(Line::default());
    let mut controls = vec![
        Span::styled("[t] ", palette.muted_style()),
        theme_toggle(t, dark, palette),
        Span::styled(format!("   [l] {} ", t.common.language), palette.muted_style()),
    ];
    controls.extend(language_switcher(lang, palette));
    lines.push(Line::from(controls));
    lines
}

pub fn render(
    frame: &mut Frame,
    body: Rect,
    t: &Translations,
    menu: &MobileMenu,
    lang: Lang,
    dark: bool,
    palette: &Palette,
) {
    let area = menu_area(body);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padded = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(menu_lines(t, menu, lang, dark, palette)), padded);
}
