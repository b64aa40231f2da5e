//! Full-screen splash shown until the loading deadline passes.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use super::navbar::SHORT_BRAND;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner glyph for the given tick.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick / 4 % SPINNER.len() as u64) as usize]
}

pub fn loading_lines(loading_label: &str, tick: u64, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(spinner_frame(tick), palette.muted_style())),
        Line::default(),
        Line::from(Span::styled(SHORT_BRAND, palette.heading_style())),
        Line::from(Span::styled(format!("{loading_label}…"), palette.muted_style())),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, loading_label: &str, tick: u64, palette: &Palette) {
    let lines = loading_lines(loading_label, tick, palette);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(lines.len() as u16),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), "◐");
        assert_eq!(spinner_frame(4), "◓");
        assert_eq!(spinner_frame(16), "◐");
    }

    #[test]
    fn test_loading_lines_show_brand_and_label() {
        let lines = loading_lines("Loading", 0, &Palette::DARK);
        assert_eq!(lines[2].spans[0].content, "MEP");
        assert_eq!(lines[3].spans[0].content, "Loading…");
    }
}
