//! Terminal rendering for the portfolio page.
//!
//! The screen is split into a fixed two-row navbar, the scrollable page body
//! and a one-row keybind bar. The body is the whole page composed as rows
//! (see [`page`]); scrolling selects which rows are on screen.
//!
//! ## Responsive Layout System
//!
//! [`LayoutContext`] maps the terminal size to a content column. Below
//! [`breakpoints::MD_WIDTH`] columns the navbar collapses its links into the
//! overlay menu.

pub mod layout;
pub mod loading;
pub mod mobile_menu;
pub mod navbar;
pub mod page;
pub mod sections;
pub mod text;
pub mod theme;

pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use page::{compose, Page, PageState};
pub use theme::Palette;

use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use layout::{NAVBAR_HEIGHT, STATUS_BAR_HEIGHT};
use navbar::NavbarState;

/// Draw one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    render_at_year(frame, app, chrono::Local::now().year());
}

/// Draw one frame with an explicit footer year.
pub fn render_at_year(frame: &mut Frame, app: &mut App, year: i32) {
    let area = frame.area();
    let palette = Palette::for_mode(app.is_dark_mode());
    frame.render_widget(Block::default().style(palette.page_style()), area);

    if app.is_loading() {
        let label = app.translations().common.loading.clone();
        loading::render(frame, area, &label, app.tick_count(), &palette);
        return;
    }

    if app.terminal_size() != (area.width, area.height) {
        app.resize(area.width, area.height);
    }

    let [nav_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    let layout_ctx = LayoutContext::new(area.width, area.height);
    let page = compose(&PageState {
        translations: app.translations(),
        lang: app.lang(),
        palette,
        stats: app.stats(),
        courses_expanded: app.courses_expanded(),
        year,
        layout: layout_ctx,
    });
    app.update_page_layout(page.extents.clone(), page.height());

    render_body(frame, body_area, app, &page, &palette);

    let t = app.translations();
    let nav_state = NavbarState {
        lang: app.lang(),
        dark: app.is_dark_mode(),
        scrolled: app.is_scrolled(),
        mobile: app.is_mobile_layout(),
        menu_open: app.is_menu_open(),
    };
    navbar::render(frame, nav_area, t, &nav_state, &palette);
    render_status_bar(frame, status_area, &t.common.keybinds, &palette);

    if app.is_menu_open() {
        mobile_menu::render(
            frame,
            body_area,
            t,
            app.menu(),
            app.lang(),
            app.is_dark_mode(),
            &palette,
        );
    }
}

fn render_body(frame: &mut Frame, area: Rect, app: &App, page: &Page, palette: &Palette) {
    let rows = page::visible_rows(
        page,
        app.scroll_offset(),
        area.height,
        |section| app.visibility(section),
        palette,
    );
    frame.render_widget(Paragraph::new(rows), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, keybinds: &str, palette: &Palette) {
    let hint = text::truncate(keybinds, usize::from(area.width.saturating_sub(1)));
    let line = Line::from(vec![Span::raw(" "), Span::styled(hint, palette.muted_style())]);
    frame.render_widget(
        Paragraph::new(line).style(ratatui::style::Style::default().bg(palette.surface)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Document, SectionId};
    use crate::i18n::{Lang, LocalizationTable};
    use crate::startup::StartupConfig;
    use crate::storage::Storage;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn app(width: u16, height: u16, loaded: bool) -> App {
        let config = StartupConfig::new().with_data_dir(None).with_reduced_motion(true);
        let mut app = App::mount(
            &config,
            Storage::in_memory(),
            Arc::new(LocalizationTable::load().unwrap()),
            Document::new(),
            Instant::now(),
        );
        if loaded {
            app.tick(Instant::now() + Duration::from_secs(1));
        }
        app.resize(width, height);
        app
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_at_year(frame, app, 2026))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_screen_until_deadline() {
        let mut a = app(100, 30, false);
        let text = screen_text(&draw(&mut a, 100, 30));
        assert!(text.contains("MEP"));
        assert!(text.contains("Yükleniyor"));
        assert_eq!(a.page_height(), 0);
    }

    #[test]
    fn test_page_renders_after_loading() {
        let mut a = app(100, 30, true);
        let text = screen_text(&draw(&mut a, 100, 30));
        let t = a.translations().clone();
        assert!(text.contains(&t.navbar.brand));
        assert!(text.contains("TR|EN"));
        assert!(a.page_height() > 30);
    }

    #[test]
    fn test_language_switch_redraws_whole_screen() {
        let mut a = app(120, 40, true);
        draw(&mut a, 120, 40);
        assert!(a.change_language("en"));
        let text = screen_text(&draw(&mut a, 120, 40));
        let tr = LocalizationTable::load().unwrap();
        assert!(text.contains(&tr.get(Lang::En).navbar.about));
        assert!(!text.contains(&tr.get(Lang::Tr).navbar.experience));
    }

    #[test]
    fn test_mobile_menu_overlay() {
        let mut a = app(60, 30, true);
        a.toggle_menu();
        let text = screen_text(&draw(&mut a, 60, 30));
        assert!(text.contains("▶ "));
        assert!(text.contains(&a.translations().navbar.contact));
    }

    #[test]
    fn test_draw_syncs_terminal_size() {
        let mut a = app(100, 30, true);
        draw(&mut a, 70, 20);
        assert_eq!(a.terminal_size(), (70, 20));
        assert!(a.is_mobile_layout());
    }

    #[test]
    fn test_navigation_after_layout() {
        let mut a = app(100, 30, true);
        draw(&mut a, 100, 30);
        a.navigate_to(SectionId::Contact);
        assert!(a.scroll_offset() > 0);
        draw(&mut a, 100, 30);
        assert!(a.is_scrolled());
    }
}
