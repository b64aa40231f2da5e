//! Shared helpers for integration tests.

#![allow(dead_code)]

use folio::app::{App, Document};
use folio::i18n::LocalizationTable;
use folio::startup::StartupConfig;
use folio::storage::Storage;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub fn table() -> Arc<LocalizationTable> {
    Arc::new(LocalizationTable::load().expect("bundled content loads"))
}

/// Config with no data directory and no network.
pub fn offline_config() -> StartupConfig {
    StartupConfig::new().with_data_dir(None).with_offline(true)
}

pub fn mount(config: &StartupConfig, storage: Storage, document: &Document) -> App {
    App::mount(config, storage, table(), document.clone(), Instant::now())
}

/// Advance past the loading screen.
pub fn finish_loading(app: &mut App) {
    app.tick(Instant::now() + Duration::from_secs(2));
}

/// Draw one frame into a test backend and return the buffer.
pub fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| folio::ui::render_at_year(frame, app, 2026))
        .expect("draw");
    terminal.backend().buffer().clone()
}

/// Buffer contents as text, one line per row.
pub fn screen_text(buffer: &Buffer) -> String {
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
