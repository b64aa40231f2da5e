//! Input and message handling for the App.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::reveal::SectionId;
use super::{App, AppMessage, WHEEL_ROWS};
use crate::stats::StatsState;

impl App {
    /// Handle a result from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        // A late result after unmount must not touch state.
        if !self.is_mounted() {
            return;
        }
        self.stats_task = None;
        self.stats = match msg {
            AppMessage::StatsReady(stats) => {
                tracing::debug!("Profile statistics loaded: {:?}", stats);
                StatsState::Ready(stats)
            }
            AppMessage::StatsUnavailable => StatsState::Unavailable,
        };
    }

    /// Dispatch a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => self.resize(*width, *height),
            _ => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            KeyCode::Char('t') => {
                self.toggle_dark_mode();
                return;
            }
            KeyCode::Char('l') => {
                self.toggle_language();
                return;
            }
            KeyCode::Char('m') => {
                self.toggle_menu();
                return;
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = (c as usize) - ('1' as usize);
                self.navigate_to(SectionId::NAV[index]);
                return;
            }
            _ => {}
        }

        if self.is_menu_open() {
            self.handle_menu_key(key);
        } else {
            self.handle_page_key(key);
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_menu(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.menu_mut().select_next();
                self.mark_dirty();
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.menu_mut().select_previous();
                self.mark_dirty();
            }
            KeyCode::Enter => {
                let section = self.menu().selected();
                self.navigate_to(section);
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_pages(1),
            KeyCode::PageUp => self.scroll_pages(-1),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            KeyCode::Char('c') => self.toggle_courses(),
            _ => {}
        }
    }

    /// Handle mouse input. Only the wheel does anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_ROWS),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Document, SectionExtent};
    use crate::i18n::{Lang, LocalizationTable};
    use crate::startup::StartupConfig;
    use crate::stats::ProfileStats;
    use crate::storage::Storage;
    use crossterm::event::KeyEventState;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn app() -> App {
        let config = StartupConfig::new().with_data_dir(None);
        let mut app = App::mount(
            &config,
            Storage::in_memory(),
            Arc::new(LocalizationTable::load().unwrap()),
            Document::new(),
            Instant::now(),
        );
        app.tick(Instant::now() + Duration::from_secs(1));
        app.resize(120, 20);
        let extents = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| SectionExtent {
                id,
                top: i as u32 * 20,
                height: 20,
            })
            .collect();
        app.update_page_layout(extents, 180);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn wheel(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('q')));
        assert!(a.should_quit());

        let mut a = app();
        a.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(a.should_quit());

        let mut a = app();
        a.handle_key(key(KeyCode::Esc));
        assert!(a.should_quit());
    }

    #[test]
    fn test_toggle_keys() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('t')));
        assert!(a.is_dark_mode());
        a.handle_key(key(KeyCode::Char('l')));
        assert_eq!(a.lang(), Lang::En);
        a.handle_key(key(KeyCode::Char('c')));
        assert!(a.courses_expanded());
    }

    #[test]
    fn test_scroll_keys() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('j')));
        assert_eq!(a.scroll_offset(), 1);
        a.handle_key(key(KeyCode::PageDown));
        assert_eq!(a.scroll_offset(), 1 + a.viewport_height() - 1);
        a.handle_key(key(KeyCode::Char('G')));
        assert_eq!(a.scroll_offset(), 180 - a.viewport_height());
        a.handle_key(key(KeyCode::Char('g')));
        assert_eq!(a.scroll_offset(), 0);
    }

    #[test]
    fn test_number_keys_jump() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('2')));
        assert_eq!(a.scroll_offset(), 40);
    }

    #[test]
    fn test_wheel_scrolls() {
        let mut a = app();
        a.handle_mouse(wheel(MouseEventKind::ScrollDown));
        assert_eq!(a.scroll_offset(), 3);
        a.handle_mouse(wheel(MouseEventKind::ScrollUp));
        assert_eq!(a.scroll_offset(), 0);
    }

    #[test]
    fn test_menu_keys() {
        let mut a = app();
        a.resize(60, 20);
        a.handle_key(key(KeyCode::Char('m')));
        assert!(a.is_menu_open());

        // Esc closes the menu instead of quitting.
        a.handle_key(key(KeyCode::Esc));
        assert!(!a.is_menu_open());
        assert!(!a.should_quit());

        a.handle_key(key(KeyCode::Char('m')));
        a.handle_key(key(KeyCode::Down));
        a.handle_key(key(KeyCode::Enter));
        assert!(!a.is_menu_open());
        assert!(!a.document().is_scroll_locked());
        assert_eq!(a.scroll_offset(), 40);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut a = app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        a.handle_event(&Event::Key(release));
        assert!(!a.should_quit());
    }

    #[test]
    fn test_resize_event() {
        let mut a = app();
        a.handle_event(&Event::Resize(70, 30));
        assert_eq!(a.terminal_size(), (70, 30));
        assert!(a.is_mobile_layout());
    }

    #[test]
    fn test_stats_messages() {
        let mut a = app();
        let stats = ProfileStats {
            public_repos: Some(12),
            followers: Some(3),
        };
        a.handle_message(AppMessage::StatsReady(stats));
        assert_eq!(a.stats(), StatsState::Ready(stats));

        a.handle_message(AppMessage::StatsUnavailable);
        assert_eq!(a.stats(), StatsState::Unavailable);
    }

    #[test]
    fn test_message_after_unmount_is_dropped() {
        let mut a = app();
        a.unmount();
        a.handle_message(AppMessage::StatsReady(ProfileStats::default()));
        assert_eq!(a.stats(), StatsState::Unavailable);
    }
}
