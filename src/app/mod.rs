//! Application state and view lifecycle.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Document`] - shared root-class, scroll-lock and listener state
//! - [`LoadingGate`] - one-shot loading screen deadline
//! - [`MobileMenu`] - overlay navigation holding the scroll lock
//! - [`RevealTracker`] - one-shot section fade-ins
//! - [`AppMessage`] - results from background tasks

pub mod document;
mod handlers;
pub mod menu;
mod messages;
pub mod reveal;
pub mod splash;

pub use document::{Document, ScrollLock, Subscription, SubscriptionKind};
pub use menu::MobileMenu;
pub use messages::AppMessage;
pub use reveal::{RevealTracker, SectionExtent, SectionId, Visibility, FADE_TICKS};
pub use splash::LoadingGate;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::i18n::{Lang, LocalizationTable, Translations};
use crate::startup::StartupConfig;
use crate::stats::{spawn_stats_fetch, StatsState};
use crate::storage::{Storage, LANG_KEY, THEME_KEY};
use crate::traits::HttpClient;
use crate::ui::layout::{body_height, breakpoints};

/// Rows the body must scroll before the navbar switches style.
pub const SCROLL_THRESHOLD_ROWS: u32 = 3;

/// Rows moved by one mouse wheel notch.
pub const WHEEL_ROWS: i32 = 3;

/// Root state container for one mounted portfolio view.
///
/// Everything here is created by [`App::mount`] and released by
/// [`App::unmount`], which also runs on drop.
pub struct App {
    storage: Storage,
    table: Arc<LocalizationTable>,
    document: Document,

    lang: Lang,
    dark_mode: bool,
    loading: bool,
    scrolled: bool,
    courses_expanded: bool,

    splash: LoadingGate,
    menu: MobileMenu,
    reveal: RevealTracker,
    scroll_listener: Option<Subscription>,

    scroll_offset: u32,
    page_height: u32,
    section_extents: Vec<SectionExtent>,
    terminal_width: u16,
    terminal_height: u16,

    stats: StatsState,
    stats_task: Option<JoinHandle<()>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the run loop for `tokio::select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,

    /// Set whenever visible state changes
    pub needs_redraw: bool,
    should_quit: bool,
    mounted: bool,
    tick_count: u64,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("lang", &self.lang)
            .field("dark_mode", &self.dark_mode)
            .field("loading", &self.loading)
            .field("scrolled", &self.scrolled)
            .field("menu_open", &self.menu.is_open())
            .field("scroll_offset", &self.scroll_offset)
            .field("stats", &self.stats)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl App {
    /// Mount the view: read stored preferences, apply the theme to the
    /// document, arm the loading gate and attach the scroll listener.
    pub fn mount(
        config: &StartupConfig,
        storage: Storage,
        table: Arc<LocalizationTable>,
        document: Document,
        now: Instant,
    ) -> Self {
        let dark_mode = storage.get(THEME_KEY, String::new()) == "dark";
        let lang = storage
            .get_session::<Option<String>>(LANG_KEY, None)
            .and_then(|code| code.parse::<Lang>().ok())
            .unwrap_or_default();

        document.set_dark(dark_mode);
        let scroll_listener = Some(document.subscribe(SubscriptionKind::Scroll));
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let stats = if config.offline {
            StatsState::Unavailable
        } else {
            StatsState::Loading
        };

        tracing::info!(
            "Mounted portfolio (lang={}, dark={}, reduced_motion={})",
            lang,
            dark_mode,
            config.reduced_motion
        );

        let mut app = Self {
            storage,
            table,
            document,
            lang,
            dark_mode,
            loading: true,
            scrolled: false,
            courses_expanded: false,
            splash: LoadingGate::new(now, config.splash_delay),
            menu: MobileMenu::new(),
            reveal: RevealTracker::new(config.reduced_motion),
            scroll_listener,
            scroll_offset: 0,
            page_height: 0,
            section_extents: Vec::new(),
            terminal_width: 80,
            terminal_height: 24,
            stats,
            stats_task: None,
            message_tx,
            message_rx: Some(message_rx),
            needs_redraw: true,
            should_quit: false,
            mounted: true,
            tick_count: 0,
        };

        if let Some(code) = config.initial_lang.as_deref() {
            if !app.change_language(code) {
                tracing::warn!("Ignoring unsupported language '{}'", code);
            }
        }

        app
    }

    /// Release everything acquired since mount. Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;

        self.splash.cancel();
        self.menu.close();
        self.scroll_listener = None;
        self.reveal.stop();
        if self.has_stats_task() {
            tracing::debug!("Cancelling profile statistics request");
        }
        if let Some(task) = self.stats_task.take() {
            task.abort();
        }
        if self.stats.is_loading() {
            self.stats = StatsState::Unavailable;
        }

        tracing::info!("Unmounted portfolio");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start the profile statistics request.
    ///
    /// No-op when offline, when stats already resolved or when a request is
    /// already running.
    pub fn start_stats(&mut self, client: Arc<dyn HttpClient>, url: String) {
        if !self.mounted || !self.stats.is_loading() || self.stats_task.is_some() {
            return;
        }
        match spawn_stats_fetch(client, url, self.message_tx.clone()) {
            Some(task) => self.stats_task = Some(task),
            None => {
                tracing::debug!("No async runtime; profile statistics unavailable");
                self.stats = StatsState::Unavailable;
            }
        }
    }

    /// Whether a statistics request is in flight.
    pub fn has_stats_task(&self) -> bool {
        self.stats_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Advance timers and animations. Called from the run loop on every tick.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if !self.mounted {
            return;
        }

        if self.splash.poll(now) {
            self.loading = false;
            self.reveal.start(&self.document);
            self.mark_dirty();
            tracing::debug!("Loading screen finished");
        }

        // Spinner frames advance every fourth tick.
        if self.loading && self.tick_count % 4 == 0 {
            self.mark_dirty();
        }

        if self.reveal.tick() {
            self.mark_dirty();
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Record where sections landed in the last composed page.
    ///
    /// Called by the renderer after every compose; drives the reveal
    /// observer because section positions are only known after layout.
    pub fn update_page_layout(&mut self, extents: Vec<SectionExtent>, page_height: u32) {
        self.section_extents = extents;
        self.page_height = page_height;
        self.clamp_scroll();
        self.observe_sections();
    }

    // ---------------------------------------------------------------------
    // Language and theme
    // ---------------------------------------------------------------------

    /// Switch to the language with `code`. Returns `false`, changing nothing,
    /// for anything other than a supported code.
    pub fn change_language(&mut self, code: &str) -> bool {
        match code.parse::<Lang>() {
            Ok(lang) => {
                self.set_language(lang);
                true
            }
            Err(e) => {
                tracing::debug!("Rejected language change: {}", e);
                false
            }
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.lang.toggled());
    }

    fn set_language(&mut self, lang: Lang) {
        self.lang = lang;
        self.storage.set_session(LANG_KEY, lang.code());
        self.mark_dirty();
    }

    /// Flip the theme, update the document root and persist the choice.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.document.set_dark(self.dark_mode);
        let value = if self.dark_mode { "dark" } else { "light" };
        self.storage.set(THEME_KEY, value);
        self.mark_dirty();
    }

    // ---------------------------------------------------------------------
    // Menu and navigation
    // ---------------------------------------------------------------------

    /// Open or close the overlay menu. Opening only happens in the narrow
    /// layout, where the menu replaces the navbar links.
    pub fn toggle_menu(&mut self) {
        if !self.menu.is_open() && !self.is_mobile_layout() {
            return;
        }
        self.menu.toggle(&self.document);
        self.mark_dirty();
    }

    pub fn close_menu(&mut self) {
        if self.menu.is_open() {
            self.menu.close();
            self.mark_dirty();
        }
    }

    /// Follow a navigation link: close the menu, then scroll to the section.
    pub fn navigate_to(&mut self, section: SectionId) {
        self.close_menu();
        if let Some(top) = self.section_top(section) {
            self.scroll_to(top);
        }
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub(crate) fn menu_mut(&mut self) -> &mut MobileMenu {
        &mut self.menu
    }

    pub fn toggle_courses(&mut self) {
        self.courses_expanded = !self.courses_expanded;
        self.mark_dirty();
    }

    // ---------------------------------------------------------------------
    // Scrolling
    // ---------------------------------------------------------------------

    /// Scroll by `delta` rows. Ignored while the menu holds the scroll lock.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = if delta.is_negative() {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(target);
    }

    /// Scroll by whole pages, keeping one row of overlap.
    pub fn scroll_pages(&mut self, pages: i32) {
        let page = self.viewport_height().saturating_sub(1).max(1) as i32;
        self.scroll_by(page.saturating_mul(pages));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    pub fn scroll_to(&mut self, offset: u32) {
        if self.document.is_scroll_locked() {
            return;
        }
        let offset = offset.min(self.max_scroll());
        if offset == self.scroll_offset {
            return;
        }
        self.scroll_offset = offset;
        self.on_scroll();
        self.mark_dirty();
    }

    /// Scroll listener body; only runs while the listener is attached.
    fn on_scroll(&mut self) {
        if self.scroll_listener.is_none() {
            return;
        }
        self.scrolled = self.scroll_offset > SCROLL_THRESHOLD_ROWS;
        self.observe_sections();
    }

    fn observe_sections(&mut self) {
        if self.loading {
            return;
        }
        let viewport = self.viewport_height();
        if self
            .reveal
            .observe(&self.section_extents, self.scroll_offset, viewport)
        {
            self.mark_dirty();
        }
    }

    fn section_top(&self, section: SectionId) -> Option<u32> {
        self.section_extents
            .iter()
            .find(|extent| extent.id == section)
            .map(|extent| extent.top)
    }

    /// Pull the offset back inside the page after the page or viewport
    /// shrank. Goes through the scroll listener like any other scroll.
    fn clamp_scroll(&mut self) {
        let clamped = self.scroll_offset.min(self.max_scroll());
        if clamped != self.scroll_offset {
            self.scroll_offset = clamped;
            self.on_scroll();
            self.mark_dirty();
        }
    }

    fn max_scroll(&self) -> u32 {
        self.page_height.saturating_sub(self.viewport_height())
    }

    // ---------------------------------------------------------------------
    // Terminal geometry
    // ---------------------------------------------------------------------

    /// Track the terminal size. Widening past the menu breakpoint closes the
    /// overlay.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        if !self.is_mobile_layout() {
            self.close_menu();
        }
        self.clamp_scroll();
        self.mark_dirty();
    }

    /// Narrow layout: navbar links collapse into the overlay menu.
    pub fn is_mobile_layout(&self) -> bool {
        self.terminal_width < breakpoints::MD_WIDTH
    }

    /// Rows available to the scrolling body.
    pub fn viewport_height(&self) -> u32 {
        u32::from(body_height(self.terminal_height))
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        (self.terminal_width, self.terminal_height)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Bundle for the current language. Every section reads from the same
    /// bundle within a frame, so a language switch never renders mixed text.
    pub fn translations(&self) -> &Translations {
        self.table.get(self.lang)
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn courses_expanded(&self) -> bool {
        self.courses_expanded
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn page_height(&self) -> u32 {
        self.page_height
    }

    pub fn stats(&self) -> StatsState {
        self.stats
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn visibility(&self, section: SectionId) -> Visibility {
        self.reveal.visibility(section)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::adapters::{FlakyStore, MockHttpClient};
    use std::time::Duration;

    fn table() -> Arc<LocalizationTable> {
        Arc::new(LocalizationTable::load().unwrap())
    }

    fn config() -> StartupConfig {
        StartupConfig::new().with_data_dir(None).with_offline(true)
    }

    fn mount_with(storage: Storage) -> (App, Document, Instant) {
        let doc = Document::new();
        let now = Instant::now();
        let app = App::mount(&config(), storage, table(), doc.clone(), now);
        (app, doc, now)
    }

    fn tall_page() -> Vec<SectionExtent> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| SectionExtent {
                id,
                top: i as u32 * 30,
                height: 30,
            })
            .collect()
    }

    #[test]
    fn test_mount_defaults() {
        let (app, doc, _) = mount_with(Storage::in_memory());
        assert!(app.is_loading());
        assert_eq!(app.lang(), Lang::Tr);
        assert!(!app.is_dark_mode());
        assert!(!app.is_menu_open());
        assert!(doc.root_classes().is_empty());
        assert_eq!(doc.subscription_count(SubscriptionKind::Scroll), 1);
    }

    #[test]
    fn test_mount_reads_dark_theme() {
        let persistent = FlakyStore::with_items([(THEME_KEY, "dark")]);
        let storage = Storage::new(Some(Arc::new(persistent)), None);
        let (app, doc, _) = mount_with(storage);
        assert!(app.is_dark_mode());
        assert!(doc.is_dark());
    }

    #[test]
    fn test_mount_other_theme_values_are_light() {
        for stored in ["light", "DARK", "", "{\"dark\":true}", "1"] {
            let persistent = FlakyStore::with_items([(THEME_KEY, stored)]);
            let storage = Storage::new(Some(Arc::new(persistent)), None);
            let (app, _, _) = mount_with(storage);
            assert!(!app.is_dark_mode(), "stored {:?}", stored);
        }
    }

    #[test]
    fn test_mount_rejects_unknown_language() {
        for stored in ["de", "EN", "", "null", "[\"en\"]"] {
            let session = FlakyStore::with_items([(LANG_KEY, stored)]);
            let storage = Storage::new(None, Some(Arc::new(session)));
            let (app, _, _) = mount_with(storage);
            assert_eq!(app.lang(), Lang::Tr, "stored {:?}", stored);
        }
    }

    #[test]
    fn test_mount_reads_session_language() {
        let session = FlakyStore::with_items([(LANG_KEY, "en")]);
        let storage = Storage::new(None, Some(Arc::new(session)));
        let (app, _, _) = mount_with(storage);
        assert_eq!(app.lang(), Lang::En);
    }

    #[test]
    fn test_mount_survives_failing_storage() {
        let persistent = FlakyStore::with_items([(THEME_KEY, "dark")]);
        persistent.set_read_should_fail(true);
        let storage = Storage::new(Some(Arc::new(persistent)), None);
        let (app, _, _) = mount_with(storage);
        assert!(!app.is_dark_mode());
    }

    #[test]
    fn test_loading_ends_after_splash_delay() {
        let (mut app, _, start) = mount_with(Storage::in_memory());
        app.tick(start + Duration::from_millis(500));
        assert!(app.is_loading());
        app.tick(start + Duration::from_millis(800));
        assert!(!app.is_loading());
    }

    #[test]
    fn test_change_language_validates() {
        let session = FlakyStore::new();
        let storage = Storage::new(None, Some(Arc::new(session.clone())));
        let (mut app, _, _) = mount_with(storage);

        assert!(!app.change_language("fr"));
        assert_eq!(app.lang(), Lang::Tr);
        assert_eq!(session.peek(LANG_KEY), None);

        assert!(app.change_language("en"));
        assert_eq!(app.lang(), Lang::En);
        assert_eq!(session.peek(LANG_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_initial_lang_from_config() {
        let doc = Document::new();
        let cfg = config().with_initial_lang("en");
        let app = App::mount(&cfg, Storage::in_memory(), table(), doc, Instant::now());
        assert_eq!(app.lang(), Lang::En);

        let cfg = config().with_initial_lang("xx");
        let app = App::mount(&cfg, Storage::in_memory(), table(), Document::new(), Instant::now());
        assert_eq!(app.lang(), Lang::Tr);
    }

    #[test]
    fn test_translations_follow_language() {
        let (mut app, _, _) = mount_with(Storage::in_memory());
        let tr_about = app.translations().navbar.about.clone();
        app.toggle_language();
        assert_ne!(app.translations().navbar.about, tr_about);
        assert_eq!(app.translations(), table().get(Lang::En));
    }

    #[test]
    fn test_toggle_dark_mode_twice() {
        let persistent = FlakyStore::new();
        let storage = Storage::new(Some(Arc::new(persistent.clone())), None);
        let (mut app, doc, _) = mount_with(storage);

        app.toggle_dark_mode();
        assert!(app.is_dark_mode());
        assert!(doc.is_dark());
        assert_eq!(persistent.peek(THEME_KEY).as_deref(), Some("dark"));

        app.toggle_dark_mode();
        assert!(!app.is_dark_mode());
        assert!(!doc.is_dark());
        assert_eq!(persistent.peek(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_menu_only_opens_in_narrow_layout() {
        let (mut app, doc, _) = mount_with(Storage::in_memory());
        app.resize(120, 40);
        app.toggle_menu();
        assert!(!app.is_menu_open());

        app.resize(60, 30);
        app.toggle_menu();
        assert!(app.is_menu_open());
        assert!(doc.is_scroll_locked());
    }

    #[test]
    fn test_menu_lock_released_on_every_exit_path() {
        let (mut app, doc, _) = mount_with(Storage::in_memory());
        app.resize(60, 30);

        app.toggle_menu();
        app.toggle_menu();
        assert!(!doc.is_scroll_locked());

        app.toggle_menu();
        app.navigate_to(SectionId::Contact);
        assert!(!doc.is_scroll_locked());

        app.toggle_menu();
        app.resize(100, 30);
        assert!(!app.is_menu_open());
        assert!(!doc.is_scroll_locked());

        app.resize(60, 30);
        app.toggle_menu();
        app.unmount();
        assert!(!doc.is_scroll_locked());
    }

    #[test]
    fn test_drop_releases_everything() {
        let (mut app, doc, start) = mount_with(Storage::in_memory());
        app.resize(60, 30);
        app.tick(start + Duration::from_secs(1));
        app.toggle_menu();
        assert!(doc.is_scroll_locked());
        assert_eq!(doc.total_subscriptions(), 2);

        drop(app);
        assert!(!doc.is_scroll_locked());
        assert_eq!(doc.total_subscriptions(), 0);
    }

    #[test]
    fn test_unmount_is_idempotent_and_cancels_splash() {
        let (mut app, _, start) = mount_with(Storage::in_memory());
        app.unmount();
        app.unmount();
        app.tick(start + Duration::from_secs(2));
        assert!(app.is_loading());
        assert!(!app.is_mounted());
    }

    #[test]
    fn test_scrolled_threshold() {
        let (mut app, _, start) = mount_with(Storage::in_memory());
        app.resize(120, 20);
        app.tick(start + Duration::from_secs(1));
        app.update_page_layout(tall_page(), 270);

        app.scroll_to(3);
        assert!(!app.is_scrolled());
        app.scroll_by(1);
        assert!(app.is_scrolled());
        app.scroll_to_top();
        assert!(!app.is_scrolled());
    }

    #[test]
    fn test_growing_viewport_clears_scrolled_flag() {
        let (mut app, _, start) = mount_with(Storage::in_memory());
        app.resize(120, 20);
        app.tick(start + Duration::from_secs(1));
        app.update_page_layout(tall_page(), 270);
        app.scroll_to_bottom();
        assert!(app.is_scrolled());

        app.resize(120, 300);
        app.update_page_layout(tall_page(), 270);
        assert_eq!(app.scroll_offset(), 0);
        assert!(!app.is_scrolled());
    }

    #[test]
    fn test_shorter_page_keeps_scrolled_flag_in_sync() {
        let (mut app, _, start) = mount_with(Storage::in_memory());
        app.resize(120, 20);
        app.tick(start + Duration::from_secs(1));
        app.update_page_layout(tall_page(), 270);
        app.scroll_to_bottom();

        // Page shrinks to one screen plus two rows.
        let short_page = app.viewport_height() + 2;
        app.update_page_layout(tall_page(), short_page);
        assert_eq!(app.scroll_offset(), 2);
        assert_eq!(
            app.is_scrolled(),
            app.scroll_offset() > SCROLL_THRESHOLD_ROWS
        );
        assert!(!app.is_scrolled());
    }

    #[test]
    fn test_scroll_is_clamped_and_locked() {
        let (mut app, _, _) = mount_with(Storage::in_memory());
        app.resize(60, 20);
        app.update_page_layout(tall_page(), 270);

        app.scroll_to_bottom();
        assert_eq!(app.scroll_offset(), 270 - app.viewport_height());
        app.scroll_by(50);
        assert_eq!(app.scroll_offset(), 270 - app.viewport_height());

        app.scroll_to_top();
        app.toggle_menu();
        app.scroll_by(5);
        assert_eq!(app.scroll_offset(), 0);
    }

    #[test]
    fn test_no_reveal_while_loading() {
        let (mut app, doc, start) = mount_with(Storage::in_memory());
        app.resize(120, 40);
        app.update_page_layout(tall_page(), 270);
        assert!(!app.reveal().is_revealed(SectionId::About));
        assert_eq!(doc.subscription_count(SubscriptionKind::SectionObserver), 0);

        app.tick(start + Duration::from_secs(1));
        assert_eq!(doc.subscription_count(SubscriptionKind::SectionObserver), 1);
        app.update_page_layout(tall_page(), 270);
        assert!(app.reveal().is_revealed(SectionId::About));
        assert!(!app.reveal().is_revealed(SectionId::Contact));
    }

    #[test]
    fn test_navigate_scrolls_to_section() {
        let (mut app, _, start) = mount_with(Storage::in_memory());
        app.resize(120, 20);
        app.tick(start + Duration::from_secs(1));
        app.update_page_layout(tall_page(), 270);

        app.navigate_to(SectionId::Skills);
        assert_eq!(app.scroll_offset(), 120);
        assert!(app.reveal().is_revealed(SectionId::Skills));
    }

    #[test]
    fn test_courses_toggle() {
        let (mut app, _, _) = mount_with(Storage::in_memory());
        assert!(!app.courses_expanded());
        app.toggle_courses();
        assert!(app.courses_expanded());
    }

    #[tokio::test]
    async fn test_unmount_cancels_stats_request() {
        let doc = Document::new();
        let online = config().with_offline(false);
        let mut app = App::mount(&online, Storage::in_memory(), table(), doc, Instant::now());
        let client = Arc::new(MockHttpClient::new());
        client.set_default_response(MockResponse::Pending);

        app.start_stats(client, "http://localhost/stats".to_string());
        assert!(app.has_stats_task());
        assert_eq!(app.stats(), StatsState::Loading);

        app.unmount();
        assert!(!app.has_stats_task());
        assert_eq!(app.stats(), StatsState::Unavailable);
    }

    #[test]
    fn test_stats_without_runtime_is_unavailable() {
        let doc = Document::new();
        let online = config().with_offline(false);
        let mut app = App::mount(&online, Storage::in_memory(), table(), doc, Instant::now());

        app.start_stats(
            Arc::new(MockHttpClient::new()),
            "http://localhost/stats".to_string(),
        );
        assert!(!app.has_stats_task());
        assert_eq!(app.stats(), StatsState::Unavailable);
    }

    #[test]
    fn test_offline_stats_unavailable() {
        let (app, _, _) = mount_with(Storage::in_memory());
        assert_eq!(app.stats(), StatsState::Unavailable);
    }
}
