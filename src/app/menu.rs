//! Mobile navigation overlay.

use super::document::{Document, ScrollLock};
use super::reveal::SectionId;

/// Open/closed state of the overlay menu.
///
/// While open the menu owns a [`ScrollLock`]; every path that closes the
/// menu, including dropping it, releases the lock.
#[derive(Debug, Default)]
pub struct MobileMenu {
    lock: Option<ScrollLock>,
    selected: usize,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    pub fn open(&mut self, document: &Document) {
        if self.lock.is_none() {
            self.lock = Some(document.lock_scroll());
            self.selected = 0;
        }
    }

    pub fn close(&mut self) {
        self.lock = None;
    }

    pub fn toggle(&mut self, document: &Document) {
        if self.is_open() {
            self.close();
        } else {
            self.open(document);
        }
    }

    /// Highlighted entry in the overlay.
    pub fn selected(&self) -> SectionId {
        SectionId::NAV[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SectionId::NAV.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + SectionId::NAV.len() - 1) % SectionId::NAV.len();
    }
}
