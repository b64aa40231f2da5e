//! Shared visual state of the page.
//!
//! The [`Document`] is what the controller writes into and the renderer reads
//! from: the `dark` root class, whether body scrolling is locked, and which
//! passive listeners are currently attached. Locks and listeners are handed
//! out as guards that release themselves on drop.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Root class applied while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Kind of passive listener attached to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionKind {
    /// Recomputes the scrolled flag on every scroll
    Scroll,
    /// Watches animatable sections entering the viewport
    SectionObserver,
}

#[derive(Debug, Default)]
struct DocumentInner {
    dark: AtomicBool,
    scroll_locks: AtomicUsize,
    next_subscription: AtomicU64,
    subscriptions: Mutex<Vec<(u64, SubscriptionKind)>>,
}

/// Cheap, cloneable handle to the page state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove the `dark` root class.
    pub fn set_dark(&self, dark: bool) {
        self.inner.dark.store(dark, Ordering::SeqCst);
    }

    pub fn is_dark(&self) -> bool {
        self.inner.dark.load(Ordering::SeqCst)
    }

    /// Classes currently on the root element.
    pub fn root_classes(&self) -> Vec<&'static str> {
        if self.is_dark() {
            vec![DARK_CLASS]
        } else {
            Vec::new()
        }
    }

    /// Lock body scrolling until the returned guard is dropped.
    pub fn lock_scroll(&self) -> ScrollLock {
        self.inner.scroll_locks.fetch_add(1, Ordering::SeqCst);
        ScrollLock {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Whether any scroll lock is held.
    pub fn is_scroll_locked(&self) -> bool {
        self.inner.scroll_locks.load(Ordering::SeqCst) > 0
    }

    /// Attach a listener until the returned guard is dropped.
    pub fn subscribe(&self, kind: SubscriptionKind) -> Subscription {
        let id = self.inner.next_subscription.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut subs) = self.inner.subscriptions.lock() {
            subs.push((id, kind));
        }
        tracing::trace!("Attached {:?} listener #{}", kind, id);
        Subscription {
            id,
            kind,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of live listeners of `kind`.
    pub fn subscription_count(&self, kind: SubscriptionKind) -> usize {
        self.inner
            .subscriptions
            .lock()
            .map(|subs| subs.iter().filter(|(_, k)| *k == kind).count())
            .unwrap_or(0)
    }

    /// Number of live listeners of any kind.
    pub fn total_subscriptions(&self) -> usize {
        self.inner
            .subscriptions
            .lock()
            .map(|subs| subs.len())
            .unwrap_or(0)
    }
}

/// Held while body scrolling is suspended.
#[derive(Debug)]
#[must_use = "scrolling unlocks as soon as the guard is dropped"]
pub struct ScrollLock {
    inner: Arc<DocumentInner>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.inner.scroll_locks.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Live registration of a passive listener.
#[derive(Debug)]
#[must_use = "the listener detaches as soon as the guard is dropped"]
pub struct Subscription {
    id: u64,
    kind: SubscriptionKind,
    inner: Arc<DocumentInner>,
}

impl Subscription {
    pub fn kind(&self) -> SubscriptionKind {
        self.kind
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Ok(mut subs) = self.inner.subscriptions.lock() {
            subs.retain(|(id, _)| *id != self.id);
        }
        tracing::trace!("Detached {:?} listener #{}", self.kind, self.id);
    }
}
