//! Key-value store with injectable failures.
//!
//! Models a browser storage area that throws: quota exceeded on write,
//! storage disabled on read.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::adapters::MemoryStore;
use crate::traits::{KeyValueStore, StorageError};

/// In-memory store whose reads and writes can be made to fail.
///
/// # Example
///
/// ```ignore
/// use folio::adapters::mock::FlakyStore;
///
/// let store = FlakyStore::new();
/// store.set_write_should_fail(true);
/// assert!(store.set_item("theme", "dark").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    read_should_fail: Arc<AtomicBool>,
    write_should_fail: Arc<AtomicBool>,
}

impl FlakyStore {
    /// Create a store that does not fail yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`.
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            inner: MemoryStore::with_items(items),
            ..Self::default()
        }
    }

    /// Configure whether reads should fail.
    pub fn set_read_should_fail(&self, should_fail: bool) {
        self.read_should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Configure whether writes should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        self.write_should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Read the raw value bypassing any injected failure.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.read_should_fail.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.write_should_fail.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.write_should_fail.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injected_failures() {
        let store = FlakyStore::with_items([("theme", "dark")]);
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));

        store.set_read_should_fail(true);
        assert!(store.get_item("theme").is_err());

        store.set_write_should_fail(true);
        assert!(store.set_item("theme", "light").is_err());
        assert_eq!(store.peek("theme").as_deref(), Some("dark"));
    }
}
