//! Storage adapter over the persistent and session scopes.
//!
//! Mirrors the browser `localStorage`/`sessionStorage` pair:
//!
//! - reads return the caller's default when the key is absent, the store is
//!   unavailable or the read fails
//! - stored text is decoded as JSON first, then as a plain string
//! - string values are written verbatim, everything else as JSON
//! - failures are logged and swallowed; nothing here returns an error

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::adapters::{FileStore, MemoryStore};
use crate::traits::KeyValueStore;

/// Persistent key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// Session key holding `"tr"` or `"en"`.
pub const LANG_KEY: &str = "lang";

/// Which storage area an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    /// Survives across sessions
    Persistent,
    /// Reset when the terminal session ends
    Session,
}

impl fmt::Display for StorageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageScope::Persistent => write!(f, "persistent"),
            StorageScope::Session => write!(f, "session"),
        }
    }
}

/// Key-value storage with JSON decode and string fallback.
///
/// A scope without a backing store behaves like a browser with storage
/// disabled: reads yield the default and writes do nothing.
#[derive(Clone, Default)]
pub struct Storage {
    persistent: Option<Arc<dyn KeyValueStore>>,
    session: Option<Arc<dyn KeyValueStore>>,
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("persistent", &self.persistent.is_some())
            .field("session", &self.session.is_some())
            .finish()
    }
}

impl Storage {
    /// Create storage over the given stores.
    pub fn new(
        persistent: Option<Arc<dyn KeyValueStore>>,
        session: Option<Arc<dyn KeyValueStore>>,
    ) -> Self {
        Self {
            persistent,
            session,
        }
    }

    /// Storage with no backing facility at all.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Fresh in-memory stores for both scopes.
    pub fn in_memory() -> Self {
        Self::new(
            Some(Arc::new(MemoryStore::new())),
            Some(Arc::new(MemoryStore::new())),
        )
    }

    /// Production storage: `<data_dir>/storage.json` for the persistent
    /// scope and a per-shell file for the session scope.
    pub fn open(data_dir: Option<&std::path::Path>) -> Self {
        let persistent = data_dir
            .map(|dir| Arc::new(FileStore::persistent(dir)) as Arc<dyn KeyValueStore>);
        FileStore::prune_stale_sessions();
        let session: Arc<dyn KeyValueStore> = match FileStore::session() {
            Some(store) => Arc::new(store),
            None => Arc::new(MemoryStore::new()),
        };
        if persistent.is_none() {
            tracing::warn!("No data directory; theme preference will not persist");
        }
        Self::new(persistent, Some(session))
    }

    /// Whether the scope has a backing store.
    pub fn is_available(&self, scope: StorageScope) -> bool {
        self.store(scope).is_some()
    }

    /// Read `key` from the persistent scope.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.read(StorageScope::Persistent, key, default)
    }

    /// Write `value` under `key` in the persistent scope.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        self.write(StorageScope::Persistent, key, value)
    }

    /// Read `key` from the session scope.
    pub fn get_session<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.read(StorageScope::Session, key, default)
    }

    /// Write `value` under `key` in the session scope.
    pub fn set_session<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        self.write(StorageScope::Session, key, value)
    }

    fn store(&self, scope: StorageScope) -> Option<&Arc<dyn KeyValueStore>> {
        match scope {
            StorageScope::Persistent => self.persistent.as_ref(),
            StorageScope::Session => self.session.as_ref(),
        }
    }

    fn read<T: DeserializeOwned>(&self, scope: StorageScope, key: &str, default: T) -> T {
        let Some(store) = self.store(scope) else {
            return default;
        };

        match store.get_item(key) {
            Ok(Some(raw)) => decode(&raw).unwrap_or(default),
            Ok(None) => default,
            Err(e) => {
                tracing::warn!("Error reading {} storage key '{}': {}", scope, key, e);
                default
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, scope: StorageScope, key: &str, value: &T) {
        let Some(store) = self.store(scope) else {
            return;
        };

        let Some(raw) = encode(value) else {
            tracing::warn!("Value for {} storage key '{}' is not serializable", scope, key);
            return;
        };

        if let Err(e) = store.set_item(key, &raw) {
            tracing::warn!("Error saving to {} storage key '{}': {}", scope, key, e);
        }
    }
}

/// Decode stored text: JSON first, then the raw text as a string value.
fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw)
        .or_else(|_| serde_json::from_value(Value::String(raw.to_string())))
        .ok()
}

/// Encode a value for storage: strings verbatim, everything else as JSON.
fn encode<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    match serde_json::to_value(value).ok()? {
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
