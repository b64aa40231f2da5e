//! Key-value store trait abstraction.
//!
//! A [`KeyValueStore`] is one browser-style storage area: string keys mapped
//! to string values. The [`Storage`](crate::storage::Storage) adapter layers
//! JSON decoding and failure swallowing on top of it.

use std::path::PathBuf;
use thiserror::Error;

/// Key-value store errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the backing file failed
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the backing file failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file does not hold a JSON object of strings
    #[error("Corrupt storage file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The store refused the operation (quota, disabled, injected failure)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// One synchronous storage area.
///
/// Implementations must not panic; every failure is reported through
/// [`StorageError`].
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, `Ok(None)` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
