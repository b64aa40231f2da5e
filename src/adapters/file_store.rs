//! File-backed key-value store.
//!
//! Each store owns one JSON file holding a flat object of string values,
//! e.g. `{"theme": "dark"}`. The persistent scope lives in
//! `~/.folio/storage.json`; the session scope lives in the temp directory,
//! keyed by the id of the shell that launched folio.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::traits::{KeyValueStore, StorageError};

/// The data directory name under the home directory.
pub const DATA_DIR: &str = ".folio";

/// The persistent storage file name.
pub const PERSISTENT_FILE: &str = "storage.json";

/// JSON-file key-value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persistent store inside `data_dir`.
    pub fn persistent(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PERSISTENT_FILE))
    }

    /// Session store for the current terminal session.
    ///
    /// Returns `None` when the platform exposes no parent process id.
    pub fn session() -> Option<Self> {
        session_key().map(|key| Self::new(std::env::temp_dir().join(session_file_name(key))))
    }

    /// Delete session files in `dir` whose owning shell has exited.
    ///
    /// Files for `keep` and for any id `is_alive` accepts are left alone.
    /// Returns how many files were removed.
    pub fn prune_sessions(dir: &Path, keep: Option<u32>, is_alive: impl Fn(u32) -> bool) -> usize {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot scan {} for session files: {}", dir.display(), e);
                return 0;
            }
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(pid) = name.to_str().and_then(session_pid) else {
                continue;
            };
            if Some(pid) == keep || is_alive(pid) {
                continue;
            }
            match fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) => tracing::debug!("Could not remove {}: {}", entry.path().display(), e),
            }
        }
        if removed > 0 {
            tracing::info!("Removed {} stale session file(s)", removed);
        }
        removed
    }

    /// Prune stale session files in the system temp directory.
    pub fn prune_stale_sessions() -> usize {
        Self::prune_sessions(&std::env::temp_dir(), session_key(), process_alive)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, map).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e.into(),
        })?;
        writer.flush().map_err(write_err)
    }

    /// Map used as the base of a write. A corrupt file is replaced rather
    /// than blocking every future write.
    fn map_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.load_map() {
            Err(StorageError::Corrupt { path, source }) => {
                tracing::warn!("Replacing corrupt storage file {}: {}", path.display(), source);
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.map_for_write()?;
        if map.remove(key).is_some() {
            self.save_map(&map)?;
        }
        Ok(())
    }
}

const SESSION_PREFIX: &str = "folio-session-";

fn session_file_name(pid: u32) -> String {
    format!("{}{}.json", SESSION_PREFIX, pid)
}

/// Parent id encoded in a session file name.
fn session_pid(name: &str) -> Option<u32> {
    name.strip_prefix(SESSION_PREFIX)?
        .strip_suffix(".json")?
        .parse()
        .ok()
}

/// Whether process `pid` still exists. Without `/proc` every process is
/// assumed alive, so nothing is pruned.
fn process_alive(pid: u32) -> bool {
    let proc_root = Path::new("/proc");
    if !proc_root.join("self").exists() {
        return true;
    }
    proc_root.join(pid.to_string()).exists()
}

#[cfg(unix)]
fn session_key() -> Option<u32> {
    Some(std::os::unix::process::parent_id())
}

#[cfg(not(unix))]
fn session_key() -> Option<u32> {
    None
}
