//! Persistence adapter: opaque keyed load/save of serialized blobs.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store key for the note collection blob.
pub const NOTES_KEY: &str = "inkr-notes";

/// Store key for the armed undo window, if any.
pub const UNDO_KEY: &str = "inkr-undo";

/// Store key for the appearance preference. Owned by the CLI layer;
/// the note store never reads it.
pub const THEME_KEY: &str = "app-theme";

/// Errors raised at the persistence boundary.
///
/// None of these are fatal to a session: callers keep their in-memory
/// state authoritative and surface the failure as a transient notice.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store could not be read or written.
    #[error("storage unavailable at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blob could not be encoded for writing.
    #[error("failed to encode blob: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Opaque keyed string store.
///
/// The contract mirrors a browser's local storage: `load` returns the
/// blob last saved under `key`, or `None` if nothing was ever saved.
/// There are no transactional guarantees and no schema versioning; a
/// missing or unreadable blob is treated as "no data yet" by callers.
pub trait KvStore {
    /// Loads the blob saved under `key`, if any.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Saves `value` under `key`, replacing any previous blob.
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the blob under `key`. Absence is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// File-backed store: one file per key under a data directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. The directory is created
    /// lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory holding the store's files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.key_path(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.key_path(key);
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.root).map_err(io_err)?;

        // Write-then-rename so a crash mid-save never truncates the blob.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root).map_err(io_err)?;
        tmp.write_all(value.as_bytes()).map_err(io_err)?;
        tmp.persist(&path)
            .map_err(|e| io_err(e.error))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.key_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }
}

/// In-memory store for unit tests and doctests.
///
/// `fail_saves` simulates an unavailable backing store (quota exceeded,
/// storage disabled) so callers can exercise the degraded path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// When set, every `save` fails while `load` keeps working.
    pub fail_saves: bool,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one key.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Returns the raw blob under `key`, for assertions.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KvStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_saves {
            return Err(StoreError::Io {
                path: PathBuf::from(key),
                source: std::io::Error::other("simulated storage failure"),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.fail_saves {
            return Err(StoreError::Io {
                path: PathBuf::from(key),
                source: std::io::Error::other("simulated storage failure"),
            });
        }
        self.entries.remove(key);
        Ok(())
    }
}
