//! Persisted override store: a lock-guarded properties file.
//!
//! The store is a UTF-8 text file holding one `name=value` pair per line,
//! sorted by name so rewrites diff deterministically. Every operation runs
//! under an exclusive cross-process advisory lock on a sibling `<file>.lock`
//! file, and every rewrite goes through a temporary file renamed over the
//! original so the store is never left half-written. Pairs the line format
//! cannot round-trip are rejected before anything touches the file.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use fs2::FileExt as _;

use crate::error::StoreError;
use crate::vars::Override;

/// Handle to the persisted override store file.
///
/// The file does not need to exist: it is created empty on first access.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    path: PathBuf,
}

/// Scoped exclusive lock on a store file.
///
/// Construction blocks until the lock is acquired; dropping the guard
/// releases it on every exit path.
#[derive(Debug)]
struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Block until the exclusive lock on `store_path`'s lock file is held.
    fn acquire(store_path: &Path) -> Result<Self, StoreError> {
        let mut os_name = store_path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        os_name.push(".lock");
        let path = store_path.with_file_name(os_name);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| StoreError::Lock {
                path: path.clone(),
                source,
            })?;
        file.lock_exclusive().map_err(|source| StoreError::Lock {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(lock = %path.display(), "acquired store lock");
        Ok(Self { file, path })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(err) = fs2::FileExt::unlock(&self.file) {
            tracing::warn!(lock = %self.path.display(), %err, "failed to release store lock");
        }
    }
}

/// Reject pairs that would not survive a rewrite-then-read round trip.
///
/// Line breaks split a pair across lines, `=` in a name shifts the
/// name/value boundary, and a leading `#` turns the line into a comment.
fn check_storable(name: &str, value: &str) -> Result<(), StoreError> {
    let fault = if name.contains(['\n', '\r']) {
        Some(("name", name, "contains a line break"))
    } else if name.contains('=') {
        Some(("name", name, "contains \"=\""))
    } else if name.starts_with('#') {
        Some(("name", name, "starts with \"#\""))
    } else if value.contains(['\n', '\r']) {
        Some(("value", value, "contains a line break"))
    } else {
        None
    };
    match fault {
        Some((what, text, reason)) => Err(StoreError::Unstorable {
            what,
            text: text.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

impl OverrideStore {
    /// Create a handle to the store file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all overrides from the store, in file (name) order.
    ///
    /// Creates the store file empty if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lock cannot be acquired, the file cannot
    /// be created or read, or a line is not a `name=value` pair.
    pub fn list(&self) -> Result<Vec<Override>, StoreError> {
        let _lock = StoreLock::acquire(&self.path)?;
        self.read_locked()
    }

    /// Insert or replace the override for `name`, rewriting the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unstorable`] for a pair the line format cannot
    /// round-trip, and otherwise [`StoreError`] on lock, read, parse, or
    /// write failure. Any failure leaves the previous store contents intact.
    pub fn set(&self, name: &str, value: &str) -> Result<(), StoreError> {
        check_storable(name, value)?;
        let _lock = StoreLock::acquire(&self.path)?;
        let mut pairs = self.read_pairs_locked()?;
        pairs.insert(name.to_string(), value.to_string());
        tracing::debug!(name, value, "setting override");
        self.write_locked(&pairs)
    }

    /// Remove the override for `name` if present, rewriting the store.
    ///
    /// Removing an absent name is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on lock, read, parse, or write failure.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let _lock = StoreLock::acquire(&self.path)?;
        let mut pairs = self.read_pairs_locked()?;
        if pairs.remove(name).is_none() {
            tracing::debug!(name, "delete of absent override is a no-op");
            return Ok(());
        }
        tracing::debug!(name, "deleting override");
        self.write_locked(&pairs)
    }

    /// Read overrides assuming the lock is already held.
    fn read_locked(&self) -> Result<Vec<Override>, StoreError> {
        Ok(self
            .read_pairs_locked()?
            .into_iter()
            .map(|(name, value)| Override { name, value })
            .collect())
    }

    /// Read the store into a sorted name→value map, creating it if absent.
    fn read_pairs_locked(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "creating empty store file");
            File::create(&self.path).map_err(|source| StoreError::Io {
                action: "create",
                path: self.path.clone(),
                source,
            })?;
        }
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            action: "read",
            path: self.path.clone(),
            source,
        })?;
        let mut pairs = BTreeMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((name, value)) = trimmed.split_once('=') else {
                return Err(StoreError::Parse {
                    path: self.path.clone(),
                    line: idx + 1,
                    text: trimmed.to_string(),
                });
            };
            pairs.insert(name.trim().to_string(), value.trim().to_string());
        }
        Ok(pairs)
    }

    /// Atomically replace the store contents with `pairs`, sorted by name.
    ///
    /// Writes to a temporary file in the same directory, flushes it to disk,
    /// then renames it over the store file.
    fn write_locked(&self, pairs: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let mut os_name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        os_name.push(format!(".{}.tmp", std::process::id()));
        let temp_path = self.path.with_file_name(os_name);

        let mut rendered = String::new();
        for (name, value) in pairs {
            rendered.push_str(name);
            rendered.push('=');
            rendered.push_str(value);
            rendered.push('\n');
        }

        let write_temp = || -> std::io::Result<()> {
            let mut temp_file = File::create(&temp_path)?;
            temp_file.write_all(rendered.as_bytes())?;
            temp_file.sync_all()
        };
        write_temp().map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Io {
                action: "write",
                path: temp_path.clone(),
                source,
            }
        })?;

        fs::rename(&temp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Io {
                action: "rename",
                path: self.path.clone(),
                source,
            }
        })
    }
}
