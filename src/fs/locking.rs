//! Per-key advisory locks.
//!
//! A filing operation reads, deletes and writes cards in several steps. When
//! `file_management.lock_keys` is on, the manager holds an exclusive `fs2`
//! lock on `<vault>/.wordcard-locks/<key>.lock` for the whole sequence so two
//! writers of the same key cannot interleave. The key in the file name is
//! normalized and lowercased.
//!
//! Advisory locks are cooperative: only processes that take the lock are
//! serialized.

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::VaultError;
use crate::models::normalize_key;

const LOCK_DIR: &str = ".wordcard-locks";

/// Exclusive lock on one key, released on drop.
#[derive(Debug)]
pub struct KeyLock {
    file: File,
    path: PathBuf,
}

impl KeyLock {
    /// Block until the lock for `key` under `vault_root` is held.
    pub fn acquire(vault_root: &Path, key: &str) -> Result<Self, VaultError> {
        let lock_err = |source: std::io::Error| VaultError::Lock {
            key: key.to_string(),
            source,
        };

        let dir = vault_root.join(LOCK_DIR);
        fs::create_dir_all(&dir).map_err(lock_err)?;

        let path = dir.join(lock_file_name(key));
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(lock_err)?;
        file.lock_exclusive().map_err(lock_err)?;

        tracing::debug!(key, path = %path.display(), "acquired key lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Keys that differ only in case share one card, so they share one lock.
fn lock_file_name(key: &str) -> String {
    format!("{}.lock", normalize_key(key).to_lowercase())
}

impl Drop for KeyLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to release key lock");
        }
    }
}
