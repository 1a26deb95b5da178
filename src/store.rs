//! Whole-file JSON array persistence for user and rating records.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::rating::Rating;
use crate::user::User;

pub const USERS_FILE: &str = "users.json";
pub const RATINGS_FILE: &str = "ratings.json";

const EMPTY_ARRAY: &str = "[]";

/// File-backed record store.
///
/// A pure codec and file I/O boundary: every load re-reads and every save
/// rewrites the whole file, with no caching at this layer.
#[derive(Clone, Debug)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Create a new [`RecordStore`] rooted at `dir`.
    ///
    /// Nothing touches the filesystem until [`Self::ensure_initialized`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the storage directory and both record files with an empty
    /// array when absent. Idempotent.
    pub fn ensure_initialized(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        for path in [self.users_path(), self.ratings_path()] {
            if !path.exists() {
                fs::write(&path, EMPTY_ARRAY)
                    .map_err(|source| StorageError::Io { path, source })?;
            }
        }

        tracing::info!(dir = %self.dir.display(), "storage initialized");
        Ok(())
    }

    /// Parse the full users file.
    pub fn load_users(&self) -> Result<Vec<User>, StorageError> {
        load(&self.users_path())
    }

    /// Rewrite the full users file.
    pub fn save_users(&self, users: &[User]) -> Result<(), StorageError> {
        save(&self.users_path(), users)
    }

    /// Parse the full ratings file.
    pub fn load_ratings(&self) -> Result<Vec<Rating>, StorageError> {
        load(&self.ratings_path())
    }

    /// Rewrite the full ratings file.
    pub fn save_ratings(&self, ratings: &[Rating]) -> Result<(), StorageError> {
        save(&self.ratings_path(), ratings)
    }

    fn users_path(&self) -> PathBuf {
        self.dir.join(USERS_FILE)
    }

    fn ratings_path(&self) -> PathBuf {
        self.dir.join(RATINGS_FILE)
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let raw = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StorageError> {
    let raw = serde_json::to_string_pretty(records).map_err(|source| {
        StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    fs::write(path, raw).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
