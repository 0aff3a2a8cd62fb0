//! JSON document store on disk
//!
//! The whole store is one small JSON object. Every write replaces the file via
//! a temp file and rename, so a crash mid-write leaves the old document intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::{MemoryStorage, Storage, StoreError};

/// File name used under the platform config directory
const STORE_FILE: &str = "bee-flap.json";

/// Storage backed by a JSON file
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    cache: MemoryStorage,
}

impl JsonFileStorage {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file is an empty store. An unreadable or malformed file is an
    /// error so callers can decide whether to start fresh.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let cache = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => MemoryStorage::new(),
            Err(e) => return Err(e.into()),
        };
        log::info!("Opened store {} ({} keys)", path.display(), cache.len());
        Ok(Self { path, cache })
    }

    /// Default location under the user's config directory
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let dirs = ProjectDirs::from("", "", "bee-flap").ok_or_else(|| {
            StoreError::Unavailable("could not determine config directory".to_string())
        })?;
        let config_dir = dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current contents to disk
    pub fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.cache)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            log::warn!("Failed to write store {}: {}", self.path.display(), e);
        }
    }
}

impl Storage for JsonFileStorage {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.cache.get_int(key, default)
    }

    fn put_int(&mut self, key: &str, value: i64) {
        self.cache.put_int(key, value);
        self.persist();
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.cache.get_bool(key, default)
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.cache.put_bool(key, value);
        self.persist();
    }
}
