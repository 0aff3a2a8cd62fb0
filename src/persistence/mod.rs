//! Key/value persistence port
//!
//! The simulation never touches storage directly. A [`crate::Session`] reads
//! the best score on construction and writes it back when a run beats it.
//!
//! Backends:
//! - [`MemoryStorage`]: in-process map, used by tests and headless runs
//! - [`JsonFileStorage`]: JSON document on disk (native only)
//! - `LocalStorage`: browser LocalStorage (wasm only)
//!
//! Port methods never fail. Backends log write errors and fall back to
//! defaults on read errors so a broken store can't stop the game loop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::consts::SCORE_KEY;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStorage;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

/// Errors from opening a storage backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Durable key/value store for small settings
pub trait Storage {
    fn get_int(&self, key: &str, default: i64) -> i64;
    fn put_int(&mut self, key: &str, value: i64);
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn put_bool(&mut self, key: &str, value: bool);
}

/// Read the persisted best score (0 when missing or out of range)
pub fn load_best_score(storage: &impl Storage) -> u32 {
    u32::try_from(storage.get_int(SCORE_KEY, 0)).unwrap_or(0)
}

/// Persist a new best score
pub fn save_best_score(storage: &mut impl Storage, score: u32) {
    storage.put_int(SCORE_KEY, i64::from(score));
    log::info!("Best score saved ({})", score);
}

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStorage {
    values: BTreeMap<String, Value>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values
            .get(key)
            .and_then(Value::as_i64)
            .unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), Value::from(value));
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), Value::from(value));
    }
}
