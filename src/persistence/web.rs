//! Browser LocalStorage backend (wasm only)

use super::{Storage, StoreError};

/// Storage backed by `window.localStorage`, one item per key
pub struct LocalStorage {
    storage: web_sys::Storage,
    prefix: String,
}

impl LocalStorage {
    /// Open LocalStorage, namespacing every key with `prefix`
    pub fn open(prefix: &str) -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not available".to_string()))?;
        Ok(Self {
            storage,
            prefix: prefix.to_string(),
        })
    }

    fn item_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(&self.item_key(key)).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.storage.set_item(&self.item_key(key), value).is_err() {
            log::warn!("Failed to write LocalStorage key {}", key);
        }
    }
}

impl Storage for LocalStorage {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: i64) {
        self.set(key, &value.to_string());
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.set(key, &value.to_string());
    }
}
