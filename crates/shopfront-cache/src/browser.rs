//! Browser `localStorage` backend.

use crate::{CacheError, KvStore};

/// [`KvStore`] backed by `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the current window's local storage.
    ///
    /// Fails when there is no window (workers, SSR) or storage is disabled.
    pub fn open() -> Result<Self, CacheError> {
        let window = web_sys::window()
            .ok_or_else(|| CacheError::OpenError("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::OpenError(format!("{e:?}")))?
            .ok_or_else(|| CacheError::OpenError("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KvStore for LocalStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.storage
            .get_item(key)
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        // Browsers throw a QuotaExceededError DOMException when full.
        self.storage
            .set_item(key, value)
            .map_err(|_| CacheError::QuotaExceeded(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.storage
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(format!("{e:?}")))
    }
}
