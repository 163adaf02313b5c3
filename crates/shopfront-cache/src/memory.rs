//! In-memory key-value backend.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{CacheError, KvStore};

/// In-process [`KvStore`].
///
/// Clones share the same map, so a test can hand one handle to a store and
/// inspect what it wrote through another. Writes can be made to fail to
/// exercise quota handling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    values: BTreeMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set_raw` and `delete` fail with
    /// [`CacheError::QuotaExceeded`] (or succeed again with `false`).
    pub fn reject_writes(&self, reject: bool) {
        self.inner.borrow_mut().reject_writes = reject;
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().values.is_empty()
    }

    /// All stored keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().values.keys().cloned().collect()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.inner.borrow().values.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut inner = self.inner.borrow_mut();
        if inner.reject_writes {
            return Err(CacheError::QuotaExceeded(key.to_string()));
        }
        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut inner = self.inner.borrow_mut();
        if inner.reject_writes {
            return Err(CacheError::StoreError(format!("delete rejected: {key}")));
        }
        inner.values.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.inner.borrow().values.contains_key(key))
    }
}
