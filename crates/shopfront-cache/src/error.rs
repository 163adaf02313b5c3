//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The storage backend is not reachable (no window, storage disabled).
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The backend rejected a read, write or delete.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// The backend refused a write because it is full.
    #[error("Storage quota exceeded writing {0}")]
    QuotaExceeded(String),
}
