//! Key-value persistence port for Shopfront client state.
//!
//! Every piece of client state (cart snapshot, auth flag, theme preference)
//! is persisted through the [`KvStore`] trait, so the stores that own that
//! state never talk to a concrete storage backend.
//!
//! - [`MemoryStore`] keeps values in process memory (tests, native builds).
//! - `LocalStorage` wraps the browser's `window.localStorage` and is only
//!   available with the `browser` feature.
//! - [`Cache`] layers JSON serialization on top of any backend.
//!
//! # Example
//!
//! ```rust
//! use shopfront_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set("cart", &vec![1, 2, 3]).unwrap();
//! let cart: Option<Vec<u32>> = cache.get("cart").unwrap();
//! assert_eq!(cart, Some(vec![1, 2, 3]));
//!
//! cache.delete("cart").unwrap();
//! assert!(!cache.exists("cart").unwrap());
//! ```

mod error;
mod kv;
mod memory;

#[cfg(feature = "browser")]
mod browser;

pub use error::CacheError;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

#[cfg(feature = "browser")]
pub use browser::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KvStore, MemoryStore};
}
