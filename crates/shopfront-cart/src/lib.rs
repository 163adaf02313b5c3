//! Client-side shopping cart for the Shopfront storefront.
//!
//! The cart keeps an ordered list of line items, derives the item count and
//! a two-decimal total, and writes a JSON snapshot to a [`KvStore`] after
//! every mutation so the cart survives a reload.
//!
//! - **Products**: the record presentation code hands to the cart
//! - **Cart**: line items, merge policy, derived values, persistence
//! - **Notifications**: user-facing messages emitted by mutations
//!
//! # Example
//!
//! ```rust
//! use shopfront_cache::MemoryStore;
//! use shopfront_cart::prelude::*;
//!
//! let mut cart = CartStore::open(MemoryStore::new(), TracingNotifier);
//! let lamp = Product::new(1, "lamp", "Desk Lamp", Price::from_cents(1000));
//!
//! cart.add_to_cart(&lamp);
//! cart.add_to_cart(&lamp);
//!
//! assert_eq!(cart.lines().len(), 1);
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total(), "20.00");
//! ```
//!
//! [`KvStore`]: shopfront_cache::KvStore

pub mod error;
pub mod ids;
pub mod money;
pub mod notify;
pub mod product;

pub mod cart;

pub use error::CartError;
pub use ids::{LineId, ProductRef};
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::{LineId, ProductRef};
    pub use crate::money::Price;
    pub use crate::notify::{Notification, NotificationLevel, Notifier, RecordingNotifier, TracingNotifier};
    pub use crate::product::Product;

    pub use crate::cart::{CartChange, CartLine, CartStore, PersistOutcome, RestoreOutcome};
}
