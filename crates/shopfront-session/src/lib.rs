//! Session-level client state for the Shopfront storefront.
//!
//! Provides:
//! - [`AuthState`] - signed-in flag and user profile
//! - [`ThemeStore`] - light/dark preference
//! - [`StorefrontConfig`] - integration policy, loaded from TOML or JSON
//! - [`Storefront`] - one value that owns the cart and the stores above
//!
//! # Example
//!
//! ```rust
//! use shopfront_cache::MemoryStore;
//! use shopfront_cart::prelude::*;
//! use shopfront_session::{Storefront, StorefrontConfig, UserProfile};
//!
//! let mut shop = Storefront::open(StorefrontConfig::default(), MemoryStore::new(), TracingNotifier);
//! let lamp = Product::new(1, "lamp", "Desk Lamp", Price::from_cents(2450));
//!
//! // Signed-out visitors cannot add to the cart by default.
//! assert_eq!(shop.add_to_cart(&lamp), CartChange::Unchanged);
//!
//! shop.login(UserProfile::named("ada"));
//! shop.add_to_cart(&lamp);
//! assert_eq!(shop.cart().total(), "24.50");
//!
//! shop.logout();
//! assert!(shop.cart().is_empty());
//! ```

pub mod auth;
pub mod config;
mod error;
pub mod storefront;
pub mod theme;

pub use auth::{AuthState, UserProfile};
pub use config::StorefrontConfig;
pub use error::SessionError;
pub use storefront::Storefront;
pub use theme::{ThemeMode, ThemeStore};
