//! Application-level wiring of the client-state stores.

use shopfront_cache::KvStore;
use shopfront_cart::cart::{CartChange, CartStore};
use shopfront_cart::notify::{Notification, Notifier};
use shopfront_cart::product::Product;
use tracing::debug;

use crate::auth::{AuthState, UserProfile};
use crate::config::StorefrontConfig;
use crate::theme::{ThemeMode, ThemeStore};

/// The storefront's client state: cart, sign-in state and theme.
///
/// Built once at startup over one storage backend and one notifier, then
/// passed by reference to the views that need it. The cart-related policy
/// decisions (login gating, clearing on logout) live here rather than in
/// the cart itself.
pub struct Storefront<S, N> {
    config: StorefrontConfig,
    cart: CartStore<S, N>,
    auth: AuthState<S, N>,
    theme: ThemeStore<S>,
    notifier: N,
}

impl<S, N> Storefront<S, N>
where
    S: KvStore + Clone,
    N: Notifier + Clone,
{
    /// Restore every store from `store`.
    pub fn open(config: StorefrontConfig, store: S, notifier: N) -> Self {
        let cart = CartStore::with_key(
            store.clone(),
            notifier.clone(),
            config.cart.storage_key.clone(),
        );
        let auth = AuthState::open(store.clone(), notifier.clone());
        let theme = ThemeStore::open(store, config.theme.default_mode);

        Self {
            config,
            cart,
            auth,
            theme,
            notifier,
        }
    }

    /// Add one unit of `product`, unless login is required and nobody is
    /// signed in.
    pub fn add_to_cart<'a>(&mut self, product: impl Into<Option<&'a Product>>) -> CartChange {
        let Some(product) = product.into() else {
            return CartChange::Unchanged;
        };

        if self.config.auth.require_login_for_cart && !self.auth.is_authenticated() {
            debug!(product = %product.id, "add to cart refused while signed out");
            self.notifier
                .notify(Notification::info("Please login to add items to cart"));
            return CartChange::Unchanged;
        }

        self.cart.add_to_cart(product)
    }

    /// Record a successful login.
    pub fn login(&mut self, user: UserProfile) {
        self.auth.login(user);
    }

    /// Sign out, then clear the cart if the config says so.
    pub fn logout(&mut self) -> CartChange {
        self.auth.logout();
        if self.config.auth.clear_cart_on_logout {
            self.cart.clear_cart()
        } else {
            CartChange::Unchanged
        }
    }

    /// Flip the theme; returns the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle()
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartStore<S, N> {
        &self.cart
    }

    /// Direct cart access for line-level operations (remove, set quantity).
    pub fn cart_mut(&mut self) -> &mut CartStore<S, N> {
        &mut self.cart
    }

    pub fn auth(&self) -> &AuthState<S, N> {
        &self.auth
    }

    pub fn theme(&self) -> &ThemeStore<S> {
        &self.theme
    }
}
