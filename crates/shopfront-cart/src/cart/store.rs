//! The cart store: owns the lines, keeps derived values current, and
//! persists a snapshot after every mutation.

use std::collections::HashSet;

use rust_decimal::Decimal;
use shopfront_cache::{Cache, CacheError, KvStore};
use tracing::{debug, warn};

use crate::cart::{CartChange, CartLine, PersistOutcome, RestoreOutcome};
use crate::ids::{LineId, LineIdGenerator};
use crate::money::format_amount;
use crate::notify::{Notification, Notifier};
use crate::product::Product;

/// Storage key of the cart snapshot.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Client-side shopping cart.
///
/// Lines keep insertion order. `count` and `total` are recomputed after
/// every mutation, so readers never see them disagree with `lines`.
/// Mutations take `&mut self`; construct one store at startup and pass it
/// to whatever needs it.
pub struct CartStore<S, N> {
    cache: Cache<S>,
    notifier: N,
    key: String,
    lines: Vec<CartLine>,
    count: i64,
    total: String,
    ids: LineIdGenerator,
    restored: RestoreOutcome,
    last_persist: PersistOutcome,
}

impl<S: KvStore, N: Notifier> CartStore<S, N> {
    /// Open the cart persisted under [`DEFAULT_CART_KEY`].
    pub fn open(store: S, notifier: N) -> Self {
        Self::with_key(store, notifier, DEFAULT_CART_KEY)
    }

    /// Open the cart persisted under `key`.
    ///
    /// Never fails: a missing, blank or unreadable snapshot yields an empty
    /// cart, and the reason is kept in [`CartStore::restore_outcome`].
    pub fn with_key(store: S, notifier: N, key: impl Into<String>) -> Self {
        let mut cart = Self {
            cache: Cache::new(store),
            notifier,
            key: key.into(),
            lines: Vec::new(),
            count: 0,
            total: format_amount(Decimal::ZERO),
            ids: LineIdGenerator::new(),
            restored: RestoreOutcome::Missing,
            last_persist: PersistOutcome::NotAttempted,
        };
        cart.restored = cart.restore();
        cart.recompute();
        cart
    }

    fn restore(&mut self) -> RestoreOutcome {
        let stored = match self.cache.get::<Vec<CartLine>>(&self.key) {
            Ok(Some(lines)) => lines,
            Ok(None) => return RestoreOutcome::Missing,
            Err(CacheError::SerializeError(e)) => {
                warn!(key = %self.key, error = %e, "discarding unreadable cart snapshot");
                return RestoreOutcome::Corrupt(e.to_string());
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart snapshot unavailable");
                return RestoreOutcome::Unavailable(e.to_string());
            }
        };

        let total = stored.len();
        let mut seen = HashSet::with_capacity(total);
        for line in stored {
            if line.quantity < 1 {
                warn!(line_id = %line.id, quantity = line.quantity, "dropping restored line with negative quantity");
                continue;
            }
            if !seen.insert(line.id) {
                warn!(line_id = %line.id, "dropping restored line with duplicate id");
                continue;
            }
            self.ids.observe(line.id);
            self.lines.push(line);
        }

        let lines = self.lines.len();
        debug!(key = %self.key, lines, "restored cart snapshot");
        RestoreOutcome::Restored {
            lines,
            dropped: total - lines,
        }
    }

    /// Add one unit of `product`.
    ///
    /// Merges into the line with the same product id, name and price, or
    /// appends a new line. `None` is a no-op.
    pub fn add_to_cart<'a>(&mut self, product: impl Into<Option<&'a Product>>) -> CartChange {
        let Some(product) = product.into() else {
            return CartChange::Unchanged;
        };

        let change = match self.lines.iter_mut().find(|line| line.matches(product)) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                debug!(line_id = %line.id, quantity = line.quantity, "merged product into cart line");
                self.notifier.notify(Notification::info(format!(
                    "Quantity increased for {}",
                    product.name
                )));
                CartChange::Merged {
                    line_id: line.id,
                    quantity: line.quantity,
                }
            }
            None => {
                let line = CartLine::from_product(self.ids.next_id(), product);
                let line_id = line.id;
                debug!(line_id = %line_id, product = %product.id, "added cart line");
                self.lines.push(line);
                self.notifier.notify(Notification::success(format!(
                    "{} added to cart",
                    product.title
                )));
                CartChange::Added(line_id)
            }
        };

        self.commit();
        change
    }

    /// Delete the line with `line_id`. Unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, line_id: LineId) -> CartChange {
        let Some(index) = self.lines.iter().position(|line| line.id == line_id) else {
            return CartChange::Unchanged;
        };

        let removed = self.lines.remove(index);
        debug!(line_id = %line_id, "removed cart line");
        self.notifier.notify(Notification::info(format!(
            "{} removed from cart",
            removed.name
        )));

        self.commit();
        CartChange::Removed(removed)
    }

    /// Set the quantity of `line_id` to exactly `quantity`.
    ///
    /// A quantity below 1 removes the line. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, line_id: LineId, quantity: i64) -> CartChange {
        if quantity < 1 {
            return self.remove_from_cart(line_id);
        }

        let Some(line) = self.lines.iter_mut().find(|line| line.id == line_id) else {
            return CartChange::Unchanged;
        };
        line.quantity = quantity;
        debug!(line_id = %line_id, quantity, "set cart line quantity");

        self.commit();
        CartChange::QuantitySet { line_id, quantity }
    }

    /// Remove every line and erase the snapshot.
    pub fn clear_cart(&mut self) -> CartChange {
        self.lines.clear();
        self.recompute();

        self.last_persist = match self.cache.delete(&self.key) {
            Ok(()) => PersistOutcome::Erased,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to erase cart snapshot");
                PersistOutcome::Failed(e.to_string())
            }
        };

        debug!("cleared cart");
        self.notifier.notify(Notification::info("Cart cleared"));
        CartChange::Cleared
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line.
    pub fn line(&self, line_id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == line_id)
    }

    /// Sum of quantities.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Sum of `price * quantity`, two decimals.
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Storage key of the snapshot.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// How the snapshot was read at startup.
    pub fn restore_outcome(&self) -> &RestoreOutcome {
        &self.restored
    }

    /// How the most recent mutation was persisted.
    pub fn last_persist(&self) -> &PersistOutcome {
        &self.last_persist
    }

    /// The notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn commit(&mut self) {
        self.recompute();
        self.persist();
    }

    fn recompute(&mut self) {
        self.count = self
            .lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity));
        let total = self
            .lines
            .iter()
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.subtotal()));
        self.total = format_amount(total);
    }

    fn persist(&mut self) {
        self.last_persist = match self.cache.set(&self.key, &self.lines) {
            Ok(()) => PersistOutcome::Saved,
            Err(e) => {
                // The in-memory cart stays authoritative for the session.
                warn!(key = %self.key, error = %e, "failed to persist cart snapshot");
                PersistOutcome::Failed(e.to_string())
            }
        };
    }
}
