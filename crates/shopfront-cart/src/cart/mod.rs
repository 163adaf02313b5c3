//! Shopping cart module.
//!
//! Contains the cart line type, the store that owns the lines, and the
//! typed outcomes its operations report.

mod line;
mod outcome;
mod store;

pub use line::CartLine;
pub use outcome::{CartChange, PersistOutcome, RestoreOutcome};
pub use store::{CartStore, DEFAULT_CART_KEY};
