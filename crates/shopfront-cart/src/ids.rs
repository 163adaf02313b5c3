//! Identifiers used by the cart.
//!
//! Product identifiers come from the backend and may be numbers or strings;
//! line identifiers are minted locally and must never repeat within a cart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a backend product, in whatever form the backend uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    /// Numeric identifier (e.g. a database key).
    Number(i64),
    /// Textual identifier (e.g. a GUID).
    Text(String),
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductRef::Number(n) => write!(f, "{}", n),
            ProductRef::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductRef {
    fn from(n: i64) -> Self {
        ProductRef::Number(n)
    }
}

impl From<String> for ProductRef {
    fn from(s: String) -> Self {
        ProductRef::Text(s)
    }
}

impl From<&str> for ProductRef {
    fn from(s: &str) -> Self {
        ProductRef::Text(s.to_string())
    }
}

/// Identifier of one line in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    /// Wrap a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LineId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Mints [`LineId`]s from the wall clock in milliseconds.
///
/// Every id is strictly greater than every id minted or observed before,
/// so two lines added within the same millisecond, or a line added after
/// restoring a snapshot written by a machine with a faster clock, still get
/// distinct ids.
#[derive(Debug, Clone, Default)]
pub struct LineIdGenerator {
    last: u64,
}

impl LineIdGenerator {
    /// Create a generator that has seen nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an id that already exists so it is never minted again.
    pub fn observe(&mut self, id: LineId) {
        self.last = self.last.max(id.0);
    }

    /// Mint a fresh id.
    pub fn next_id(&mut self) -> LineId {
        let candidate = current_millis().max(self.last.saturating_add(1));
        self.last = candidate;
        LineId(candidate)
    }
}

/// Milliseconds since the Unix epoch.
fn current_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ref_from_json() {
        let numeric: ProductRef = serde_json::from_str("17").unwrap();
        assert_eq!(numeric, ProductRef::Number(17));

        let text: ProductRef = serde_json::from_str("\"b7c1\"").unwrap();
        assert_eq!(text, ProductRef::Text("b7c1".to_string()));
    }

    #[test]
    fn test_product_ref_display() {
        assert_eq!(ProductRef::from(5).to_string(), "5");
        assert_eq!(ProductRef::from("sku-9").to_string(), "sku-9");
    }

    #[test]
    fn test_line_ids_strictly_increase() {
        let mut ids = LineIdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_observed_id_is_never_minted() {
        let mut ids = LineIdGenerator::new();
        let far_future = LineId::new(u64::MAX / 2);
        ids.observe(far_future);

        let fresh = ids.next_id();
        assert!(fresh > far_future);
    }

    #[test]
    fn test_line_id_serializes_as_number() {
        let json = serde_json::to_string(&LineId::new(1700000000123)).unwrap();
        assert_eq!(json, "1700000000123");
    }
}
