//! Typed results of cart mutations and persistence.
//!
//! Cart operations never fail. These values tell callers (and tests) what
//! actually happened, including failures that were logged and swallowed.

use crate::cart::CartLine;
use crate::ids::LineId;

/// What a cart operation changed.
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    /// A new line was appended.
    Added(LineId),
    /// An existing line's quantity was incremented.
    Merged { line_id: LineId, quantity: i64 },
    /// A line was deleted.
    Removed(CartLine),
    /// A line's quantity was set.
    QuantitySet { line_id: LineId, quantity: i64 },
    /// All lines were removed.
    Cleared,
    /// Nothing changed (missing product, unknown line, gated by auth).
    Unchanged,
}

impl CartChange {
    /// Whether the operation modified cart state.
    pub fn is_change(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

/// Result of reading the persisted snapshot at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Snapshot decoded; `dropped` entries failed sanitation.
    Restored { lines: usize, dropped: usize },
    /// No snapshot (or a blank one) was stored.
    Missing,
    /// A snapshot was stored but could not be decoded.
    Corrupt(String),
    /// The storage backend could not be read.
    Unavailable(String),
}

/// Result of the most recent snapshot write or erase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersistOutcome {
    /// No mutation has happened yet.
    #[default]
    NotAttempted,
    /// Snapshot written.
    Saved,
    /// Snapshot key removed.
    Erased,
    /// The backend rejected the write; the cart kept its in-memory state.
    Failed(String),
}

impl PersistOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, PersistOutcome::Failed(_))
    }
}
