//! Cart error types.
//!
//! Cart operations themselves never fail; these errors cover decoding
//! product data handed over by presentation code.

use thiserror::Error;

/// Errors that can occur outside the cart's no-fail operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// A product listing body could not be decoded.
    #[error("Invalid product listing: {0}")]
    InvalidProductListing(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::SerializationError(e.to_string())
    }
}
