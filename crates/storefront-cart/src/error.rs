//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Mutating a cart with an id it does not contain is never an error; those
/// commands are no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// The cart was read or mutated outside of its provider's lifetime.
    #[error("Cart used outside of its provider")]
    CartUnavailable,

    /// The cart was reached again while an operation on it was still running.
    #[error("Cart is busy with another operation")]
    CartBusy,

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Negative unit price.
    #[error("Invalid price: {0}")]
    InvalidPrice(i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Product has no stock left.
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    /// Cart already holds every unit in stock.
    #[error("Stock ceiling reached for {product_id}: {stock} in stock")]
    StockCeilingReached { product_id: String, stock: u32 },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Unknown remedy category slug.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
