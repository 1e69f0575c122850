//! Unified error handling for client operations.
//!
//! Subsystem errors stay typed (`ConfigError`, `StorageError`, `ApiError`,
//! `StockError`); `ClientError` composes them at the application boundary so
//! a command can use `?` across all of them. No failure is fatal: API errors
//! are retried by re-running the command, validation errors block before any
//! mutation, and storage corruption resets the affected collection.

use thiserror::Error;

use crate::api::ApiError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::stock::StockError;
use crate::storage::StorageError;

/// Application-level error type for the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Persisting local state failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A marketplace API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An add-to-cart intent was rejected before mutation.
    #[error("{0}")]
    Stock(#[from] StockError),

    /// Checkout could not proceed (empty cart, unsettled payment).
    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    /// Bad input at the command boundary.
    #[error("{0}")]
    BadRequest(String),
}

/// Result type alias for `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_error_message_passes_through() {
        let err = ClientError::from(StockError::OutOfStock);
        assert_eq!(err.to_string(), "This product is out of stock.");
    }

    #[test]
    fn test_bad_request_display() {
        let err = ClientError::BadRequest("cart is empty".to_string());
        assert_eq!(err.to_string(), "cart is empty");
    }
}
