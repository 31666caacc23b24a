//! Settlement error taxonomy
//!
//! Every failure a checkout can surface, in the order the orchestrator
//! checks them. All variants carry human-readable messages; nothing is
//! silently swallowed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettlementError {
    /// Missing/invalid customer fields or non-positive price/quantity.
    /// Rejected before any side effect.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A pricing or commission config value out of range (rate outside
    /// [0,1], negative charges). Deployment bug, not user error.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The cart references a product that no longer exists
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Insufficient inventory at submission time; rejected before write
    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    OutOfStock {
        product: String,
        requested: i32,
        available: i64,
    },

    /// Gateway declined; no order/commission/stock effect created
    #[error("Payment declined: {0}")]
    PaymentFailed(String),

    /// The atomic write was rejected by the store after a successful
    /// charge. The one case needing operator reconciliation: payment
    /// capture and order persistence are not one distributed transaction.
    #[error("Could not create the order: {0}")]
    OrderCreationFailed(String),

    /// Storage failure outside the commit itself (e.g. product lookup)
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type SettlementResult<T> = Result<T, SettlementError>;
