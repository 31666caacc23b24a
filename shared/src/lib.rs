//! Shared types for the AffiliateAce platform
//!
//! Domain types used across crates: checkout requests, customer info,
//! order/commission status enums and related constants.

pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use order::{
    Address, CheckoutItem, CheckoutRequest, CommissionStatus, Customer, DIRECT_SALE, OrderStatus,
    PaymentDetails,
};
