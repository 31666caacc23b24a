//! Order domain types
//!
//! - Checkout request types: what a customer submits at checkout
//! - Status enums: order and commission lifecycles

pub mod checkout;
pub mod types;

// Re-exports
pub use checkout::{Address, CheckoutItem, CheckoutRequest, Customer, PaymentDetails};
pub use types::{CommissionStatus, DIRECT_SALE, OrderStatus};
