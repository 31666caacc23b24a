//! Database Models
//!
//! Persisted document shapes for the three collections touched by
//! settlement: `products`, `orders`, `commissions`.

pub mod commission;
pub mod order;
pub mod product;
pub mod serde_helpers;

pub use commission::CommissionRecord;
pub use order::{CommissionSummary, OrderItem, OrderRecord};
pub use product::{Dimensions, Product, ProductCreate, ProductUpdate};
