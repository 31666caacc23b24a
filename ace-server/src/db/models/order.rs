//! Order Model
//!
//! Orders are created once at checkout settlement and are immutable apart
//! from `status`/`updated_at`, which later fulfillment workflows touch.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::order::{CommissionStatus, Customer, OrderStatus};
use surrealdb::RecordId;

/// One order line (single-product cart in the observed flow)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    /// Unit price at time of purchase
    pub price: f64,
    pub quantity: i32,
}

/// Commission summary embedded in the order document
///
/// The standalone commission record in the `commissions` collection is the
/// payout source of truth; this copy serves the admin order view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommissionSummary {
    pub reseller_id: String,
    pub amount: f64,
    pub status: CommissionStatus,
}

/// Persisted order document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    // Financials (rounded to 2dp at persistence)
    pub subtotal: f64,
    pub shipping: f64,
    pub handling: f64,
    pub taxes: f64,
    pub total: f64,
    pub commission: CommissionSummary,
    pub status: OrderStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
