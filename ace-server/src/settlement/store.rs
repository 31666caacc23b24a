//! Settlement store contract
//!
//! A settlement produces exactly three logical writes: the order document,
//! the commission document, and a relative stock/sales adjustment on the
//! product. [`SettlementStore::commit`] applies all three with a single
//! commit-or-abort guarantee; partial application must never be observable.

use async_trait::async_trait;
use shared::order::CommissionStatus;

use crate::db::models::{OrderRecord, Product};
use crate::settlement::SettlementResult;

/// Commission document fields known before the order id exists
///
/// The store fills in the order back-reference when it creates both
/// documents inside one transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionDraft {
    pub reseller_id: String,
    pub amount: f64,
    pub status: CommissionStatus,
}

/// Relative inventory adjustment, applied by the store
///
/// Deltas, not absolute values: the store must apply these as in-place
/// increments so concurrent checkouts of the same product cannot lose
/// updates.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjustment {
    /// Product id ("products:key" or bare key)
    pub product_id: String,
    /// Change to stock (negative for a sale)
    pub delta_stock: i64,
    /// Change to the sales counter
    pub delta_sales: i64,
}

/// The full write-set of one checkout
#[derive(Debug, Clone)]
pub struct CheckoutWriteSet {
    pub order: OrderRecord,
    pub commission: CommissionDraft,
    pub stock: StockAdjustment,
}

/// Transactional document store consumed by the orchestrator
#[async_trait]
pub trait SettlementStore: Send + Sync {
    /// Load a product for the pre-write stock/price check
    async fn load_product(&self, product_id: &str) -> SettlementResult<Product>;

    /// Apply the write-set atomically; returns the new order id
    ///
    /// On any failure none of the three effects may be visible. Atomicity
    /// is delegated to the store's transactional primitive; the caller
    /// never rolls back partial state.
    async fn commit(&self, write_set: CheckoutWriteSet) -> SettlementResult<String>;
}
