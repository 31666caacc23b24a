//! Order Settlement Orchestrator
//!
//! Drives one checkout end to end: validate the submission, gate on stock
//! and payment, compute the financial breakdown and commission
//! attribution, then hand the three-document write-set to the store for an
//! atomic commit.
//!
//! Resubmitting the same checkout produces a second distinct order; there
//! is no deduplication key in this flow. Callers that need idempotence
//! must implement it above this layer.

pub mod error;
pub mod store;

pub use error::{SettlementError, SettlementResult};
pub use store::{CheckoutWriteSet, CommissionDraft, SettlementStore, StockAdjustment};

use std::sync::Arc;

use serde::Serialize;
use shared::order::{CheckoutRequest, Customer, OrderStatus};

use crate::commission::{self, CommissionConfig};
use crate::db::models::{CommissionSummary, OrderItem, OrderRecord};
use crate::money::to_f64;
use crate::payment::PaymentGateway;
use crate::pricing::{self, PricingConfig};
use crate::utils::now_rfc3339;

/// Result of a successful settlement, returned to the storefront
#[derive(Debug, Clone, Serialize)]
pub struct SettledOrder {
    pub order_id: String,
    pub payment_reference: String,
    pub subtotal: f64,
    pub shipping: f64,
    pub handling: f64,
    pub taxes: f64,
    pub total: f64,
    pub commission: CommissionSummary,
}

/// Validate customer fields before any side effect (fail-fast)
pub fn validate_customer(customer: &Customer) -> SettlementResult<()> {
    let required = [
        ("name", customer.name.as_str()),
        ("email", customer.email.as_str()),
        ("address line", customer.address.line1.as_str()),
        ("city", customer.address.city.as_str()),
        ("zip", customer.address.zip.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(SettlementError::Validation(format!(
                "customer {} is required",
                field
            )));
        }
    }
    if !customer.email.contains('@') {
        return Err(SettlementError::Validation(format!(
            "customer email '{}' is not a valid address",
            customer.email
        )));
    }
    Ok(())
}

/// Checkout settlement service
///
/// Stateless between requests; concurrent settlements share nothing but
/// the store, whose transaction serializes the stock adjustment.
pub struct SettlementService {
    store: Arc<dyn SettlementStore>,
    gateway: Arc<dyn PaymentGateway>,
    pricing: PricingConfig,
    commission: CommissionConfig,
}

impl SettlementService {
    pub fn new(
        store: Arc<dyn SettlementStore>,
        gateway: Arc<dyn PaymentGateway>,
        pricing: PricingConfig,
        commission: CommissionConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            pricing,
            commission,
        }
    }

    /// Settle one checkout submission
    ///
    /// Order of gates: customer validation, product existence, pricing
    /// validation, stock, commission attribution, payment capture, atomic
    /// write. Everything before the write is side-effect free; everything
    /// after a failed write is surfaced, never compensated here.
    pub async fn settle(&self, request: &CheckoutRequest) -> SettlementResult<SettledOrder> {
        validate_customer(&request.customer)?;

        let quantity = request.item.quantity;
        let product = self.store.load_product(&request.item.product_id).await?;

        let breakdown = pricing::calculate(product.price, quantity, &self.pricing)?;

        if product.stock < quantity as i64 {
            return Err(SettlementError::OutOfStock {
                product: product.name.clone(),
                requested: quantity,
                available: product.stock,
            });
        }

        let attribution =
            commission::attribute(breakdown.subtotal, request.referrer.as_deref(), &self.commission)?;

        // Precondition gate: charge before persisting. A decline leaves no trace.
        let receipt = self
            .gateway
            .charge(to_f64(breakdown.total), &request.payment)
            .await?;

        let product_id = product
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| request.item.product_id.clone());

        let commission_summary = CommissionSummary {
            reseller_id: attribution.reseller_id.clone(),
            amount: to_f64(attribution.amount),
            status: attribution.status,
        };

        let now = now_rfc3339();
        let write_set = CheckoutWriteSet {
            order: OrderRecord {
                id: None,
                customer: request.customer.clone(),
                items: vec![OrderItem {
                    product_id: product_id.clone(),
                    product_name: product.name.clone(),
                    price: product.price,
                    quantity,
                }],
                subtotal: to_f64(breakdown.subtotal),
                shipping: to_f64(breakdown.shipping),
                handling: to_f64(breakdown.handling),
                taxes: to_f64(breakdown.taxes),
                total: to_f64(breakdown.total),
                commission: commission_summary.clone(),
                status: OrderStatus::Pending,
                created_at: Some(now.clone()),
                updated_at: Some(now.clone()),
            },
            commission: CommissionDraft {
                reseller_id: commission_summary.reseller_id.clone(),
                amount: commission_summary.amount,
                status: commission_summary.status,
            },
            stock: StockAdjustment {
                product_id,
                delta_stock: -(quantity as i64),
                delta_sales: quantity as i64,
            },
        };

        let order_id = match self.store.commit(write_set).await {
            Ok(id) => id,
            Err(e) => {
                // The charge already went through; flag for reconciliation
                // instead of attempting compensation.
                tracing::error!(
                    payment_ref = %receipt.reference,
                    amount = receipt.amount,
                    error = %e,
                    "Order write failed after successful charge; manual reconciliation required"
                );
                return Err(e);
            }
        };

        tracing::info!(
            order_id = %order_id,
            payment_ref = %receipt.reference,
            total = to_f64(breakdown.total),
            reseller_id = %commission_summary.reseller_id,
            commission = commission_summary.amount,
            "Checkout settled"
        );

        Ok(SettledOrder {
            order_id,
            payment_reference: receipt.reference,
            subtotal: to_f64(breakdown.subtotal),
            shipping: to_f64(breakdown.shipping),
            handling: to_f64(breakdown.handling),
            taxes: to_f64(breakdown.taxes),
            total: to_f64(breakdown.total),
            commission: commission_summary,
        })
    }
}

#[cfg(test)]
mod tests;
