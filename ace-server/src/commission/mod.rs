//! Commission Attribution
//!
//! Determines the commission owed to a referring reseller on an order.
//! The presence of a referrer id is the sole trigger for a non-zero
//! commission: no referral means no payout, regardless of the configured
//! rate. Orders without a referrer are recorded against the
//! [`DIRECT_SALE`] sentinel so earnings queries stay uniform.

use rust_decimal::Decimal;
use shared::order::{CommissionStatus, DIRECT_SALE};

use crate::money::to_decimal;
use crate::settlement::{SettlementError, SettlementResult};

/// Commission rate configuration
///
/// Observed as a flat platform-wide rate; the per-reseller/per-category
/// model stays out until confirmed. Passed in at call time, never ambient.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionConfig {
    /// Fraction of the order subtotal owed to the referrer, in [0, 1]
    pub rate: f64,
}

impl Default for CommissionConfig {
    fn default() -> Self {
        Self { rate: 0.10 }
    }
}

impl CommissionConfig {
    pub fn validate(&self) -> SettlementResult<()> {
        if !self.rate.is_finite() || !(0.0..=1.0).contains(&self.rate) {
            return Err(SettlementError::InvalidConfiguration(format!(
                "commission rate must be within [0, 1], got {}",
                self.rate
            )));
        }
        Ok(())
    }
}

/// Outcome of attributing one order's commission
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionAttribution {
    /// Referrer id, or [`DIRECT_SALE`] when the order had none
    pub reseller_id: String,
    /// Full-precision amount owed (subtotal * rate, or zero)
    pub amount: Decimal,
    pub status: CommissionStatus,
}

impl CommissionAttribution {
    pub fn is_direct_sale(&self) -> bool {
        self.reseller_id == DIRECT_SALE
    }
}

/// Attribute commission for an order subtotal
///
/// A blank or missing referrer is a direct sale. The configured rate is
/// validated even for direct sales so a misconfigured deployment fails
/// loudly instead of silently paying nothing.
pub fn attribute(
    subtotal: Decimal,
    referrer: Option<&str>,
    config: &CommissionConfig,
) -> SettlementResult<CommissionAttribution> {
    config.validate()?;

    let referrer = referrer.map(str::trim).filter(|r| !r.is_empty());

    Ok(match referrer {
        Some(reseller_id) => CommissionAttribution {
            reseller_id: reseller_id.to_string(),
            amount: subtotal * to_decimal(config.rate),
            status: CommissionStatus::Pending,
        },
        None => CommissionAttribution {
            reseller_id: DIRECT_SALE.to_string(),
            amount: Decimal::ZERO,
            status: CommissionStatus::Pending,
        },
    })
}
