//! Checkout Pricing Calculator
//!
//! Formula for a single-product cart:
//!
//! ```text
//! subtotal = price * quantity
//! taxes    = subtotal * tax_rate
//! total    = subtotal + shipping + handling + taxes
//! ```
//!
//! Internal values keep full `Decimal` precision; callers round via
//! [`crate::money::to_f64`] only when persisting or displaying, so rounding
//! error never compounds across the breakdown.

use rust_decimal::Decimal;

use crate::money::{to_decimal, validate_price, validate_quantity};
use crate::settlement::{SettlementError, SettlementResult};

/// Charge constants and tax rate for one settlement
///
/// Passed explicitly into [`calculate`] at call time, never read from
/// ambient globals. Loaded from the environment by `core::Config`.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Flat shipping charge per order
    pub shipping_charge: f64,
    /// Flat handling charge per order
    pub handling_charge: f64,
    /// Tax rate as a decimal fraction (0.08 = 8%)
    pub tax_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_charge: 5.00,
            handling_charge: 2.50,
            tax_rate: 0.08,
        }
    }
}

impl PricingConfig {
    /// Reject configurations that cannot produce a valid breakdown
    pub fn validate(&self) -> SettlementResult<()> {
        for (name, value) in [
            ("shipping_charge", self.shipping_charge),
            ("handling_charge", self.handling_charge),
            ("tax_rate", self.tax_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettlementError::InvalidConfiguration(format!(
                    "{} must be a non-negative finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Full-precision financial breakdown of a checkout
///
/// Invariant: `total == subtotal + shipping + handling + taxes` exactly
/// (Decimal arithmetic, no rounding applied yet).
#[derive(Debug, Clone, PartialEq)]
pub struct PricingBreakdown {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub handling: Decimal,
    pub taxes: Decimal,
    pub total: Decimal,
}

/// Compute the breakdown for `quantity` units at `price` each
///
/// Fails with a validation error when the price is not strictly positive or
/// the quantity is below 1; fails with a configuration error when the config
/// carries negative or non-finite values.
pub fn calculate(
    price: f64,
    quantity: i32,
    config: &PricingConfig,
) -> SettlementResult<PricingBreakdown> {
    validate_price(price)?;
    validate_quantity(quantity)?;
    config.validate()?;

    let subtotal = to_decimal(price) * Decimal::from(quantity);
    let shipping = to_decimal(config.shipping_charge);
    let handling = to_decimal(config.handling_charge);
    let taxes = subtotal * to_decimal(config.tax_rate);
    let total = subtotal + shipping + handling + taxes;

    Ok(PricingBreakdown {
        subtotal,
        shipping,
        handling,
        taxes,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::to_f64;

    #[test]
    fn test_observed_checkout_scenario() {
        // 199.99 @ qty 1, shipping 5.00, handling 2.50, tax 8%
        let breakdown = calculate(199.99, 1, &PricingConfig::default()).unwrap();

        assert_eq!(to_f64(breakdown.subtotal), 199.99);
        assert_eq!(to_f64(breakdown.shipping), 5.00);
        assert_eq!(to_f64(breakdown.handling), 2.50);
        // 15.9992 rounds half-up to 16.00 at the edge
        assert_eq!(to_f64(breakdown.taxes), 16.00);
        assert_eq!(to_f64(breakdown.total), 223.49);
    }

    #[test]
    fn test_total_invariant_exact() {
        let cfg = PricingConfig::default();
        for (price, qty) in [
            (0.01, 1),
            (24.99, 3),
            (79.99, 2),
            (349.99, 1),
            (199.99, 7),
            (0.33, 9),
        ] {
            let b = calculate(price, qty, &cfg).unwrap();
            // Full precision: the invariant holds exactly, not just to the cent
            assert_eq!(b.total, b.subtotal + b.shipping + b.handling + b.taxes);
            // And the rounded total matches the rounded components to the cent
            let expected = to_decimal(price) * Decimal::from(qty) * to_decimal(1.0 + cfg.tax_rate)
                + to_decimal(cfg.shipping_charge)
                + to_decimal(cfg.handling_charge);
            assert_eq!(to_f64(b.total), to_f64(expected));
        }
    }

    #[test]
    fn test_quantity_scales_subtotal_and_taxes() {
        let b = calculate(24.99, 3, &PricingConfig::default()).unwrap();
        assert_eq!(to_f64(b.subtotal), 74.97);
        assert_eq!(to_f64(b.taxes), 6.00); // 5.9976 -> 6.00
        assert_eq!(to_f64(b.total), 88.47);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let cfg = PricingConfig::default();
        assert!(matches!(
            calculate(0.0, 1, &cfg),
            Err(SettlementError::Validation(_))
        ));
        assert!(matches!(
            calculate(-5.0, 1, &cfg),
            Err(SettlementError::Validation(_))
        ));
        assert!(matches!(
            calculate(10.0, 0, &cfg),
            Err(SettlementError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let cfg = PricingConfig {
            tax_rate: -0.08,
            ..PricingConfig::default()
        };
        assert!(matches!(
            calculate(10.0, 1, &cfg),
            Err(SettlementError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_tax_rate() {
        let cfg = PricingConfig {
            tax_rate: 0.0,
            ..PricingConfig::default()
        };
        let b = calculate(100.0, 1, &cfg).unwrap();
        assert_eq!(to_f64(b.taxes), 0.0);
        assert_eq!(to_f64(b.total), 107.50);
    }
}
