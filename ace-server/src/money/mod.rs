//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done with `Decimal` internally, then converted
//! to `f64` only when a value crosses a serialization boundary (persisted
//! document or API response). Rounding happens once, at that edge.

use crate::settlement::SettlementError;
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per item
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per item
pub const MAX_QUANTITY: i32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field_name: &str) -> Result<(), SettlementError> {
    if !value.is_finite() {
        return Err(SettlementError::Validation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a unit price before settlement math
///
/// Prices must be finite, strictly positive and within the platform ceiling.
pub fn validate_price(price: f64) -> Result<(), SettlementError> {
    require_finite(price, "price")?;
    if price <= 0.0 {
        return Err(SettlementError::Validation(format!(
            "price must be positive, got {}",
            price
        )));
    }
    if price > MAX_PRICE {
        return Err(SettlementError::Validation(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, price
        )));
    }
    Ok(())
}

/// Validate an item quantity before settlement math
pub fn validate_quantity(quantity: i32) -> Result<(), SettlementError> {
    if quantity < 1 {
        return Err(SettlementError::Validation(format!(
            "quantity must be at least 1, got {}",
            quantity
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(SettlementError::Validation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the boundary.
/// If NaN/Infinity somehow reaches here, logs an error and returns ZERO
/// to avoid silent data corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with inputs bounded by MAX_PRICE * MAX_QUANTITY
        // is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
