//! Payment Gateway Abstraction
//!
//! The settlement orchestrator treats payment capture as a precondition
//! gate: the gateway is charged before any document is written, and a
//! decline aborts the checkout with no side effects.
//!
//! The platform ships a simulated gateway. Payment capture and order
//! persistence are NOT one distributed transaction; see
//! `SettlementService::settle` for how the gap is surfaced.

use async_trait::async_trait;
use shared::order::PaymentDetails;
use uuid::Uuid;

use crate::settlement::{SettlementError, SettlementResult};

/// Proof of a successful charge
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    /// Gateway-side reference, logged for reconciliation
    pub reference: String,
    /// Amount actually captured
    pub amount: f64,
}

/// External payment collaborator
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Capture `amount` against the given card details
    ///
    /// Returns a receipt on success, `PaymentFailed` on decline.
    async fn charge(&self, amount: f64, details: &PaymentDetails)
    -> SettlementResult<PaymentReceipt>;
}

/// Simulated gateway
///
/// Performs syntactic card validation only; any well-formed card is
/// approved. Mirrors the platform's demo checkout, which never contacts a
/// real processor.
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway;

impl SimulatedGateway {
    fn validate_details(details: &PaymentDetails) -> SettlementResult<()> {
        let digits: String = details
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(SettlementError::PaymentFailed(
                "card number must contain only digits".to_string(),
            ));
        }
        if !(12..=19).contains(&digits.len()) {
            return Err(SettlementError::PaymentFailed(
                "card number has invalid length".to_string(),
            ));
        }
        if details.expiry.trim().is_empty() {
            return Err(SettlementError::PaymentFailed(
                "expiry date is required".to_string(),
            ));
        }
        let cvc = details.cvc.trim();
        if !(3..=4).contains(&cvc.len()) || !cvc.chars().all(|c| c.is_ascii_digit()) {
            return Err(SettlementError::PaymentFailed(
                "security code is invalid".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(
        &self,
        amount: f64,
        details: &PaymentDetails,
    ) -> SettlementResult<PaymentReceipt> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SettlementError::PaymentFailed(format!(
                "charge amount must be positive, got {}",
                amount
            )));
        }
        Self::validate_details(details)?;

        let reference = format!("sim_{}", Uuid::new_v4().simple());
        tracing::info!(payment_ref = %reference, amount, "Simulated charge approved");

        Ok(PaymentReceipt { reference, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str, expiry: &str, cvc: &str) -> PaymentDetails {
        PaymentDetails {
            card_number: number.to_string(),
            expiry: expiry.to_string(),
            cvc: cvc.to_string(),
        }
    }

    #[tokio::test]
    async fn test_approves_well_formed_card() {
        let gateway = SimulatedGateway;
        let receipt = gateway
            .charge(223.49, &card("4242 4242 4242 4242", "12/30", "123"))
            .await
            .unwrap();
        assert_eq!(receipt.amount, 223.49);
        assert!(receipt.reference.starts_with("sim_"));
    }

    #[tokio::test]
    async fn test_declines_bad_card_number() {
        let gateway = SimulatedGateway;
        for number in ["", "1234", "4242-4242-4242-4242", "not a card"] {
            let err = gateway
                .charge(10.0, &card(number, "12/30", "123"))
                .await
                .unwrap_err();
            assert!(matches!(err, SettlementError::PaymentFailed(_)));
        }
    }

    #[tokio::test]
    async fn test_declines_missing_expiry_or_cvc() {
        let gateway = SimulatedGateway;
        assert!(
            gateway
                .charge(10.0, &card("4242424242424242", " ", "123"))
                .await
                .is_err()
        );
        assert!(
            gateway
                .charge(10.0, &card("4242424242424242", "12/30", "12"))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_declines_non_positive_amount() {
        let gateway = SimulatedGateway;
        let err = gateway
            .charge(0.0, &card("4242424242424242", "12/30", "123"))
            .await
            .unwrap_err();
        assert!(matches!(err, SettlementError::PaymentFailed(_)));
    }
}
