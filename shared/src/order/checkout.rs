//! Checkout request types
//!
//! What the storefront submits when a customer completes a purchase. The
//! observed flow is a single-product cart with quantity 1, but the types
//! carry an explicit quantity so the math stays general.

use serde::{Deserialize, Serialize};

/// Customer shipping address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub zip: String,
}

/// Customer identity and shipping info captured at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub address: Address,
}

/// The single cart line of a checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutItem {
    /// Product record id ("products:xyz" or bare key)
    pub product_id: String,
    pub quantity: i32,
}

/// Simulated card details
///
/// Never persisted; only handed to the payment gateway collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_number: String,
    /// MM/YY
    pub expiry: String,
    pub cvc: String,
}

/// Full checkout submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub customer: Customer,
    pub item: CheckoutItem,
    /// Referring reseller id from the tagged share link, if any.
    /// Absent means a direct sale and zero commission. Share links use
    /// the short query name `ref`, accepted here as an alias.
    #[serde(default, alias = "ref", skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    pub payment: PaymentDetails,
}

impl CheckoutRequest {
    /// Convenience constructor used by tests and seeding tools
    pub fn new(customer: Customer, product_id: impl Into<String>, quantity: i32) -> Self {
        Self {
            customer,
            item: CheckoutItem {
                product_id: product_id.into(),
                quantity,
            },
            referrer: None,
            payment: PaymentDetails {
                card_number: "4242424242424242".to_string(),
                expiry: "12/30".to_string(),
                cvc: "123".to_string(),
            },
        }
    }

    pub fn with_referrer(mut self, reseller_id: impl Into<String>) -> Self {
        self.referrer = Some(reseller_id.into());
        self
    }
}
