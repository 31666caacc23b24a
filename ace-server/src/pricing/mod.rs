//! Pricing Module
//!
//! Computes the financial breakdown of a checkout: subtotal, fixed
//! shipping/handling charges, taxes and total.

pub mod calculator;

pub use calculator::{PricingBreakdown, PricingConfig, calculate};
