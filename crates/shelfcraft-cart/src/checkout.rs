//! # Checkout Summary
//!
//! Surcharges the checkout collaborator layers on top of the cart subtotal.
//!
//! These are deliberately NOT part of the cart's own aggregates: the cart's
//! `total_price` stays a pure sum of line totals, and the payment request is
//! built from this summary.

use serde::{Deserialize, Serialize};

use shelfcraft_core::Money;

use crate::cart::Cart;

/// Flat shipping charge in cents.
pub const FLAT_SHIPPING_CENTS: i64 = 2500;

/// Subtotal threshold (cents) at which shipping is waived.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 20000;

/// Flat tax rate in basis points (800 = 8%).
pub const TAX_RATE_BPS: u32 = 800;

/// Price breakdown shown at checkout and sent to the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Cart subtotal (sum of line totals).
    pub subtotal: Money,

    /// Flat shipping, waived at the free-shipping threshold.
    pub shipping: Money,

    /// Flat-rate tax on the subtotal.
    pub tax: Money,

    /// subtotal + shipping + tax.
    pub total: Money,
}

impl OrderSummary {
    /// Builds the checkout breakdown from a cart subtotal.
    ///
    /// ## Rules
    /// - Shipping: flat $25.00, free once the subtotal reaches $200.00
    /// - Tax: flat 8% of the subtotal, rounded half-away-from-zero
    pub fn from_subtotal(subtotal: Money) -> Self {
        let shipping = if subtotal.cents() >= FREE_SHIPPING_THRESHOLD_CENTS {
            Money::zero()
        } else {
            Money::from_cents(FLAT_SHIPPING_CENTS)
        };
        let tax = subtotal.apply_rate_bps(TAX_RATE_BPS);

        OrderSummary {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Builds the checkout breakdown for a cart.
    pub fn for_cart(cart: &Cart) -> Self {
        OrderSummary::from_subtotal(cart.total_price)
    }

    /// How much more the shopper must add to reach free shipping, if any.
    pub fn remaining_for_free_shipping(&self) -> Option<Money> {
        let remaining = FREE_SHIPPING_THRESHOLD_CENTS - self.subtotal.cents();
        (remaining > 0).then(|| Money::from_cents(remaining))
    }
}
