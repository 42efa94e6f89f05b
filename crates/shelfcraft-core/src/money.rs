//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart that sums floats drifts a cent at a time until the subtotal     │
//! │  no longer matches the payment request.                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every stored amount is whole cents (i64). Floating point appears    │
//! │    only inside the pricing computation, and is rounded exactly once    │
//! │    at the end (half-away-from-zero).                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shelfcraft_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // $21.98
//! let total = price + Money::from_cents(500);  // $15.99
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for finish discounts, refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for the persisted snapshot
///
/// ## Where Money Flows
/// ```text
/// Product.base_price_cents ──► compute_price ──► CartItem.unit_price
///                                                      │
///                                  CartItem.total_price ──► Cart.total_price
///                                                      │
///                              checkout::OrderSummary (shipping + tax)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shelfcraft_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a fractional cent amount, rounding
    /// **half-away-from-zero** to whole cents.
    ///
    /// This is the single rounding rule in the system. The pricing engine
    /// computes with `f64` internally and converges to whole cents through
    /// this one function, so every call site rounds identically.
    ///
    /// ## Example
    /// ```rust
    /// use shelfcraft_core::money::Money;
    ///
    /// assert_eq!(Money::from_fractional_cents(1148.5).cents(), 1149);
    /// assert_eq!(Money::from_fractional_cents(1148.4).cents(), 1148);
    /// assert_eq!(Money::from_fractional_cents(-250.5).cents(), -251);
    /// ```
    #[inline]
    pub fn from_fractional_cents(cents: f64) -> Self {
        // f64::round is round-half-away-from-zero, which is exactly the
        // documented rule.
        Money(cents.round() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shelfcraft_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(29000); // $290.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 58000); // $580.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a rate expressed in basis points (800 = 8%), rounding
    /// half-away-from-zero.
    ///
    /// Used by the checkout summary for the flat tax surcharge.
    ///
    /// ## Example
    /// ```rust
    /// use shelfcraft_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(58000); // $580.00
    /// let tax = subtotal.apply_rate_bps(800);  // 8%
    /// assert_eq!(tax.cents(), 4640);           // $46.40
    /// ```
    pub fn apply_rate_bps(&self, bps: u32) -> Money {
        // i128 intermediate prevents overflow on large amounts; +5000 gives
        // half-away-from-zero for the non-negative amounts this is used on.
        let sign = if self.0 < 0 { -1 } else { 1 };
        let scaled = (self.0.unsigned_abs() as i128 * bps as i128 + 5000) / 10000;
        Money(sign * scaled as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Matches the storefront's `formatPrice` output for whole USD amounts.
/// Use frontend formatting for localized display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Sums line totals into a cart total.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
