//! # Pricing Engine
//!
//! Deterministic unit pricing for one configured shelf.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     compute_price Pipeline                              │
//! │                                                                         │
//! │  base_price ──► × wood multiplier ──► + finish modifier ──► + bracket  │
//! │                                                                │        │
//! │                   area_ratio = area / default_area             │        │
//! │                         │                                      │        │
//! │                         ▼                                      ▼        │
//! │                 clamp to [0.5, 2.0] ────────────────────► × ratio      │
//! │                                                                │        │
//! │                                                                ▼        │
//! │                               round half-away-from-zero to cents        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The step order is fixed: each step's output feeds the next. The function
//! is pure - identical inputs always produce an identical `Money`, which is
//! what makes the result safe to freeze onto a cart line item.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Bracket, Configuration, Finish, Product, WoodType};

// =============================================================================
// Area Ratio Clamp
// =============================================================================

/// Lower bound of the area ratio: a shelf at minimum area never costs less
/// than half the option-adjusted base.
pub const MIN_AREA_RATIO: f64 = 0.5;

/// Upper bound of the area ratio: no configuration is charged more than
/// double, however large it grows.
pub const MAX_AREA_RATIO: f64 = 2.0;

// =============================================================================
// compute_price
// =============================================================================

/// Computes the deterministic unit price for one configured shelf.
///
/// ## Algorithm (fixed order)
/// 1. Start from the product base price
/// 2. Multiply by the wood species multiplier
/// 3. Add the finish modifier (may be negative or zero)
/// 4. Add the bracket price
/// 5. Scale by the area ratio, clamped to `[0.5, 2.0]`
/// 6. Round half-away-from-zero to whole cents
///
/// ## Preconditions
/// The `finish` and `bracket` records must be the ones the configuration's
/// ids resolve to, and `wood_type` must be the product's species. Callers go
/// through [`crate::catalog::Catalog::resolve`]; a mismatch here is rejected
/// as [`CoreError::OptionMismatch`] rather than silently priced wrong.
///
/// ## Errors
/// - [`CoreError::InvalidProductDefaults`] if the product's default area is
///   zero (the area ratio would be undefined)
///
/// ## Example
/// ```rust,ignore
/// let (wood, finish, bracket) = catalog.resolve(&product, &configuration)?;
/// let unit_price = compute_price(&product, &configuration, wood, finish, bracket)?;
/// ```
pub fn compute_price(
    product: &Product,
    configuration: &Configuration,
    wood_type: &WoodType,
    finish: &Finish,
    bracket: &Bracket,
) -> CoreResult<Money> {
    if wood_type.id != product.wood_type {
        return Err(CoreError::OptionMismatch {
            field: "wood_type",
            expected: product.wood_type.clone(),
            got: wood_type.id.clone(),
        });
    }
    if finish.id != configuration.finish {
        return Err(CoreError::OptionMismatch {
            field: "finish",
            expected: configuration.finish.clone(),
            got: finish.id.clone(),
        });
    }
    if bracket.id != configuration.bracket {
        return Err(CoreError::OptionMismatch {
            field: "bracket",
            expected: configuration.bracket.clone(),
            got: bracket.id.clone(),
        });
    }

    let base_area = product.default_area();
    if base_area == 0 {
        return Err(CoreError::InvalidProductDefaults {
            product_id: product.id.clone(),
        });
    }

    // Base price, adjusted by the three option axes.
    let mut price = product.base_price_cents as f64;
    price *= wood_type.price_multiplier;
    price += finish.price_modifier_cents as f64;
    price += bracket.price_cents as f64;

    // Area-based scaling, clamped so resizing can at most halve or double.
    let area_ratio = configuration.area() as f64 / base_area as f64;
    let clamped_ratio = area_ratio.clamp(MIN_AREA_RATIO, MAX_AREA_RATIO);
    price *= clamped_ratio;

    Ok(Money::from_fractional_cents(price))
}

// =============================================================================
// Shipping Estimate
// =============================================================================

/// Estimates shipping cost from shelf dimensions.
///
/// Size-tiered flat rates; the checkout summary separately waives shipping
/// above the free-shipping subtotal threshold.
///
/// ## Tiers
/// - area ≤ 1000 in² → $25 (small shelf)
/// - area ≤ 2500 in² → $45 (medium shelf)
/// - otherwise       → $75 (large shelf)
pub fn estimate_shipping(length_in: u32, depth_in: u32) -> Money {
    let area = length_in as u64 * depth_in as u64;

    if area <= 1000 {
        Money::from_cents(2500)
    } else if area <= 2500 {
        Money::from_cents(4500)
    } else {
        Money::from_cents(7500)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn walnut() -> WoodType {
        WoodType {
            id: "walnut".to_string(),
            name: "Walnut".to_string(),
            description: None,
            color_hex: "#5d432c".to_string(),
            price_multiplier: 1.2,
        }
    }

    fn matte() -> Finish {
        Finish {
            id: "matte".to_string(),
            name: "Matte Lacquer".to_string(),
            description: None,
            price_modifier_cents: 1000,
        }
    }

    fn hidden_bracket() -> Bracket {
        Bracket {
            id: "hidden".to_string(),
            name: "Hidden Float".to_string(),
            description: None,
            price_cents: 1500,
        }
    }

    fn shelf(default_length_in: u32, default_depth_in: u32) -> Product {
        Product {
            id: "prod-1".to_string(),
            name: "Floating Walnut Shelf".to_string(),
            slug: "floating-walnut-shelf".to_string(),
            wood_type: "walnut".to_string(),
            description: None,
            base_price_cents: 10000, // $100.00
            default_length_in,
            default_depth_in,
            default_finish: "matte".to_string(),
            default_bracket: "hidden".to_string(),
            min_length_in: 12,
            max_length_in: 120,
            min_depth_in: 2,
            max_depth_in: 24,
            image_urls: vec![],
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn config(length_in: u32, depth_in: u32) -> Configuration {
        Configuration {
            length_in,
            depth_in,
            finish: "matte".to_string(),
            bracket: "hidden".to_string(),
        }
    }

    /// Base $100.00, wood ×1.2, finish +$10, bracket +$15, configured at
    /// double the default area (96×12 vs 48×12, ratio 2.0):
    /// ((100 × 1.2) + 10 + 15) × 2.0 = $290.00
    #[test]
    fn test_concrete_scenario() {
        let product = shelf(48, 12);
        let price = compute_price(
            &product,
            &config(96, 12),
            &walnut(),
            &matte(),
            &hidden_bracket(),
        )
        .unwrap();
        assert_eq!(price, Money::from_cents(29000));
    }

    #[test]
    fn test_default_configuration_prices_at_ratio_one() {
        let product = shelf(48, 12);
        let price = compute_price(
            &product,
            &config(48, 12),
            &walnut(),
            &matte(),
            &hidden_bracket(),
        )
        .unwrap();
        // (100 × 1.2) + 10 + 15 = $145.00
        assert_eq!(price, Money::from_cents(14500));
    }

    #[test]
    fn test_determinism() {
        let product = shelf(48, 12);
        let first = compute_price(
            &product,
            &config(60, 10),
            &walnut(),
            &matte(),
            &hidden_bracket(),
        )
        .unwrap();
        for _ in 0..10 {
            let again = compute_price(
                &product,
                &config(60, 10),
                &walnut(),
                &matte(),
                &hidden_bracket(),
            )
            .unwrap();
            assert_eq!(first, again);
        }
    }

    /// Area ratio 0.1 (20×2 = 40 in² vs 40×10 = 400 in²) prices as 0.5,
    /// never 0.1.
    #[test]
    fn test_area_ratio_clamped_at_lower_bound() {
        let product = shelf(40, 10);
        let price = compute_price(
            &product,
            &config(20, 2),
            &walnut(),
            &matte(),
            &hidden_bracket(),
        )
        .unwrap();
        // $145.00 × 0.5 = $72.50
        assert_eq!(price, Money::from_cents(7250));
    }

    /// Area ratio 5.0 (100×20 = 2000 in² vs 40×10 = 400 in²) prices as 2.0,
    /// never 5.0.
    #[test]
    fn test_area_ratio_clamped_at_upper_bound() {
        let product = shelf(40, 10);
        let price = compute_price(
            &product,
            &config(100, 20),
            &walnut(),
            &matte(),
            &hidden_bracket(),
        )
        .unwrap();
        // $145.00 × 2.0 = $290.00
        assert_eq!(price, Money::from_cents(29000));
    }

    #[test]
    fn test_negative_finish_modifier_reduces_price() {
        let product = shelf(48, 12);
        let unfinished = Finish {
            id: "matte".to_string(),
            name: "Unfinished".to_string(),
            description: None,
            price_modifier_cents: -2000,
        };
        let price = compute_price(
            &product,
            &config(48, 12),
            &walnut(),
            &unfinished,
            &hidden_bracket(),
        )
        .unwrap();
        // (100 × 1.2) − 20 + 15 = $115.00
        assert_eq!(price, Money::from_cents(11500));
    }

    /// Pin the rounding rule: half a cent rounds away from zero.
    #[test]
    fn test_rounding_is_half_away_from_zero() {
        let mut product = shelf(48, 12);
        product.base_price_cents = 9999;
        let plain = WoodType {
            price_multiplier: 1.5,
            ..walnut()
        };
        let no_finish = Finish {
            price_modifier_cents: 0,
            ..matte()
        };
        let no_bracket = Bracket {
            price_cents: 0,
            ..hidden_bracket()
        };
        // 9999 × 1.5 = 14998.5 → 14999 cents
        let price =
            compute_price(&product, &config(48, 12), &plain, &no_finish, &no_bracket).unwrap();
        assert_eq!(price, Money::from_cents(14999));
    }

    #[test]
    fn test_zero_default_area_is_a_data_bug() {
        let product = shelf(0, 12);
        let err = compute_price(
            &product,
            &config(48, 12),
            &walnut(),
            &matte(),
            &hidden_bracket(),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidProductDefaults { .. }));
    }

    #[test]
    fn test_mismatched_option_record_is_rejected() {
        let product = shelf(48, 12);
        let wrong_finish = Finish {
            id: "gloss".to_string(),
            ..matte()
        };
        let err = compute_price(
            &product,
            &config(48, 12),
            &walnut(),
            &wrong_finish,
            &hidden_bracket(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::OptionMismatch { field: "finish", .. }
        ));
    }

    #[test]
    fn test_shipping_tiers() {
        assert_eq!(estimate_shipping(48, 12), Money::from_cents(2500)); // 576 in²
        assert_eq!(estimate_shipping(96, 24), Money::from_cents(4500)); // 2304 in²
        assert_eq!(estimate_shipping(120, 24), Money::from_cents(7500)); // 2880 in²
    }
}
