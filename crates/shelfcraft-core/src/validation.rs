//! # Validation Module
//!
//! Input validation for pricing and cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (builder UI)                                        │
//! │  ├── Sliders constrained to the product's min/max bounds               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Positive quantities, bounded dimensions                           │
//! │  └── Rejects caller bugs synchronously, before any cart mutation       │
//! │                                                                         │
//! │  Defense in depth: a bad frontend build can't corrupt the cart         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Configuration, Product};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0) - zero/negative quantity to `add_item` is a
///   caller error, not a remove shorthand
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## Example
/// ```rust
/// use shelfcraft_core::validation::validate_quantity;
///
/// assert!(validate_quantity(2).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (fully discounted items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Configuration Validator
// =============================================================================

/// Validates a configuration against its product's customization bounds.
///
/// ## Rules
/// - Length and depth must be positive
/// - Length within `[min_length_in, max_length_in]`
/// - Depth within `[min_depth_in, max_depth_in]`
/// - Finish and bracket ids must be non-empty (resolution against the
///   catalog happens separately, see `Catalog::resolve`)
pub fn validate_configuration(
    product: &Product,
    configuration: &Configuration,
) -> ValidationResult<()> {
    if configuration.length_in == 0 {
        return Err(ValidationError::MustBePositive {
            field: "length".to_string(),
        });
    }
    if configuration.depth_in == 0 {
        return Err(ValidationError::MustBePositive {
            field: "depth".to_string(),
        });
    }

    if configuration.length_in < product.min_length_in
        || configuration.length_in > product.max_length_in
    {
        return Err(ValidationError::OutOfRange {
            field: "length".to_string(),
            min: product.min_length_in as i64,
            max: product.max_length_in as i64,
        });
    }

    if configuration.depth_in < product.min_depth_in
        || configuration.depth_in > product.max_depth_in
    {
        return Err(ValidationError::OutOfRange {
            field: "depth".to_string(),
            min: product.min_depth_in as i64,
            max: product.max_depth_in as i64,
        });
    }

    if configuration.finish.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "finish".to_string(),
        });
    }
    if configuration.bracket.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "bracket".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bounded_product() -> Product {
        Product {
            id: "prod-1".to_string(),
            name: "Floating Walnut Shelf".to_string(),
            slug: "floating-walnut-shelf".to_string(),
            wood_type: "walnut".to_string(),
            description: None,
            base_price_cents: 10000,
            default_length_in: 48,
            default_depth_in: 12,
            default_finish: "matte".to_string(),
            default_bracket: "hidden".to_string(),
            min_length_in: 12,
            max_length_in: 96,
            min_depth_in: 6,
            max_depth_in: 24,
            image_urls: vec![],
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(29000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_configuration_within_bounds() {
        let product = bounded_product();
        let config = product.default_configuration();
        assert!(validate_configuration(&product, &config).is_ok());
    }

    #[test]
    fn test_configuration_out_of_bounds() {
        let product = bounded_product();

        let mut too_long = product.default_configuration();
        too_long.length_in = 200;
        assert!(validate_configuration(&product, &too_long).is_err());

        let mut too_shallow = product.default_configuration();
        too_shallow.depth_in = 2;
        assert!(validate_configuration(&product, &too_shallow).is_err());

        let mut zero_length = product.default_configuration();
        zero_length.length_in = 0;
        assert!(matches!(
            validate_configuration(&product, &zero_length),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_configuration_requires_option_ids() {
        let product = bounded_product();
        let mut config = product.default_configuration();
        config.finish = "  ".to_string();
        assert!(matches!(
            validate_configuration(&product, &config),
            Err(ValidationError::Required { .. })
        ));
    }
}
