//! # Error Types
//!
//! Domain-specific error types for shelfcraft-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shelfcraft-core errors (this file)                                    │
//! │  ├── CoreError        - Pricing and catalog failures                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shelfcraft-cart errors (separate crate)                               │
//! │  ├── CartError        - Cart operation failures                        │
//! │  └── SnapshotError    - Persistence failures (non-fatal)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, option id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Precondition violations are caller bugs surfaced synchronously

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The product's default dimensions have zero area, so the area ratio
    /// is undefined.
    ///
    /// ## When This Occurs
    /// - `default_length_in × default_depth_in == 0` in upstream catalog data
    ///
    /// This is a data bug in the catalog, not a user error. The pricing
    /// engine rejects it instead of dividing by zero.
    #[error("product {product_id} has zero default area, cannot compute area ratio")]
    InvalidProductDefaults { product_id: String },

    /// An option id did not resolve in its catalog.
    ///
    /// ## When This Occurs
    /// - Configuration references a finish/bracket that was removed
    /// - Product references a wood species missing from the catalog
    #[error("{catalog} option not found: {id}")]
    OptionNotFound { catalog: &'static str, id: String },

    /// An option record passed to the pricing engine does not match the
    /// id selected in the configuration.
    ///
    /// The engine's contract is that callers resolve ids to records first
    /// (see [`crate::catalog::Catalog::resolve`]); a mismatch is a caller bug.
    #[error("{field} record '{got}' does not match selected id '{expected}'")]
    OptionMismatch {
        field: &'static str,
        expected: String,
        got: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when input doesn't meet requirements. Used for early
/// validation before pricing or cart logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidProductDefaults {
            product_id: "prod-1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "product prod-1 has zero default area, cannot compute area ratio"
        );

        let err = CoreError::OptionNotFound {
            catalog: "finish",
            id: "gloss".to_string(),
        };
        assert_eq!(err.to_string(), "finish option not found: gloss");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "finish".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
