//! # Cart Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (shelfcraft-core)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError (this module) ← caller-bug rejections, synchronous          │
//! │                                                                         │
//! │  SnapshotError (this module) ← persistence I/O, NEVER fatal:           │
//! │  logged as a warning, store degrades to memory-only, retried on        │
//! │  the next mutation's write                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use shelfcraft_core::{CoreError, ValidationError};

// =============================================================================
// Cart Error
// =============================================================================

/// Cart operation errors. All of these are precondition violations surfaced
/// synchronously - the in-memory cart is never left half-mutated.
#[derive(Debug, Error)]
pub enum CartError {
    /// Cart has reached the maximum number of distinct line items.
    #[error("cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// A merge or update would push a line item past the quantity cap.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Product is not purchasable (inactive / soft deleted).
    #[error("product {product_id} is not available for sale")]
    ProductInactive { product_id: String },

    /// Input validation failure (non-positive quantity, out-of-bounds
    /// configuration).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Pricing or catalog failure bubbled up from shelfcraft-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Snapshot Error
// =============================================================================

/// Persistence failures from the snapshot collaborator.
///
/// These are deliberately NOT part of [`CartError`]: a failed snapshot write
/// must not fail the mutation that triggered it. The store logs and degrades
/// instead (see `CartStore::persist`).
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Backing store unavailable (file missing permissions, disk full, ...).
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded.
    #[error("snapshot serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::QuantityTooLarge {
            requested: 1200,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "quantity 1200 exceeds maximum allowed (999)"
        );
    }

    #[test]
    fn test_validation_converts_to_cart_error() {
        let err: CartError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert!(matches!(err, CartError::Validation(_)));
    }
}
