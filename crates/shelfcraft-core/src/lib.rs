//! # shelfcraft-core: Pure Business Logic for ShelfCraft
//!
//! This crate is the **heart** of the ShelfCraft storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ShelfCraft Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Frontend (storefront UI)                      │   │
//! │  │    Builder UI ──► Product Page ──► Cart UI ──► Checkout UI     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shelfcraft-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │ compute_  │  │  lookups  │  │   │
//! │  │   │  Config   │  │  rounding │  │  price    │  │  resolve  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  shelfcraft-cart (Cart Store)                   │   │
//! │  │           line-item identity, merge, snapshot persistence       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, WoodType, Finish, Bracket, Configuration)
//! - [`money`] - Money type with integer arithmetic (no floating point drift!)
//! - [`pricing`] - The configurable-product pricing engine
//! - [`catalog`] - Read-only option catalogs with lookup-by-id
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shelfcraft_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let base = Money::from_cents(10000); // $100.00
//!
//! // Fractional results round half-away-from-zero into whole cents
//! let scaled = Money::from_fractional_cents(10000.0 * 1.2);
//! assert_eq!(scaled.cents(), 12000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shelfcraft_core::Money` instead of
// `use shelfcraft_core::money::Money`

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::compute_price;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts; made-to-order shelves are low-volume purchases.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
