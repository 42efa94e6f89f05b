//! # Domain Types
//!
//! Core domain types for the ShelfCraft storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  Configuration  │   │  Option records │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  length_in      │   │  WoodType (×)   │       │
//! │  │  base_price     │   │  depth_in       │   │  Finish   (+)   │       │
//! │  │  default dims   │   │  finish (id)    │   │  Bracket  (+)   │       │
//! │  │  min/max bounds │   │  bracket (id)   │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Product + Configuration + option records ──► pricing::compute_price   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types here are read-only from the core's perspective during a pricing
//! or cart operation. The catalog collaborator owns product and option data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A sellable shelf design with a base price and customization bounds.
///
/// Wood species is fixed per product (`wood_type` is an option id into the
/// wood-type catalog); customers customize dimensions, finish, and brackets.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (opaque, assigned by the catalog backend).
    pub id: String,

    /// Display name shown in the shop and on cart rows.
    pub name: String,

    /// URL slug for the product page.
    pub slug: String,

    /// Wood species option id. Fixed per product, not customizable.
    pub wood_type: String,

    /// Marketing description.
    pub description: Option<String>,

    /// Base price in cents, before any option or size adjustment.
    pub base_price_cents: i64,

    /// Default shelf length in whole inches.
    pub default_length_in: u32,

    /// Default shelf depth in whole inches.
    pub default_depth_in: u32,

    /// Default finish option id.
    pub default_finish: String,

    /// Default bracket option id.
    pub default_bracket: String,

    /// Minimum configurable length in inches.
    pub min_length_in: u32,

    /// Maximum configurable length in inches.
    pub max_length_in: u32,

    /// Minimum configurable depth in inches.
    pub min_depth_in: u32,

    /// Maximum configurable depth in inches.
    pub max_depth_in: u32,

    /// Product photos, first entry is the primary image.
    pub image_urls: Vec<String>,

    /// Whether the product is purchasable (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the base price as a Money type.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }

    /// Returns the default area in square inches.
    #[inline]
    pub fn default_area(&self) -> u64 {
        self.default_length_in as u64 * self.default_depth_in as u64
    }

    /// Returns the configuration a product page starts from.
    pub fn default_configuration(&self) -> Configuration {
        Configuration {
            length_in: self.default_length_in,
            depth_in: self.default_depth_in,
            finish: self.default_finish.clone(),
            bracket: self.default_bracket.clone(),
        }
    }

    /// Returns the primary image URL, or empty string if none uploaded.
    pub fn primary_image(&self) -> &str {
        self.image_urls.first().map(String::as_str).unwrap_or("")
    }
}

// =============================================================================
// Option Records
// =============================================================================

/// A wood species. Carries a price **multiplier** applied to the base price.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WoodType {
    /// Stable opaque identifier.
    pub id: String,

    /// Display name ("Walnut", "White Oak", ...).
    pub name: String,

    /// Marketing description.
    pub description: Option<String>,

    /// Swatch color for the builder UI.
    pub color_hex: String,

    /// Multiplier applied to the product base price (1.0 = no change).
    pub price_multiplier: f64,
}

/// A surface finish. Carries an **additive** price modifier, which may be
/// negative (an unfinished shelf costs less) or zero.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finish {
    /// Stable opaque identifier.
    pub id: String,

    /// Display name ("Matte Lacquer", "Danish Oil", ...).
    pub name: String,

    /// Marketing description.
    pub description: Option<String>,

    /// Additive modifier in cents. May be negative or zero.
    pub price_modifier_cents: i64,
}

impl Finish {
    /// Returns the modifier as a Money type.
    #[inline]
    pub fn price_modifier(&self) -> Money {
        Money::from_cents(self.price_modifier_cents)
    }
}

/// Bracket hardware. Carries a flat price added per shelf.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bracket {
    /// Stable opaque identifier.
    pub id: String,

    /// Display name ("Hidden Float", "Cast Iron L", ...).
    pub name: String,

    /// Marketing description.
    pub description: Option<String>,

    /// Flat price in cents added per shelf.
    pub price_cents: i64,
}

impl Bracket {
    /// Returns the bracket price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// The customizable attributes selected for one shelf.
///
/// ## Value Semantics
/// A configuration is an immutable value: changing a selection in the builder
/// produces a *new* `Configuration`, never a mutation of one already used to
/// create a cart line item. Two configurations are equal iff all four fields
/// are equal. Wood species is not part of the configuration - it is fixed by
/// the product.
///
/// Dimensions are whole inches, which keeps the type `Eq + Hash` and makes it
/// usable inside the cart's derived line-item identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Configuration {
    /// Selected shelf length in whole inches.
    pub length_in: u32,

    /// Selected shelf depth in whole inches.
    pub depth_in: u32,

    /// Selected finish option id.
    pub finish: String,

    /// Selected bracket option id.
    pub bracket: String,
}

impl Configuration {
    /// Returns the selected area in square inches.
    #[inline]
    pub fn area(&self) -> u64 {
        self.length_in as u64 * self.depth_in as u64
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
