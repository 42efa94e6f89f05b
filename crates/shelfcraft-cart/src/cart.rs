//! # Cart Value Types
//!
//! The cart and its line items.
//!
//! ## Line Item Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Line Item State Machine                                 │
//! │                                                                         │
//! │   absent ──add_item──► present(quantity = n) ──remove/qty 0──► absent  │
//! │                              │         ▲                                │
//! │                              └─────────┘                                │
//! │                     add_item (same key, merge)                          │
//! │                     update_quantity (n > 0)                             │
//! │                                                                         │
//! │   No other states exist. Quantity never goes negative, and quantity 0   │
//! │   is never a resting state - it is immediately removed.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A line item's identity is a deterministic function of
//! `(product_id, length_in, depth_in, finish, bracket)`. It is *computed*
//! from the item's own fields, never stored as a random token, so repeating
//! the computation with the same inputs always finds the existing item. The
//! key is a structured composite (derived `Eq + Hash`), not a delimited
//! string, so an option id containing a hyphen can never collide.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfcraft_core::{
    validation::validate_quantity, Configuration, Money, Product, MAX_CART_ITEMS,
    MAX_ITEM_QUANTITY,
};

use crate::error::{CartError, CartResult};

// =============================================================================
// Line Item Key
// =============================================================================

/// Derived identity of a cart line item.
///
/// Two add-operations whose keys agree on all five fields refer to the same
/// line item; any difference in any one field produces a distinct item.
/// Wood species is not a field: it is fixed per product, so `product_id`
/// subsumes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemKey {
    pub product_id: String,
    pub length_in: u32,
    pub depth_in: u32,
    pub finish: String,
    pub bracket: String,
}

impl LineItemKey {
    /// Computes the key for a product + configuration pair.
    pub fn for_configuration(product: &Product, configuration: &Configuration) -> Self {
        LineItemKey {
            product_id: product.id.clone(),
            length_in: configuration.length_in,
            depth_in: configuration.depth_in,
            finish: configuration.finish.clone(),
            bracket: configuration.bracket.clone(),
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One row in the cart: a quantity of a single configuration, at a unit
/// price computed at add-time.
///
/// ## Design Notes
/// - Display fields (`name`, `wood_type`, `image_url`) are denormalized
///   snapshots so the cart renders consistently even if the catalog changes
///   after the item was added.
/// - `unit_price` is frozen at creation. It is NOT recomputed on merge or
///   quantity change - the shopper keeps the price they saw when they added
///   the item. (Whether stale prices should eventually revalidate is an open
///   product question; today the lock is intentional.)
/// - `total_price = unit_price × quantity` is an invariant maintained on
///   every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line was configured from.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Wood species option id at time of adding (frozen, fixed per product).
    pub wood_type: String,

    /// Selected finish option id.
    pub finish: String,

    /// Selected bracket option id.
    pub bracket: String,

    /// Selected length in whole inches.
    pub length_in: u32,

    /// Selected depth in whole inches.
    pub depth_in: u32,

    /// Quantity in cart (always >= 1).
    pub quantity: i64,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price: Money,

    /// Line total (unit_price × quantity), maintained on every mutation.
    pub total_price: Money,

    /// Primary product image at time of adding (frozen).
    pub image_url: String,

    /// When this item was first added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new line item from a product, configuration, and the unit
    /// price the pricing engine computed for it.
    pub fn new(
        product: &Product,
        configuration: &Configuration,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            wood_type: product.wood_type.clone(),
            finish: configuration.finish.clone(),
            bracket: configuration.bracket.clone(),
            length_in: configuration.length_in,
            depth_in: configuration.depth_in,
            quantity,
            unit_price,
            total_price: unit_price.multiply_quantity(quantity),
            image_url: product.primary_image().to_string(),
            added_at: Utc::now(),
        }
    }

    /// Recomputes this item's derived identity from its own fields.
    pub fn key(&self) -> LineItemKey {
        LineItemKey {
            product_id: self.product_id.clone(),
            length_in: self.length_in,
            depth_in: self.depth_in,
            finish: self.finish.clone(),
            bracket: self.bracket.clone(),
        }
    }

    /// Sets the quantity and restores the `total_price` invariant.
    /// Callers must keep quantity positive; zero means remove, upstream.
    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.total_price = self.unit_price.multiply_quantity(quantity);
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: insertion-ordered line items plus derived aggregates.
///
/// ## Invariants
/// - Items are unique by [`LineItemKey`] (adding the same logical
///   configuration merges quantities)
/// - Item order is insertion order, preserved across merges
/// - `total_items == sum(item.quantity)` and
///   `total_price == sum(item.total_price)` after every mutation; the
///   aggregates are recomputed from the items collection, never adjusted
///   incrementally, so they cannot drift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Line items, in insertion order.
    pub items: Vec<CartItem>,

    /// Sum of all line quantities (derived).
    pub total_items: i64,

    /// Sum of all line totals (derived).
    pub total_price: Money,

    /// When the cart was created / last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total_items: 0,
            total_price: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` units of a configured product, merging into an
    /// existing line item when the derived identity matches.
    ///
    /// ## Behavior
    /// - Same key already present: quantity increments; the line total is
    ///   recomputed from the **original** frozen unit price (the
    ///   `unit_price` argument is ignored for merges - price-lock at
    ///   add-time)
    /// - Key absent: a new line item is appended with the supplied unit
    ///   price
    ///
    /// ## Errors
    /// - Non-positive or over-cap quantity (caller bug)
    /// - Merge pushing the line past [`MAX_ITEM_QUANTITY`]
    /// - New item pushing the cart past [`MAX_CART_ITEMS`]
    pub fn add_item(
        &mut self,
        product: &Product,
        configuration: &Configuration,
        unit_price: Money,
        quantity: i64,
    ) -> CartResult<LineItemKey> {
        validate_quantity(quantity)?;

        let key = LineItemKey::for_configuration(product, configuration);

        if let Some(item) = self.items.iter_mut().find(|i| i.key() == key) {
            let new_qty = item.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CartError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.set_quantity(new_qty);
            self.recompute_totals();
            return Ok(key);
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CartError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items
            .push(CartItem::new(product, configuration, unit_price, quantity));
        self.recompute_totals();
        Ok(key)
    }

    /// Removes the line item with the given identity.
    ///
    /// Removing an absent key is a no-op, not an error: the end state
    /// ("item gone") already holds.
    pub fn remove_item(&mut self, key: &LineItemKey) {
        self.items.retain(|i| i.key() != *key);
        self.recompute_totals();
    }

    /// Sets the quantity of the line item with the given identity.
    ///
    /// ## Behavior
    /// - `quantity <= 0` behaves exactly as [`Cart::remove_item`]
    /// - Otherwise the item's quantity is set and its total recomputed as
    ///   `unit_price × quantity`
    /// - An absent key is a no-op (the UI may race a removal)
    pub fn update_quantity(&mut self, key: &LineItemKey, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            self.remove_item(key);
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CartError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.key() == *key) {
            item.set_quantity(quantity);
        }
        self.recompute_totals();
        Ok(())
    }

    /// Clears all items and resets the aggregates to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
        self.recompute_totals();
    }

    /// Finds a line item by identity.
    pub fn find(&self, key: &LineItemKey) -> Option<&CartItem> {
        self.items.iter().find(|i| i.key() == *key)
    }

    /// Returns the number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes both aggregates from scratch over the items collection.
    ///
    /// Always a full sum, never an incremental adjustment - this is the
    /// invariant that keeps `total_items`/`total_price` from drifting away
    /// from the line items across any sequence of mutations.
    pub fn recompute_totals(&mut self) {
        self.total_items = self.items.iter().map(|i| i.quantity).sum();
        self.total_price = self.items.iter().map(|i| i.total_price).sum();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
