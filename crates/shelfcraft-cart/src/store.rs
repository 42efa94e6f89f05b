//! # Cart Store
//!
//! The single owner and only writer of the session's cart.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                 │
//! │                                                                         │
//! │  Frontend Action          Store Operation          Cart State Change    │
//! │  ───────────────          ───────────────          ─────────────────    │
//! │                                                                         │
//! │  Add to Cart ────────────► add_item() ───────────► merge or append     │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ────► qty set / removed   │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ────────► item removed        │
//! │                                                                         │
//! │  Click Clear ────────────► clear() ──────────────► cart emptied        │
//! │                                                                         │
//! │  View Cart ──────────────► cart() ───────────────► (read only)         │
//! │                                                                         │
//! │  Every mutation: recompute aggregates, then persist the snapshot.       │
//! │  Persistence is best-effort - a failed write degrades the store to      │
//! │  memory-only for now and retries on the next mutation.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global singleton: the storefront constructs one store per
//! session and passes it to consumers explicitly.

use tracing::{debug, warn};

use shelfcraft_core::{
    compute_price,
    validation::{validate_configuration, validate_price_cents},
    Catalog, Configuration, Money, Product,
};

use crate::cart::{Cart, CartItem, LineItemKey};
use crate::error::{CartError, CartResult};
use crate::snapshot::SnapshotStore;

// =============================================================================
// Cart Store
// =============================================================================

/// Owns the authoritative in-memory [`Cart`] and its persisted snapshot.
///
/// ## Ownership
/// The store is the only writer; collaborators read the cart through
/// [`CartStore::cart`] or invoke the operations below. All operations are
/// synchronous and atomic with respect to the in-memory state.
#[derive(Debug)]
pub struct CartStore<S: SnapshotStore> {
    cart: Cart,
    snapshot: S,
    degraded: bool,
}

impl<S: SnapshotStore> CartStore<S> {
    /// Opens a store, restoring the persisted snapshot if one exists.
    ///
    /// A missing snapshot starts a fresh session. A corrupt or unreadable
    /// snapshot also starts fresh - losing a stale cart beats refusing to
    /// shop - but is logged as a warning.
    pub fn open(snapshot: S) -> Self {
        let cart = match snapshot.load() {
            Ok(Some(mut cart)) => {
                // Re-derive the aggregates so a hand-edited or pre-fix
                // snapshot can't smuggle in drifted totals.
                cart.recompute_totals();
                debug!(
                    items = cart.items.len(),
                    total_items = cart.total_items,
                    "restored cart snapshot"
                );
                cart
            }
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(error = %err, "could not restore cart snapshot, starting empty");
                Cart::new()
            }
        };

        CartStore {
            cart,
            snapshot,
            degraded: false,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds `quantity` units of a configured product at the given unit price
    /// (typically the pricing engine's output), merging into an existing line
    /// item when the derived identity matches.
    ///
    /// Returns the line item's identity so the caller can reference it in
    /// later `update_quantity`/`remove_item` calls.
    pub fn add_item(
        &mut self,
        product: &Product,
        configuration: &Configuration,
        unit_price: Money,
        quantity: i64,
    ) -> CartResult<LineItemKey> {
        validate_price_cents(unit_price.cents())?;

        let key = self.cart.add_item(product, configuration, unit_price, quantity)?;
        debug!(
            product_id = %product.id,
            quantity,
            unit_price = %unit_price,
            total_items = self.cart.total_items,
            "added cart item"
        );
        self.persist();
        Ok(key)
    }

    /// Validates a configuration, resolves its option records, computes the
    /// unit price, and adds the result to the cart in one step.
    ///
    /// This is the whole add-to-cart data flow for callers that hold a
    /// [`Catalog`]; callers that price separately use [`CartStore::add_item`].
    pub fn add_configured(
        &mut self,
        catalog: &Catalog,
        product: &Product,
        configuration: &Configuration,
        quantity: i64,
    ) -> CartResult<LineItemKey> {
        if !product.is_active {
            return Err(CartError::ProductInactive {
                product_id: product.id.clone(),
            });
        }
        validate_configuration(product, configuration)?;

        let (wood_type, finish, bracket) = catalog.resolve(product, configuration)?;
        let unit_price = compute_price(product, configuration, wood_type, finish, bracket)?;

        self.add_item(product, configuration, unit_price, quantity)
    }

    /// Removes the line item with the given identity (no-op if absent).
    pub fn remove_item(&mut self, key: &LineItemKey) {
        self.cart.remove_item(key);
        debug!(product_id = %key.product_id, "removed cart item");
        self.persist();
    }

    /// Sets a line item's quantity; `quantity <= 0` removes it.
    pub fn update_quantity(&mut self, key: &LineItemKey, quantity: i64) -> CartResult<()> {
        self.cart.update_quantity(key, quantity)?;
        debug!(product_id = %key.product_id, quantity, "updated cart quantity");
        self.persist();
        Ok(())
    }

    /// Empties the cart and resets the aggregates to zero.
    pub fn clear(&mut self) {
        self.cart.clear();
        debug!("cleared cart");
        self.persist();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Read-only view of the current cart. Always reflects the most recent
    /// mutation synchronously, whatever the persistence medium is doing.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        self.cart.total_items
    }

    /// Cart subtotal (sum of line totals). Shipping and tax are layered on
    /// top by the checkout collaborator, never folded in here.
    pub fn total_price(&self) -> Money {
        self.cart.total_price
    }

    /// Finds a line item by identity.
    pub fn find(&self, key: &LineItemKey) -> Option<&CartItem> {
        self.cart.find(key)
    }

    /// Whether the last snapshot write failed and the store is currently
    /// serving from memory only.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Writes the full snapshot after a mutation.
    ///
    /// Failures never propagate to the caller: the in-memory mutation has
    /// already succeeded, so we log, flag the degradation, and let the next
    /// mutation's write double as the retry.
    fn persist(&mut self) {
        match self.snapshot.save(&self.cart) {
            Ok(()) => {
                if self.degraded {
                    debug!("cart snapshot persistence recovered");
                }
                self.degraded = false;
            }
            Err(err) => {
                warn!(error = %err, "cart snapshot write failed, continuing in memory");
                self.degraded = true;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapshotError;
    use crate::snapshot::MemoryStore;
    use chrono::Utc;
    use shelfcraft_core::{Bracket, Finish, WoodType};

    fn shelf() -> Product {
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

    fn catalog() -> Catalog {
        Catalog::new(
            [WoodType {
                id: "walnut".to_string(),
                name: "Walnut".to_string(),
                description: None,
                color_hex: "#5d432c".to_string(),
                price_multiplier: 1.2,
            }],
            [Finish {
                id: "matte".to_string(),
                name: "Matte Lacquer".to_string(),
                description: None,
                price_modifier_cents: 1000,
            }],
            [Bracket {
                id: "hidden".to_string(),
                name: "Hidden Float".to_string(),
                description: None,
                price_cents: 1500,
            }],
        )
    }

    fn config(length_in: u32, depth_in: u32) -> Configuration {
        Configuration {
            length_in,
            depth_in,
            finish: "matte".to_string(),
            bracket: "hidden".to_string(),
        }
    }

    /// Snapshot store whose writes always fail, for degraded-mode tests.
    struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn load(&self) -> Result<Option<Cart>, SnapshotError> {
            Ok(None)
        }

        fn save(&mut self, _cart: &Cart) -> Result<(), SnapshotError> {
            Err(SnapshotError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "backing store unavailable",
            )))
        }
    }

    #[test]
    fn test_mutations_persist_and_restore() {
        let mut store = CartStore::open(MemoryStore::new());
        let product = shelf();
        store
            .add_item(&product, &config(96, 12), Money::from_cents(29000), 2)
            .unwrap();

        // A new session over the same medium sees the same cart.
        let raw = store.snapshot.clone();
        let restored = CartStore::open(raw);
        assert_eq!(restored.total_items(), 2);
        assert_eq!(restored.total_price(), Money::from_cents(58000));
        assert_eq!(restored.cart().items.len(), 1);
    }

    /// End-to-end concrete scenario: base $100.00 at 48×12, wood ×1.2,
    /// finish +$10, bracket +$15, configured 96×12 (area ratio 2.0),
    /// quantity 2 → subtotal $580.00.
    #[test]
    fn test_add_configured_prices_and_adds() {
        let mut store = CartStore::open(MemoryStore::new());
        let product = shelf();
        let catalog = catalog();

        let key = store
            .add_configured(&catalog, &product, &config(96, 12), 2)
            .unwrap();

        let item = store.find(&key).unwrap();
        assert_eq!(item.unit_price, Money::from_cents(29000));
        assert_eq!(store.total_price(), Money::from_cents(58000));
        assert_eq!(store.total_items(), 2);
    }

    #[test]
    fn test_add_configured_rejects_out_of_bounds() {
        let mut store = CartStore::open(MemoryStore::new());
        let product = shelf();

        let err = store
            .add_configured(&catalog(), &product, &config(200, 12), 1)
            .unwrap_err();
        assert!(matches!(err, CartError::Validation(_)));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_configured_rejects_inactive_product() {
        let mut store = CartStore::open(MemoryStore::new());
        let mut product = shelf();
        product.is_active = false;

        let err = store
            .add_configured(&catalog(), &product, &config(48, 12), 1)
            .unwrap_err();
        assert!(matches!(err, CartError::ProductInactive { .. }));
    }

    #[test]
    fn test_add_configured_rejects_unknown_option() {
        let mut store = CartStore::open(MemoryStore::new());
        let product = shelf();
        let mut cfg = config(48, 12);
        cfg.bracket = "missing".to_string();

        let err = store
            .add_configured(&catalog(), &product, &cfg, 1)
            .unwrap_err();
        assert!(matches!(err, CartError::Core(_)));
    }

    /// A failing backing store must not fail or corrupt the mutation: the
    /// in-memory cart keeps working for the rest of the session.
    #[test]
    fn test_persistence_failure_degrades_but_mutation_succeeds() {
        let mut store = CartStore::open(FailingStore);
        let product = shelf();

        let key = store
            .add_item(&product, &config(96, 12), Money::from_cents(29000), 1)
            .unwrap();

        assert!(store.is_degraded());
        assert_eq!(store.total_items(), 1);

        // Further operations keep succeeding in memory.
        store.update_quantity(&key, 3).unwrap();
        assert_eq!(store.total_price(), Money::from_cents(87000));
        assert!(store.is_degraded());
    }

    #[test]
    fn test_negative_unit_price_is_a_caller_error() {
        let mut store = CartStore::open(MemoryStore::new());
        let product = shelf();

        let err = store
            .add_item(&product, &config(96, 12), Money::from_cents(-100), 1)
            .unwrap_err();
        assert!(matches!(err, CartError::Validation(_)));
    }

    #[test]
    fn test_clear_persists_empty_snapshot() {
        let mut store = CartStore::open(MemoryStore::new());
        let product = shelf();
        store
            .add_item(&product, &config(96, 12), Money::from_cents(29000), 2)
            .unwrap();

        store.clear();

        let restored = CartStore::open(store.snapshot.clone());
        assert!(restored.cart().is_empty());
        assert_eq!(restored.total_price(), Money::zero());
    }
}
