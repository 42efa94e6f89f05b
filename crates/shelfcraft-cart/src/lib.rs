//! # shelfcraft-cart: Cart Store for ShelfCraft
//!
//! Owns the shopping cart for one session: stable line-item identities,
//! duplicate-configuration merging, aggregate recomputation, and a persisted
//! snapshot restored at startup.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Data Flow                                  │
//! │                                                                         │
//! │  Builder UI collects a Configuration (dims + finish + bracket)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shelfcraft-core::compute_price ──► unit price (frozen at add-time)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore::add_item(product, configuration, unit_price, qty)          │
//! │       │                                                                 │
//! │       ├── same LineItemKey already present? merge quantities           │
//! │       ├── otherwise append a new line item                             │
//! │       ├── recompute total_items / total_price from scratch             │
//! │       └── persist the full snapshot (best-effort, never blocks)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! Single logical owner, single session: the store is mutated only by the
//! session that created it, so there is no lock inside. Callers that share a
//! store across threads wrap it themselves (`Mutex<CartStore<_>>`).
//!
//! ## Modules
//! - [`cart`] - `Cart`, `CartItem`, `LineItemKey` value types
//! - [`store`] - `CartStore`, the single owner and writer
//! - [`snapshot`] - persistence collaborator (`SnapshotStore` trait + impls)
//! - [`checkout`] - order summary surcharges layered on the cart subtotal
//! - [`error`] - cart and snapshot error types

pub mod cart;
pub mod checkout;
pub mod error;
pub mod snapshot;
pub mod store;

pub use cart::{Cart, CartItem, LineItemKey};
pub use checkout::OrderSummary;
pub use error::{CartError, CartResult, SnapshotError};
pub use snapshot::{JsonFileStore, MemoryStore, SnapshotStore};
pub use store::CartStore;
