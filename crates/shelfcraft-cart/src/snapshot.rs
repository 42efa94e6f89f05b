//! # Snapshot Persistence
//!
//! The persistence collaborator: a key-value store holding one serialized
//! cart snapshot under a fixed key.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Lifecycle                                    │
//! │                                                                         │
//! │  Session start ──► load() once ──► restore cart (or empty on miss)     │
//! │                                                                         │
//! │  Every mutation ──► save(full snapshot)                                 │
//! │        │                                                                 │
//! │        ├── Ok: nothing to do                                            │
//! │        └── Err: the MUTATION STILL SUCCEEDED. The store logs a          │
//! │            warning, keeps serving the in-memory cart, and retries       │
//! │            naturally on the next mutation's write.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The web storefront keeps this snapshot in browser localStorage under the
//! key `wooden-shelf-cart`; [`JsonFileStore`] is the file-system equivalent,
//! [`MemoryStore`] the ephemeral one for tests and previews.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cart::Cart;
use crate::error::SnapshotError;

/// Fixed key the cart snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "wooden-shelf-cart";

// =============================================================================
// SnapshotStore Trait
// =============================================================================

/// Persistence seam for the cart store.
///
/// Implementations must be best-effort: a `save` failure is reported, never
/// panicked, and must leave any previously stored snapshot readable where the
/// medium allows it.
pub trait SnapshotStore {
    /// Reads the stored snapshot, if any. `Ok(None)` means no snapshot has
    /// ever been written (a fresh session).
    fn load(&self) -> Result<Option<Cart>, SnapshotError>;

    /// Writes the full snapshot, replacing any previous one.
    fn save(&mut self, cart: &Cart) -> Result<(), SnapshotError>;
}

// =============================================================================
// JsonFileStore
// =============================================================================

/// File-backed snapshot store: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Creates a store under a data directory using the fixed snapshot key
    /// as the file name (`<dir>/wooden-shelf-cart.json`).
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        JsonFileStore {
            path: dir.as_ref().join(format!("{SNAPSHOT_KEY}.json")),
        }
    }

    /// Path the snapshot is stored at.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Cart>, SnapshotError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let cart = serde_json::from_str(&raw)?;
        Ok(Some(cart))
    }

    fn save(&mut self, cart: &Cart) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(cart)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory snapshot store for tests and ephemeral sessions.
///
/// Stores the serialized JSON text rather than the `Cart` value, so loads
/// exercise the same decode path as the file store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Returns the raw stored JSON, if any. Test helper.
    pub fn raw(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Cart>, SnapshotError> {
        match &self.snapshot {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, cart: &Cart) -> Result<(), SnapshotError> {
        self.snapshot = Some(serde_json::to_string(cart)?);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
