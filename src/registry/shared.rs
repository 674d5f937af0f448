//! Thread-safe registry handle.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::common::Result;
use crate::record::{Supplier, SupplierUpdate, UpdateOutcome};
use crate::registry::{Registry, StatsSnapshot};

/// A cloneable, thread-safe handle to one [`Registry`].
///
/// # Thread Safety
/// A single `RwLock` guards the whole tree:
/// - lookups and enumeration take the read lock (many readers)
/// - inserts, deletes and updates take the write lock
/// - statistics are atomic, so readers can count lookups
///
/// Records are returned by value because a reference into the tree cannot
/// outlive the lock guard.
///
/// # Example
/// ```
/// use supplierdb::SharedRegistry;
/// use std::thread;
///
/// let shared = SharedRegistry::with_sample_data();
/// let reader = shared.clone();
///
/// let handle = thread::spawn(move || reader.get("S078").map(|s| s.name().to_string()));
/// assert_eq!(handle.join().unwrap().unwrap(), "VitaCo");
/// ```
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// A shared registry preloaded with the demonstration suppliers.
    pub fn with_sample_data() -> Self {
        Self::new(Registry::with_sample_data())
    }

    // ========================================================================
    // Read lock
    // ========================================================================

    pub fn exists(&self, id: &str) -> bool {
        self.inner.read().exists(id)
    }

    /// Copy of the supplier with this ID.
    ///
    /// # Errors
    /// - `Error::NotFound` if no supplier has this ID
    pub fn get(&self, id: &str) -> Result<Supplier> {
        self.inner.read().get(id).cloned()
    }

    /// Copies of all suppliers sorted by ID.
    pub fn in_order(&self) -> Vec<Supplier> {
        self.inner.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.inner.read().stats().snapshot()
    }

    // ========================================================================
    // Write lock
    // ========================================================================

    /// See [`Registry::insert`]. The existence check and the insert happen
    /// under one write lock, so two racing inserts of the same ID cannot
    /// both succeed.
    pub fn insert(&self, supplier: Supplier) -> Result<()> {
        self.inner.write().insert(supplier)
    }

    pub fn insert_unchecked(&self, supplier: Supplier) {
        self.inner.write().insert_unchecked(supplier);
    }

    pub fn delete(&self, id: &str) -> Result<Supplier> {
        self.inner.write().delete(id)
    }

    pub fn update_fields(&self, id: &str, update: SupplierUpdate) -> Result<UpdateOutcome> {
        self.inner.write().update_fields(id, update)
    }

    /// Run a closure with shared access to the registry.
    pub fn with_read<T>(&self, f: impl FnOnce(&Registry) -> T) -> T {
        f(&*self.inner.read())
    }

    /// Run a closure with exclusive access to the registry.
    pub fn with_write<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> T {
        f(&mut *self.inner.write())
    }
}
