//! Supplier Registry - the caller layer over the ordered index.
//!
//! The [`Registry`] provides:
//! - Duplicate-checked inserts (the index itself accepts duplicates)
//! - A separate unchecked insert path for bulk/sample loading
//! - In-place field updates with rating validation
//! - Operation statistics

use tracing::{debug, info, warn};

use crate::common::{Error, Result, SupplierId};
use crate::index::OrderedIndex;
use crate::record::{RatingChange, Supplier, SupplierUpdate, UpdateOutcome};
use crate::registry::sample::sample_suppliers;
use crate::registry::RegistryStats;

/// The supplier registry.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │                  Registry                    │
/// │  ┌──────────────────────┐  ┌──────────────┐  │
/// │  │ OrderedIndex<Supplier│  │RegistryStats │  │
/// │  │   keyed by SupplierId│  │   (atomic)   │  │
/// │  └──────────────────────┘  └──────────────┘  │
/// └──────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use supplierdb::{Rating, Registry, Supplier, SupplierUpdate};
///
/// let mut registry = Registry::with_sample_data();
/// assert!(registry.exists("S078"));
///
/// let new = Supplier::new("S050", "MediPlus", "013-1234567", "Gauze", Rating::new(3).unwrap());
/// registry.insert(new).unwrap();
///
/// let outcome = registry
///     .update_fields("S022", SupplierUpdate::new().rating_text("9"))
///     .unwrap();
/// assert!(outcome.rating_rejected());
/// assert_eq!(registry.search("S022").unwrap().rating().get(), 4);
/// ```
pub struct Registry {
    /// Suppliers ordered by ID.
    index: OrderedIndex<Supplier>,

    /// Operation counters.
    stats: RegistryStats,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            index: OrderedIndex::new(),
            stats: RegistryStats::new(),
        }
    }

    /// Create a registry preloaded with the demonstration suppliers.
    pub fn with_sample_data() -> Self {
        let mut registry = Self::new();
        registry.seed_sample_data();
        registry
    }

    /// Load the demonstration suppliers through the unchecked insert path.
    pub fn seed_sample_data(&mut self) {
        for supplier in sample_suppliers() {
            self.insert_unchecked(supplier);
        }
        info!(count = self.len(), "loaded sample suppliers");
    }

    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Whether a supplier with this ID exists.
    ///
    /// Used as the duplicate pre-check; not counted as a lookup.
    pub fn exists(&self, id: &str) -> bool {
        self.index.exists(id)
    }

    /// Find a supplier by ID.
    pub fn search(&self, id: &str) -> Option<&Supplier> {
        let found = self.index.search(id);
        self.stats.record_lookup(found.is_some());
        debug!(id, found = found.is_some(), "search");
        found
    }

    /// Find a supplier by ID, treating absence as an error.
    ///
    /// # Errors
    /// - `Error::NotFound` if no supplier has this ID
    pub fn get(&self, id: &str) -> Result<&Supplier> {
        self.search(id)
            .ok_or_else(|| Error::NotFound(SupplierId::new(id)))
    }

    // ========================================================================
    // Public API: Insert and delete
    // ========================================================================

    /// Add a supplier, refusing an ID that is already present.
    ///
    /// # Errors
    /// - `Error::DuplicateKey` if a supplier with the same ID exists
    pub fn insert(&mut self, supplier: Supplier) -> Result<()> {
        if self.index.exists(supplier.id()) {
            RegistryStats::bump(&self.stats.duplicate_rejections);
            warn!(id = %supplier.id(), "duplicate supplier rejected");
            return Err(Error::DuplicateKey(supplier.id().clone()));
        }
        self.insert_unchecked(supplier);
        Ok(())
    }

    /// Add a supplier without the duplicate check.
    ///
    /// A duplicate ID is stored to the right of the existing record and is
    /// shadowed by it for lookups.
    pub fn insert_unchecked(&mut self, supplier: Supplier) {
        debug!(id = %supplier.id(), as_root = self.index.is_empty(), "insert");
        self.index.insert(supplier);
        RegistryStats::bump(&self.stats.inserts);
    }

    /// Remove a supplier and return it.
    ///
    /// # Errors
    /// - `Error::NotFound` if no supplier has this ID
    pub fn delete(&mut self, id: &str) -> Result<Supplier> {
        match self.index.delete(id) {
            Some(removed) => {
                RegistryStats::bump(&self.stats.deletes);
                debug!(id, remaining = self.index.len(), "delete");
                Ok(removed)
            }
            None => {
                info!(id, "delete of unknown supplier");
                Err(Error::NotFound(SupplierId::new(id)))
            }
        }
    }

    // ========================================================================
    // Public API: Update
    // ========================================================================

    /// Overwrite the supplied fields of an existing supplier in place.
    ///
    /// Each field is applied independently. A rating that is not an integer
    /// in range is reported in the outcome and the previous rating is kept;
    /// the other supplied fields are still applied.
    ///
    /// # Errors
    /// - `Error::NotFound` if no supplier has this ID
    pub fn update_fields(&mut self, id: &str, update: SupplierUpdate) -> Result<UpdateOutcome> {
        let supplier = self
            .index
            .search_mut(id)
            .ok_or_else(|| Error::NotFound(SupplierId::new(id)))?;

        let outcome = update.apply_to(supplier);
        RegistryStats::bump(&self.stats.updates);

        if let RatingChange::Rejected { input } = &outcome.rating {
            RegistryStats::bump(&self.stats.rating_rejections);
            warn!(id, input = %input, "rating rejected, keeping current value");
        }
        debug!(id, fields = ?outcome.applied_fields(), "update");

        Ok(outcome)
    }

    // ========================================================================
    // Public API: Enumeration and info
    // ========================================================================

    /// All suppliers sorted by ID.
    pub fn in_order(&self) -> Vec<&Supplier> {
        self.index.in_order()
    }

    /// Lazy iterator over suppliers sorted by ID.
    pub fn iter(&self) -> impl Iterator<Item = &Supplier> + '_ {
        self.index.iter()
    }

    /// Number of suppliers.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Height of the underlying tree.
    pub fn height(&self) -> usize {
        self.index.height()
    }

    /// Get registry statistics.
    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
