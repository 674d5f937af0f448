//! SupplierDB - an in-memory supplier registry backed by an unbalanced
//! binary search tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          SupplierDB                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Shell (shell/)                              │   │
//! │  │     Menu → prompts → typed registry calls → latency      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Registry (registry/)                        │   │
//! │  │  Duplicate checks + field updates + stats                │   │
//! │  │  SharedRegistry: one RwLock around the whole registry    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index (index/)                              │   │
//! │  │   OrderedIndex: insert / search / delete / in-order      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Records (record/)                           │   │
//! │  │        Supplier + SupplierUpdate + UpdateOutcome         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (SupplierId, Rating, Error, config)
//! - [`index`] - The ordered binary search tree index
//! - [`record`] - Supplier records and partial updates
//! - [`registry`] - Duplicate-checked registry, statistics, shared handle
//! - [`shell`] - Interactive text menu
//!
//! # Quick Start
//! ```
//! use supplierdb::{Rating, Registry, Supplier};
//!
//! let mut registry = Registry::with_sample_data();
//! registry
//!     .insert(Supplier::new("S080", "PharmaLink", "016-1234567", "Saline 500mL", Rating::new(4).unwrap()))
//!     .unwrap();
//!
//! let ids: Vec<&str> = registry.in_order().iter().map(|s| s.id().as_str()).collect();
//! assert_eq!(ids, vec!["S022", "S078", "S080", "S087"]);
//! ```

pub mod common;
pub mod index;
pub mod record;
pub mod registry;
pub mod shell;

// Re-export commonly used items at crate root for convenience
pub use common::config::{RegistryConfig, MAX_RATING, MIN_RATING};
pub use common::{Error, Rating, Result, SupplierId};

pub use index::{Keyed, OrderedIndex};
pub use record::{RatingChange, Supplier, SupplierUpdate, UpdateOutcome};
pub use registry::{Registry, RegistryStats, SharedRegistry, StatsSnapshot};
pub use shell::Shell;
