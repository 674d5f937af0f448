//! Supplier registry.
//!
//! The registry is the layer the shell talks to. It owns the ordered index
//! and adds what the index deliberately leaves out: duplicate checks, field
//! updates with validation, and statistics.
//!
//! # Components
//! - [`Registry`] - Single-threaded registry over an [`OrderedIndex`](crate::index::OrderedIndex)
//! - [`SharedRegistry`] - Lock-guarded handle for multi-threaded callers
//! - [`RegistryStats`] - Operation counters
//! - [`sample_suppliers`] - Demonstration data

mod sample;
mod shared;
mod stats;
mod supplier_registry;

pub use sample::sample_suppliers;
pub use shared::SharedRegistry;
pub use stats::{RegistryStats, StatsSnapshot};
pub use supplier_registry::Registry;
