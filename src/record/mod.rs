//! Supplier records and field updates.
//!
//! # Components
//! - [`Supplier`] - The stored record, keyed by [`SupplierId`](crate::SupplierId)
//! - [`SupplierUpdate`] - Optional per-field overwrites
//! - [`UpdateOutcome`] / [`RatingChange`] - What an update actually changed

mod supplier;
mod update;

pub use supplier::Supplier;
pub use update::{RatingChange, SupplierUpdate, UpdateOutcome};
