//! Common types and utilities shared across SupplierDB.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and the runtime [`config::RegistryConfig`]
//! - Error types
//! - Identifiers and validated values (SupplierId, Rating)

pub mod config;
pub mod error;
mod rating;
mod supplier_id;

pub use error::{Error, Result};
pub use rating::Rating;
pub use supplier_id::SupplierId;
