//! Index structures.
//!
//! # Components
//! - [`OrderedIndex`] - Unbalanced binary search tree ordered by key
//! - [`Keyed`] - How a stored record exposes its key to the index
//! - [`Iter`] - Lazy in-order traversal

mod bst;

pub use bst::{Iter, OrderedIndex};

/// A record that can be stored in an [`OrderedIndex`].
///
/// The index orders records by the borrowed key and never inspects the rest
/// of the record.
pub trait Keyed {
    /// Key type used for ordering.
    type Key: Ord;

    /// Borrow the record's key.
    fn key(&self) -> &Self::Key;
}
