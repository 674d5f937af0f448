//! Supplier identifier type.

use std::borrow::Borrow;
use std::fmt;

/// Identifies a supplier in the registry.
///
/// IDs are free-form strings such as `"S078"`. Ordering is plain
/// lexicographic string order, so mixed-width IDs sort as strings do:
/// `"S10"` comes before `"S9"`. Zero-pad numeric suffixes to get numeric
/// order.
///
/// # Example
/// ```
/// use supplierdb::SupplierId;
///
/// let id = SupplierId::new("S078");
/// assert_eq!(id.as_str(), "S078");
/// assert!(SupplierId::new("S022") < id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SupplierId(String);

impl SupplierId {
    /// Create a new SupplierId.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        SupplierId(id.into())
    }

    /// Borrow the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SupplierId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SupplierId {
    fn from(id: &str) -> Self {
        SupplierId::new(id)
    }
}

impl From<String> for SupplierId {
    fn from(id: String) -> Self {
        SupplierId(id)
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_id_new() {
        let id = SupplierId::new("S078");
        assert_eq!(id.as_str(), "S078");
        assert_eq!(SupplierId::from("S078"), id);
        assert_eq!(SupplierId::from(String::from("S078")), id);
    }

    #[test]
    fn test_supplier_id_ordering_is_lexicographic() {
        assert!(SupplierId::new("S022") < SupplierId::new("S078"));
        assert!(SupplierId::new("S087") > SupplierId::new("S078"));
        // Not numeric: "S10" sorts before "S9".
        assert!(SupplierId::new("S10") < SupplierId::new("S9"));
    }

    #[test]
    fn test_supplier_id_display() {
        assert_eq!(format!("{}", SupplierId::new("S042")), "S042");
    }
}
