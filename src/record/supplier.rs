//! The supplier record.

use std::fmt;

use crate::common::{Rating, SupplierId};
use crate::index::Keyed;

/// A supplier or vendor in the registry.
///
/// The ID is fixed at construction: records are ordered by it inside the
/// index, so there is no setter for it.
///
/// # Example
/// ```
/// use supplierdb::{Rating, Supplier};
///
/// let supplier = Supplier::new(
///     "S078",
///     "VitaCo",
///     "012-1234567",
///     "Ascorbic Acid 1000mg",
///     Rating::new(5).unwrap(),
/// );
/// assert_eq!(supplier.id().as_str(), "S078");
/// assert_eq!(supplier.rating().get(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    contact: String,
    /// The product line the supplier delivers.
    category: String,
    rating: Rating,
}

impl Supplier {
    /// Create a new supplier record.
    pub fn new(
        id: impl Into<SupplierId>,
        name: impl Into<String>,
        contact: impl Into<String>,
        category: impl Into<String>,
        rating: Rating,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            category: category.into(),
            rating,
        }
    }

    #[inline]
    pub fn id(&self) -> &SupplierId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) {
        self.contact = contact.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }
}

impl Keyed for Supplier {
    type Key = SupplierId;

    #[inline]
    fn key(&self) -> &SupplierId {
        &self.id
    }
}

/// Multi-line detail view, one labelled field per line.
impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Supplier ID: {}", self.id)?;
        writeln!(f, "Supplier Name: {}", self.name)?;
        writeln!(f, "Contact: {}", self.contact)?;
        writeln!(f, "Supplier Product: {}", self.category)?;
        write!(f, "Supplier Rating: {}", self.rating)
    }
}
