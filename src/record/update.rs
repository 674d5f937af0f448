//! Partial field updates.

use crate::common::Rating;
use crate::record::Supplier;

/// Optional overwrites for a supplier's fields.
///
/// A `None` field keeps the current value. The rating is carried as raw text
/// and validated when the update is applied.
///
/// # Example
/// ```
/// use supplierdb::SupplierUpdate;
///
/// let update = SupplierUpdate::new().name("VitaCo Sdn Bhd").rating_text("4");
/// assert_eq!(update.name.as_deref(), Some("VitaCo Sdn Bhd"));
/// assert!(update.contact.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub category: Option<String>,
    pub rating_text: Option<String>,
}

impl SupplierUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn rating_text(mut self, rating_text: impl Into<String>) -> Self {
        self.rating_text = Some(rating_text.into());
        self
    }

    /// Apply every supplied field to `supplier`.
    ///
    /// Fields are applied one by one and independently: a rejected rating
    /// leaves the old rating in place but does not undo the text fields.
    pub fn apply_to(self, supplier: &mut Supplier) -> UpdateOutcome {
        let mut outcome = UpdateOutcome::default();

        if let Some(name) = self.name {
            supplier.set_name(name);
            outcome.name = true;
        }
        if let Some(contact) = self.contact {
            supplier.set_contact(contact);
            outcome.contact = true;
        }
        if let Some(category) = self.category {
            supplier.set_category(category);
            outcome.category = true;
        }
        if let Some(text) = self.rating_text {
            outcome.rating = match Rating::parse(&text) {
                Ok(rating) => {
                    supplier.set_rating(rating);
                    RatingChange::Applied(rating)
                }
                Err(_) => RatingChange::Rejected {
                    input: text.trim().to_string(),
                },
            };
        }

        outcome
    }
}

/// What happened to the rating during an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RatingChange {
    /// No rating text was supplied.
    #[default]
    Unchanged,
    /// The new rating was stored.
    Applied(Rating),
    /// The text was not an integer in range; the old rating was kept.
    Rejected { input: String },
}

/// Which fields an update changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub name: bool,
    pub contact: bool,
    pub category: bool,
    pub rating: RatingChange,
}

impl UpdateOutcome {
    /// Whether the supplied rating text failed validation.
    pub fn rating_rejected(&self) -> bool {
        matches!(self.rating, RatingChange::Rejected { .. })
    }

    /// Names of the fields that were overwritten.
    pub fn applied_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name {
            fields.push("name");
        }
        if self.contact {
            fields.push("contact");
        }
        if self.category {
            fields.push("category");
        }
        if matches!(self.rating, RatingChange::Applied(_)) {
            fields.push("rating");
        }
        fields
    }
}
