use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use entrygrid_core::{Entity, EntryId};

use crate::candidate::EntryCandidate;
use crate::category::Category;
use crate::image::ImageRef;

/// An entry that passed validation and may be committed to a store.
///
/// Only the validator constructs these, so holding one proves the rules held
/// at the moment it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    id: EntryId,
    category: Category,
    gender: String,
    age: Option<u32>,
    price: f64,
    discount: f64,
    image: Option<ImageRef>,
}

impl ValidEntry {
    pub(crate) fn new(
        id: EntryId,
        category: Category,
        gender: String,
        age: Option<u32>,
        price: f64,
        discount: f64,
        image: Option<ImageRef>,
    ) -> Self {
        Self {
            id,
            category,
            gender,
            age,
            price,
            discount,
            image,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}

/// A product entry held by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    id: EntryId,
    category: Category,
    gender: String,
    age: Option<u32>,
    price: f64,
    discount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<ImageRef>,
    created_at: DateTime<Utc>,
}

impl ProductEntry {
    /// Materialize an accepted entry.
    pub fn accept(valid: ValidEntry, created_at: DateTime<Utc>) -> Self {
        let ValidEntry {
            id,
            category,
            gender,
            age,
            price,
            discount,
            image,
        } = valid;
        Self {
            id,
            category,
            gender,
            age,
            price,
            discount,
            image,
            created_at,
        }
    }

    /// Replace the field values with a re-validated version of this entry.
    ///
    /// Identity and creation time are kept; `valid` must carry the same id.
    pub fn replace_with(&mut self, valid: ValidEntry) {
        debug_assert_eq!(self.id, valid.id);
        let created_at = self.created_at;
        *self = Self::accept(valid, created_at);
    }

    /// The entry in form representation, as an edit dialog would prefill it.
    pub fn to_candidate(&self) -> EntryCandidate {
        EntryCandidate {
            category: Some(self.category.label().to_string()),
            gender: Some(self.gender.clone()),
            age: self.age.map(|a| a.to_string()),
            price: Some(self.price.to_string()),
            discount: Some(self.discount.to_string()),
            image: self.image.clone(),
        }
    }

    pub fn id_typed(&self) -> EntryId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for ProductEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: EntryId) -> ValidEntry {
        ValidEntry::new(
            id,
            Category::Books,
            "Female".to_string(),
            Some(30),
            19.99,
            10.0,
            None,
        )
    }

    #[test]
    fn to_candidate_uses_form_strings() {
        let entry = ProductEntry::accept(sample(EntryId::new()), Utc::now());
        let form = entry.to_candidate();
        assert_eq!(form, EntryCandidate::new("Books", "Female", "30", "19.99", "10"));
    }

    #[test]
    fn absent_age_prefills_as_none() {
        let mut valid = sample(EntryId::new());
        valid.age = None;
        let entry = ProductEntry::accept(valid, Utc::now());
        assert_eq!(entry.to_candidate().age, None);
    }

    #[test]
    fn replace_keeps_identity_and_creation_time() {
        let id = EntryId::new();
        let created = Utc::now();
        let mut entry = ProductEntry::accept(sample(id), created);

        let mut updated = sample(id);
        updated.price = 5.0;
        entry.replace_with(updated);

        assert_eq!(*entry.id(), id);
        assert_eq!(entry.created_at(), created);
        assert_eq!(entry.price(), 5.0);
    }
}
