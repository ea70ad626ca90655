use serde::{Deserialize, Serialize};

use crate::image::ImageRef;

/// One editable field of an entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryField {
    Category,
    Gender,
    Age,
    Price,
    Discount,
}

impl EntryField {
    /// Column order of the entry grid.
    pub const ALL: [EntryField; 5] = [
        EntryField::Category,
        EntryField::Gender,
        EntryField::Age,
        EntryField::Price,
        EntryField::Discount,
    ];
}

/// Raw form state for one entry, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCandidate {
    pub category: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub price: Option<String>,
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl EntryCandidate {
    pub fn new(
        category: impl Into<String>,
        gender: impl Into<String>,
        age: impl Into<String>,
        price: impl Into<String>,
        discount: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category.into()),
            gender: Some(gender.into()),
            age: Some(age.into()),
            price: Some(price.into()),
            discount: Some(discount.into()),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn get(&self, field: EntryField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Overwrite one field. An empty string is kept as typed; the validator
    /// treats it as missing.
    pub fn set(&mut self, field: EntryField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn clear(&mut self, field: EntryField) {
        *self.slot_mut(field) = None;
    }

    /// Whether the field holds something other than whitespace.
    pub fn is_filled(&self, field: EntryField) -> bool {
        self.get(field).is_some_and(|v| !v.trim().is_empty())
    }

    fn slot(&self, field: EntryField) -> &Option<String> {
        match field {
            EntryField::Category => &self.category,
            EntryField::Gender => &self.gender,
            EntryField::Age => &self.age,
            EntryField::Price => &self.price,
            EntryField::Discount => &self.discount,
        }
    }

    fn slot_mut(&mut self, field: EntryField) -> &mut Option<String> {
        match field {
            EntryField::Category => &mut self.category,
            EntryField::Gender => &mut self.gender,
            EntryField::Age => &mut self.age,
            EntryField::Price => &mut self.price,
            EntryField::Discount => &mut self.discount,
        }
    }
}

/// Partial update for a stored entry. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl EntryPatch {
    pub fn price(value: impl Into<String>) -> Self {
        Self {
            price: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn set(mut self, field: EntryField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            EntryField::Category => self.category = value,
            EntryField::Gender => self.gender = value,
            EntryField::Age => self.age = value,
            EntryField::Price => self.price = value,
            EntryField::Discount => self.discount = value,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the supplied fields over `candidate`.
    pub fn apply_to(self, candidate: &mut EntryCandidate) {
        let EntryPatch {
            category,
            gender,
            age,
            price,
            discount,
            image,
        } = self;
        if category.is_some() {
            candidate.category = category;
        }
        if gender.is_some() {
            candidate.gender = gender;
        }
        if age.is_some() {
            candidate.age = age;
        }
        if price.is_some() {
            candidate.price = price;
        }
        if discount.is_some() {
            candidate.discount = discount;
        }
        if image.is_some() {
            candidate.image = image;
        }
    }
}

/// A full form submitted through the edit dialog replaces every text field.
impl From<EntryCandidate> for EntryPatch {
    fn from(form: EntryCandidate) -> Self {
        Self {
            category: form.category,
            gender: form.gender,
            age: form.age,
            price: form.price,
            discount: form.discount,
            image: form.image,
        }
    }
}
