//! Entry validation.
//!
//! Rules run in a fixed order and the first failure wins:
//! required fields, category, gender, age, price, discount.

use entrygrid_core::{EntryId, ValidationError, ValidationReason};

use crate::candidate::{EntryCandidate, EntryField};
use crate::category::Category;
use crate::entry::ValidEntry;
use crate::rules::{AgeRule, ImageRule, RuleSet};

/// Default row count of the bulk entry grid.
pub const BATCH_SIZE: usize = 5;

const GENDERS: [&str; 3] = ["male", "female", "other"];

/// Validate with the canonical rule set.
pub fn validate(candidate: &EntryCandidate) -> Result<ValidEntry, ValidationError> {
    Validator::default().validate(candidate)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate a new entry, assigning it a fresh id.
    pub fn validate(&self, candidate: &EntryCandidate) -> Result<ValidEntry, ValidationError> {
        self.validate_with_id(candidate, EntryId::new())
    }

    /// Validate under an existing identity (edit path).
    pub fn validate_with_id(
        &self,
        candidate: &EntryCandidate,
        id: EntryId,
    ) -> Result<ValidEntry, ValidationError> {
        self.check(candidate, id).map_err(|reason| {
            tracing::debug!(reason = reason.code(), "entry rejected");
            ValidationError::new(reason, self.message(reason))
        })
    }

    pub fn is_valid(&self, candidate: &EntryCandidate) -> bool {
        self.check(candidate, EntryId::new()).is_ok()
    }

    /// Validate every row; the first failing row rejects the whole batch.
    pub fn validate_batch(
        &self,
        rows: &[EntryCandidate],
    ) -> Result<Vec<ValidEntry>, ValidationError> {
        if rows.is_empty() {
            let reason = ValidationReason::EmptyBatch;
            return Err(ValidationError::new(reason, self.batch_message(reason)));
        }

        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                self.check(row, EntryId::new()).map_err(|reason| {
                    tracing::debug!(row = index, reason = reason.code(), "batch rejected");
                    ValidationError::new(reason, self.batch_message(reason)).at_row(index)
                })
            })
            .collect()
    }

    /// Message for a single-entry form.
    pub fn message(&self, reason: ValidationReason) -> String {
        match reason {
            ValidationReason::MissingField => match self.rules.image {
                ImageRule::Optional => "Please fill all fields.".to_string(),
                ImageRule::Required => "Please fill all fields and upload an image.".to_string(),
            },
            ValidationReason::InvalidCategory => "Please select a valid category.".to_string(),
            ValidationReason::InvalidGender => "Gender must be female, male or other.".to_string(),
            ValidationReason::InvalidAge => "Age must be greater than 0.".to_string(),
            ValidationReason::InvalidPrice => "Price must be greater than 0.".to_string(),
            ValidationReason::DiscountOutOfRange => {
                format!("Discount must be {}.", self.rules.discount.describe())
            }
            ValidationReason::EmptyBatch => "Add at least one row before submitting!".to_string(),
        }
    }

    /// Message for the bulk grid, phrased for all rows.
    pub fn batch_message(&self, reason: ValidationReason) -> String {
        match reason {
            ValidationReason::MissingField => match self.rules.image {
                ImageRule::Optional => {
                    "Please fill all fields in every row before submitting!".to_string()
                }
                ImageRule::Required => {
                    "Please fill all fields and upload an image in every row before submitting!"
                        .to_string()
                }
            },
            ValidationReason::InvalidCategory => {
                "Please select a valid category in all rows!".to_string()
            }
            ValidationReason::InvalidGender => {
                "Please enter female, male or other for gender in all rows!".to_string()
            }
            ValidationReason::InvalidAge => "Please enter age > 0 in all rows!".to_string(),
            ValidationReason::InvalidPrice => "Please enter price > 0 in all rows!".to_string(),
            ValidationReason::DiscountOutOfRange => format!(
                "Please enter discount {} in all rows!",
                self.rules.discount.describe()
            ),
            ValidationReason::EmptyBatch => self.message(reason),
        }
    }

    fn check(&self, c: &EntryCandidate, id: EntryId) -> Result<ValidEntry, ValidationReason> {
        self.check_required(c)?;

        let category = c
            .category
            .as_deref()
            .map(str::trim)
            .and_then(|label| label.parse::<Category>().ok())
            .ok_or(ValidationReason::InvalidCategory)?;

        let gender = c.gender.clone().unwrap_or_default();
        let normalized = gender.trim().to_lowercase();
        if !GENDERS.contains(&normalized.as_str()) {
            return Err(ValidationReason::InvalidGender);
        }

        let age = match self.rules.age {
            AgeRule::NotInSchema => None,
            AgeRule::Optional if !c.is_filled(EntryField::Age) => None,
            AgeRule::Required | AgeRule::Optional => Some(parse_age(c.age.as_deref())?),
        };

        let price = parse_number(c.price.as_deref())
            .filter(|p| *p > 0.0)
            .ok_or(ValidationReason::InvalidPrice)?;

        let discount = parse_number(c.discount.as_deref())
            .filter(|d| self.rules.discount.contains(*d))
            .ok_or(ValidationReason::DiscountOutOfRange)?;

        Ok(ValidEntry::new(
            id,
            category,
            gender,
            age,
            price,
            discount,
            c.image.clone(),
        ))
    }

    fn check_required(&self, c: &EntryCandidate) -> Result<(), ValidationReason> {
        let age_required = self.rules.age == AgeRule::Required;
        let fields_filled = EntryField::ALL
            .into_iter()
            .filter(|f| *f != EntryField::Age || age_required)
            .all(|f| c.is_filled(f));
        let image_ok = self.rules.image == ImageRule::Optional || c.image.is_some();

        if fields_filled && image_ok {
            Ok(())
        } else {
            Err(ValidationReason::MissingField)
        }
    }
}

fn parse_age(raw: Option<&str>) -> Result<u32, ValidationReason> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|age| *age > 0)
        .ok_or(ValidationReason::InvalidAge)
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}
