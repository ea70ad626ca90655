//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::EntryId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// The rule an entry (or a batch row) violated.
///
/// Variants are listed in evaluation order: the validator reports the first
/// one that fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// A required field was empty (or whitespace only).
    MissingField,
    /// The category is not one of the known labels.
    InvalidCategory,
    /// Gender is not male, female or other.
    InvalidGender,
    /// Age is not a positive integer.
    InvalidAge,
    /// Price is not a positive number.
    InvalidPrice,
    /// Discount is not a number inside the configured percentage bound.
    DiscountOutOfRange,
    /// A batch submission contained no rows.
    EmptyBatch,
}

impl ValidationReason {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            ValidationReason::MissingField => "missing_field",
            ValidationReason::InvalidCategory => "invalid_category",
            ValidationReason::InvalidGender => "invalid_gender",
            ValidationReason::InvalidAge => "invalid_age",
            ValidationReason::InvalidPrice => "invalid_price",
            ValidationReason::DiscountOutOfRange => "discount_out_of_range",
            ValidationReason::EmptyBatch => "empty_batch",
        }
    }
}

impl core::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// A rejected entry: one reason plus the message shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub reason: ValidationReason,
    pub message: String,
    /// Zero-based row index for batch submissions.
    pub row: Option<usize>,
}

impl ValidationError {
    pub fn new(reason: ValidationReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
            row: None,
        }
    }

    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

/// Domain-level error.
///
/// Everything here is deterministic input rejection; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The entry failed a validation rule.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No entry with this id exists in the store.
    #[error("entry not found: {0}")]
    NotFound(EntryId),

    /// An entry with this id is already stored.
    #[error("duplicate entry id: {0}")]
    DuplicateId(EntryId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The validation failure carried by this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            DomainError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_its_message() {
        let err = ValidationError::new(ValidationReason::InvalidPrice, "Price must be greater than 0.");
        assert_eq!(err.to_string(), "Price must be greater than 0.");
        assert_eq!(err.row, None);
        assert_eq!(err.clone().at_row(2).row, Some(2));
    }

    #[test]
    fn domain_error_wraps_validation() {
        let err: DomainError =
            ValidationError::new(ValidationReason::InvalidGender, "bad gender").into();
        assert_eq!(
            err.as_validation().map(|v| v.reason),
            Some(ValidationReason::InvalidGender)
        );
        assert!(DomainError::NotFound(EntryId::new()).as_validation().is_none());
    }

    #[test]
    fn reason_codes_are_snake_case() {
        assert_eq!(ValidationReason::DiscountOutOfRange.code(), "discount_out_of_range");
        assert_eq!(ValidationReason::MissingField.to_string(), "missing_field");
    }
}
