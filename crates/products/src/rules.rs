//! Configurable parts of the validation rule set.
//!
//! The form variants this crate replaces disagreed on a few rules (whether age
//! is collected, how the discount range is closed, whether an image must be
//! uploaded). Each of those is a knob here; `RuleSet::default()` is the
//! canonical combination.

use serde::{Deserialize, Serialize};

/// How the age field participates in validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRule {
    /// Age must be present and a positive integer.
    #[default]
    Required,
    /// Age may be left empty; when given it must be a positive integer.
    Optional,
    /// The form has no age column; any age input is ignored.
    NotInSchema,
}

/// Accepted discount percentage range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountBound {
    /// (0, 100]
    #[default]
    UpperInclusive,
    /// [0, 100)
    LowerInclusive,
    /// (0, 100)
    Exclusive,
}

impl DiscountBound {
    pub fn contains(self, discount: f64) -> bool {
        match self {
            DiscountBound::UpperInclusive => discount > 0.0 && discount <= 100.0,
            DiscountBound::LowerInclusive => (0.0..100.0).contains(&discount),
            DiscountBound::Exclusive => discount > 0.0 && discount < 100.0,
        }
    }

    /// Range in comparison form, e.g. `> 0 and <= 100`.
    pub fn describe(self) -> &'static str {
        match self {
            DiscountBound::UpperInclusive => "> 0 and <= 100",
            DiscountBound::LowerInclusive => ">= 0 and < 100",
            DiscountBound::Exclusive => "> 0 and < 100",
        }
    }
}

/// Whether an image upload is part of the required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRule {
    #[default]
    Optional,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub age: AgeRule,
    pub discount: DiscountBound,
    pub image: ImageRule,
}

impl RuleSet {
    pub fn with_age(mut self, age: AgeRule) -> Self {
        self.age = age;
        self
    }

    pub fn with_discount(mut self, discount: DiscountBound) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_image(mut self, image: ImageRule) -> Self {
        self.image = image;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_differ_only_at_the_edges() {
        for bound in [
            DiscountBound::UpperInclusive,
            DiscountBound::LowerInclusive,
            DiscountBound::Exclusive,
        ] {
            assert!(bound.contains(50.0));
            assert!(!bound.contains(-1.0));
            assert!(!bound.contains(150.0));
        }

        assert!(DiscountBound::UpperInclusive.contains(100.0));
        assert!(!DiscountBound::UpperInclusive.contains(0.0));

        assert!(DiscountBound::LowerInclusive.contains(0.0));
        assert!(!DiscountBound::LowerInclusive.contains(100.0));

        assert!(!DiscountBound::Exclusive.contains(0.0));
        assert!(!DiscountBound::Exclusive.contains(100.0));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let rules: RuleSet = serde_json::from_str(r#"{"discount":"exclusive"}"#).unwrap();
        assert_eq!(rules.age, AgeRule::Required);
        assert_eq!(rules.discount, DiscountBound::Exclusive);
        assert_eq!(rules.image, ImageRule::Optional);
    }
}
