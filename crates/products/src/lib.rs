//! Product entry domain module.
//!
//! This crate contains the entry data model and the validation rules that gate
//! every entry on its way into a store, implemented purely as deterministic
//! domain logic (no IO, no UI, no storage).

pub mod candidate;
pub mod category;
pub mod entry;
pub mod image;
pub mod rules;
pub mod validator;

pub use candidate::{EntryCandidate, EntryField, EntryPatch};
pub use category::{Category, UnknownCategory};
pub use entry::{ProductEntry, ValidEntry};
pub use image::ImageRef;
pub use rules::{AgeRule, DiscountBound, ImageRule, RuleSet};
pub use validator::{BATCH_SIZE, Validator, validate};
