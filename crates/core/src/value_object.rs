//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A `Category` is a value object; a `ProductEntry` is an entity (two entries
/// with identical fields are still different entries).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
