//! Contains the trait which replaces runtime reflection over the fields of a record.

/// A struct whose named fields are the members of an enumeration.
///
/// Implement it with `#[derive(enumtable::Record)]`, which requires every field to have the same
/// type. `FIELDS`, `values` and `value_mut` must agree on the declaration order of the members.
pub trait Record {
    /// The type shared by all fields.
    type Value: crate::EnumValue;

    /// The member names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Returns a copy of every field value in declaration order.
    fn values(&self) -> Vec<Self::Value>;

    /// Returns the field at `index` in declaration order.
    fn value_mut(&mut self, index: usize) -> Option<&mut Self::Value>;
}
