//! Contains all data types to represent a newtype enumeration value.

#[macro_use]
pub(crate) mod parse;
pub(crate) mod generate;

/// Stores the information about a tuple struct with exactly one field, which wraps the scalar
/// stored in every member of a record.
pub(crate) struct Value {
    pub(crate) ident: syn::Ident,
    pub(crate) inner: syn::Type
}
