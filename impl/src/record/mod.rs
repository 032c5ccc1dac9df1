//! Contains all data types to represent a record of enumeration members.

#[macro_use]
pub(crate) mod parse;
pub(crate) mod generate;

/// Stores all information about a record, which is parsed from a struct with named fields. Every
/// field is one member of the enumeration, all fields share the type `ty`.
pub(crate) struct Record {
    pub(crate) ident: syn::Ident,
    pub(crate) generics: syn::Generics,
    pub(crate) ty: syn::Type,
    pub(crate) members: Vec<Member>
}

/// Stores a single member of the enumeration.
pub(crate) struct Member {
    /// The struct field holding the value.
    pub(crate) ident: syn::Ident,
    /// The member name, either the raw field name or the value of `#[record(rename = "...")]`.
    pub(crate) name: syn::LitStr
}
