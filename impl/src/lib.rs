//! Derive macros for the [`enumtable`](https://docs.rs/enumtable) crate. Use them through the
//! re-exports `enumtable::Record` and `enumtable::EnumValue`.

extern crate proc_macro;


mod primitive;
mod record;
mod value;

/// Implements `enumtable::Record` for a struct with named fields which all share one type.
///
/// The member name of a field defaults to the field name and can be overwritten with
/// `#[record(rename = "NAME")]`.
#[proc_macro_derive(Record, attributes(record))]
pub fn record(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    record::Record::parse(item.into())
        .map(Into::<proc_macro2::TokenStream>::into)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

/// Implements `enumtable::EnumValue` for a tuple struct with exactly one field, and
/// `enumtable::AutoValue` if that field is an `u8`.
#[proc_macro_derive(EnumValue)]
pub fn enum_value(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    value::Value::parse(item.into())
        .map(Into::<proc_macro2::TokenStream>::into)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}
