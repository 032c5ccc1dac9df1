//! Contains code to parse newtype enumeration values.

use syn::spanned::Spanned;

impl super::Value {
    pub(crate) fn parse(item: proc_macro2::TokenStream) -> syn::Result<Self> {
        let input: syn::DeriveInput = syn::parse2(item)?;

        if let Some(param) = input.generics.params.first() {
            return Err(syn::Error::new(param.span(), "expected no generic parameters"));
        }

        let mut fields = match input.data {
            syn::Data::Struct(s) => match s.fields {
                syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => fields.unnamed,
                syn::Fields::Unnamed(fields) => return Err(syn::Error::new(
                    fields.paren_token.span, "expected exactly one field"
                )),
                _ => return Err(syn::Error::new(
                    s.struct_token.span(), "expected tuple struct"
                ))
            },

            syn::Data::Enum(e) => return Err(syn::Error::new(
                e.enum_token.span(), "expected struct"
            )),

            syn::Data::Union(u) => return Err(syn::Error::new(
                u.union_token.span(), "expected struct"
            ))
        };

        let inner = match fields.pop() {
            Some(field) => field.into_value().ty,
            None => return Err(syn::Error::new(input.ident.span(), "expected exactly one field"))
        };

        Ok(Self { ident: input.ident, inner })
    }
}
