//! Contains code to parse records.

use syn::ext::IdentExt;
use syn::spanned::Spanned;

impl super::Record {
    /// Reads the optional `#[record(rename = "...")]` attributes of a field.
    fn parse_rename(attrs: &[syn::Attribute]) -> syn::Result<Option<syn::LitStr>> {
        let mut rename: Option<syn::LitStr> = None;

        for attr in attrs.iter().filter(|attr| attr.path.is_ident("record")) {
            let nested = match attr.parse_meta()? {
                syn::Meta::List(list) => list.nested,
                syn::Meta::Path(path) => return Err(syn::Error::new(
                    path.span(), "expected list"
                )),
                syn::Meta::NameValue(value) => return Err(syn::Error::new(
                    value.span(), "expected list"
                ))
            };

            for meta in nested {
                match meta {
                    syn::NestedMeta::Meta(syn::Meta::NameValue(value))
                        if value.path.is_ident("rename") =>
                    {
                        let name = match value.lit {
                            syn::Lit::Str(name) => name,
                            lit => return Err(syn::Error::new(
                                lit.span(), "expected string literal"
                            ))
                        };

                        if name.value().is_empty() {
                            return Err(syn::Error::new(name.span(), "expected a non-empty name"));
                        }
                        if rename.is_some() {
                            return Err(syn::Error::new(value.path.span(), "duplicate `rename`"));
                        }

                        rename = Some(name);
                    },

                    meta => return Err(syn::Error::new(
                        meta.span(), "expected `rename = \"...\"`"
                    ))
                }
            }
        }

        Ok(rename)
    }

    pub(crate) fn parse(item: proc_macro2::TokenStream) -> syn::Result<Self> {
        let input: syn::DeriveInput = syn::parse2(item)?;

        let fields = match input.data {
            syn::Data::Struct(s) => match s.fields {
                syn::Fields::Named(fields) => fields,
                _ => return Err(syn::Error::new(
                    s.struct_token.span(), "expected named fields"
                ))
            },

            syn::Data::Enum(e) => return Err(syn::Error::new(
                e.enum_token.span(), "expected struct"
            )),

            syn::Data::Union(u) => return Err(syn::Error::new(
                u.union_token.span(), "expected struct"
            ))
        };

        let ty = fields.named.first().map(|field| field.ty.clone()).ok_or_else(
            || syn::Error::new(fields.brace_token.span, "expected at least one field")
        )?;
        let expected_ty = quote::quote!(#ty).to_string();

        let mut members: Vec<super::Member> = Vec::with_capacity(fields.named.len());
        for field in fields.named {
            let field_ty = &field.ty;
            if quote::quote!(#field_ty).to_string() != expected_ty {
                return Err(syn::Error::new(
                    field_ty.span(), "expected all fields to share the type of the first field"
                ));
            }

            let ident = field.ident.ok_or_else(
                || syn::Error::new(field.ty.span(), "expected named field")
            )?;

            let name = match Self::parse_rename(&field.attrs)? {
                Some(name) => name,
                None => syn::LitStr::new(&ident.unraw().to_string(), ident.span())
            };

            if members.iter().any(|member| member.name.value() == name.value()) {
                return Err(syn::Error::new(
                    name.span(), format!("duplicate member name `{}`", name.value())
                ));
            }

            members.push(super::Member { ident, name });
        }

        Ok(Self {
            ident: input.ident,
            generics: input.generics,
            ty,
            members
        })
    }
}
