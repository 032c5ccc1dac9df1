//! Contains primitive type related helper functions.

/// Returns the identifier of a plain, single segment type path like `u8` or `String`.
pub(crate) fn type_ident(ty: &syn::Type) -> Option<&syn::Ident> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path.path.get_ident(),
        syn::Type::Group(group) => type_ident(&group.elem),
        syn::Type::Paren(paren) => type_ident(&paren.elem),
        _ => None
    }
}

/// Auto-numbered members are limited to the `0..=255` range, so only `u8` qualifies.
pub(crate) fn is_auto_value_primitive(ty: &syn::Type) -> bool {
    type_ident(ty).map(|ident| ident == "u8").unwrap_or(false)
}
