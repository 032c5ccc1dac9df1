//! Contains code to generate the `enumtable::Record` implementation.

impl super::Record {
    /// Generates the `const FIELDS: &'static [&'static str]` member name list.
    fn generate_fields(&self) -> proc_macro2::TokenStream {
        let names = self.members.iter().map(|member| &member.name);

        quote::quote!(
            const FIELDS: &'static [&'static str] = &[#(#names),*];
        )
    }

    /// Generates a `fn values(&self) -> Vec<Self::Value>` implementation.
    fn generate_values(&self) -> proc_macro2::TokenStream {
        let idents = self.members.iter().map(|member| &member.ident);

        quote::quote!(
            #[inline]
            fn values(&self) -> ::std::vec::Vec<Self::Value> {
                ::std::vec![#(::core::clone::Clone::clone(&self.#idents)),*]
            }
        )
    }

    /// Generates a `fn value_mut(&mut self, index: usize) -> Option<&mut Self::Value>`
    /// implementation.
    fn generate_value_mut(&self) -> proc_macro2::TokenStream {
        let indices = (0..self.members.len()).map(proc_macro2::Literal::usize_unsuffixed);
        let idents = self.members.iter().map(|member| &member.ident);

        quote::quote!(
            #[inline]
            fn value_mut(&mut self, index: usize) -> ::core::option::Option<&mut Self::Value> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#idents),)*
                    _ => ::core::option::Option::None
                }
            }
        )
    }
}

/// Generates the user code for the parsed record.
impl core::convert::Into<proc_macro2::TokenStream> for super::Record {
    fn into(self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let ty = &self.ty;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let fields = self.generate_fields();
        let values = self.generate_values();
        let value_mut = self.generate_value_mut();

        quote::quote! {
            impl #impl_generics ::enumtable::Record for #ident #ty_generics #where_clause {
                type Value = #ty;

                #fields
                #values
                #value_mut
            }
        }
    }
}
