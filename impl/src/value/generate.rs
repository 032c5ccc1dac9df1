//! Contains code to generate the `enumtable::EnumValue` and `enumtable::AutoValue`
//! implementations.

impl super::Value {
    /// Generates an `enumtable::EnumValue` implementation which delegates the key and the validity
    /// check to the inner value.
    fn generate_enum_value(&self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let inner = &self.inner;

        quote::quote!(
            impl ::enumtable::EnumValue for #ident {
                type Key = <#inner as ::enumtable::EnumValue>::Key;

                #[inline(always)]
                fn key(&self) -> Self::Key {
                    ::enumtable::EnumValue::key(&self.0)
                }

                #[inline(always)]
                fn is_valid(&self) -> bool {
                    ::enumtable::EnumValue::is_valid(&self.0)
                }
            }
        )
    }

    /// Generates an `enumtable::AutoValue` implementation, but only for `u8` newtypes.
    fn generate_auto_value(&self) -> proc_macro2::TokenStream {
        if !crate::primitive::is_auto_value_primitive(&self.inner) {
            return proc_macro2::TokenStream::new();
        }

        let ident = &self.ident;

        quote::quote!(
            impl ::enumtable::AutoValue for #ident {
                #[inline(always)]
                fn from_index(index: u8) -> Self {
                    Self(index)
                }
            }
        )
    }
}

/// Generates the user code for the parsed value.
impl core::convert::Into<proc_macro2::TokenStream> for super::Value {
    fn into(self) -> proc_macro2::TokenStream {
        let enum_value = self.generate_enum_value();
        let auto_value = self.generate_auto_value();

        quote::quote! {
            #enum_value
            #auto_value
        }
    }
}
