use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a three component color model.
///
/// The fields are made public and the model gets a `new` constructor along
/// with conversions to and from a tuple of its components.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let (field_names, field_types): (Vec<_>, Vec<_>) = input
        .fields
        .iter()
        .map(|f| (f.ident.clone(), f.ty.clone()))
        .unzip();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];
    let type1 = &field_types[0];
    let type2 = &field_types[1];
    let type3 = &field_types[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its three components.
            pub const fn new(#field1: #type1, #field2: #type2, #field3: #type3) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components of this color as a tuple.
            pub const fn to_tuple(&self) -> (#type1, #type2, #type3) {
                (self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<(#type1, #type2, #type3)> for #struct_name {
            fn from(value: (#type1, #type2, #type3)) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
