use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::target::Target;

/// `Index<usize>` or `IndexMut<usize>` in declaration order of the components.
pub fn derive(item: &DeriveInput, mutable: bool) -> syn::Result<TokenStream> {
    let target = Target::parse(item)?;
    let param = &target.param;
    let ident = &target.ident;

    let arms = target
        .fields
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if mutable {
                quote!(#i => &mut self.#c)
            } else {
                quote!(#i => &self.#c)
            }
        })
        .collect::<Vec<_>>();
    let fallback = quote! {
        _ => panic!("{} has no component {}", stringify!(#ident), component)
    };

    Ok(if mutable {
        target.impl_block(
            Some(quote!(std::ops::IndexMut<usize>)),
            quote! {
                fn index_mut(&mut self, component: usize) -> &mut Self::Output {
                    match component {
                        #(#arms,)*
                        #fallback
                    }
                }
            },
        )
    } else {
        target.impl_block(
            Some(quote!(std::ops::Index<usize>)),
            quote! {
                type Output = #param;

                fn index(&self, component: usize) -> &Self::Output {
                    match component {
                        #(#arms,)*
                        #fallback
                    }
                }
            },
        )
    })
}
