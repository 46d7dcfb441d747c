use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::target::Target;

pub fn abs_diff_eq(item: &DeriveInput) -> syn::Result<TokenStream> {
    let target = Target::parse(item)?;
    let param = target.param.clone();
    let target = target.bounded(quote!(approx::AbsDiffEq<Epsilon = #param>));

    let checks = target.each(|c| quote!(self.#c.abs_diff_eq(&other.#c, epsilon)));

    Ok(target.impl_block(
        Some(quote!(approx::AbsDiffEq)),
        quote! {
            type Epsilon = #param;

            fn default_epsilon() -> Self::Epsilon {
                <#param as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                #(#checks)&&*
            }
        },
    ))
}

pub fn relative_eq(item: &DeriveInput) -> syn::Result<TokenStream> {
    let target = Target::parse(item)?;
    let param = target.param.clone();
    let target =
        target.bounded(quote!(approx::RelativeEq + approx::AbsDiffEq<Epsilon = #param>));

    let checks =
        target.each(|c| quote!(self.#c.relative_eq(&other.#c, epsilon, max_relative)));

    Ok(target.impl_block(
        Some(quote!(approx::RelativeEq)),
        quote! {
            fn default_max_relative() -> Self::Epsilon {
                <#param as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                #(#checks)&&*
            }
        },
    ))
}
