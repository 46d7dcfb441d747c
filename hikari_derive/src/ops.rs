use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    parse::{ParseStream, Parser},
    DeriveInput, Ident,
};

use crate::target::Target;

/// An operator trait named like `Add`, `SubAssign` or `MulScalar`
///
/// The `Scalar` suffix is ours: it marks ops where the right hand side is the
/// component type instead of another value of the same type.
struct Op {
    trait_ident: Ident,
    method: Ident,
    scalar: bool,
    assign: bool,
}

impl Op {
    fn parse(name: &str) -> Self {
        let (trait_name, scalar) = match name.strip_suffix("Scalar") {
            Some(trait_name) => (trait_name, true),
            None => (name, false),
        };
        let (method, assign) = match trait_name.strip_suffix("Assign") {
            Some(base) => (format!("{}_assign", base.to_lowercase()), true),
            None => (trait_name.to_lowercase(), false),
        };

        Self {
            trait_ident: format_ident!("{}", trait_name),
            method: format_ident!("{}", method),
            scalar,
            assign,
        }
    }
}

/// Applies `op` component-wise between the target and `rhs`.
///
/// Assign ops have no `output`.
fn component_op(
    target: &Target,
    op: &Op,
    rhs: TokenStream,
    output: Option<&Ident>,
) -> TokenStream {
    let Op {
        trait_ident,
        method,
        scalar,
        ..
    } = op;

    let components = target.each(|c| {
        if *scalar {
            quote!(self.#c.#method(rhs))
        } else {
            quote!(self.#c.#method(rhs.#c))
        }
    });
    let rhs_check = if *scalar {
        quote!()
    } else {
        quote!(debug_assert!(!rhs.has_nans());)
    };

    let body = match output {
        Some(output) => {
            let output_ty = target.sibling(output);
            quote! {
                type Output = #output_ty;

                #[inline]
                fn #method(self, rhs: #rhs) -> Self::Output {
                    debug_assert!(!self.has_nans());
                    #rhs_check

                    #output::new(#(#components),*)
                }
            }
        }
        None => quote! {
            #[inline]
            fn #method(&mut self, rhs: #rhs) {
                debug_assert!(!self.has_nans());
                #rhs_check

                #(#components;)*
            }
        },
    };

    target.impl_block(Some(quote!(std::ops::#trait_ident<#rhs>)), body)
}

pub fn derive(item: &DeriveInput, name: &str) -> syn::Result<TokenStream> {
    let target = Target::parse(item)?;
    let op = Op::parse(name);

    let rhs = if op.scalar {
        let param = &target.param;
        quote!(#param)
    } else {
        target.ty()
    };
    let output = if op.assign {
        None
    } else {
        Some(&target.ident)
    };

    Ok(component_op(&target, &op, rhs, output))
}

pub fn neg(item: &DeriveInput) -> syn::Result<TokenStream> {
    let target = Target::parse(item)?.bounded(quote!(num::traits::Signed));
    let negated = target.each(|c| quote!(-self.#c));

    Ok(target.impl_block(
        Some(quote!(std::ops::Neg)),
        quote! {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                debug_assert!(!self.has_nans());

                Self::new(#(#negated),*)
            }
        },
    ))
}

fn idents(input: ParseStream) -> syn::Result<Vec<Ident>> {
    let mut ret = Vec::new();
    while !input.is_empty() {
        ret.push(input.parse()?);
    }
    Ok(ret)
}

/// `#[vec_op(Trait Rhs Output)]` or `#[vec_assign_op(Trait Rhs)]` on `item`
pub fn mixed(attr: TokenStream, item: &DeriveInput, assign: bool) -> syn::Result<TokenStream> {
    let args = idents.parse2(attr)?;

    let (usage, expected_len) = if assign {
        ("Expected 'Trait Rhs'", 2)
    } else {
        ("Expected 'Trait Rhs Output'", 3)
    };
    if args.len() != expected_len {
        return Err(syn::Error::new(Span::call_site(), usage));
    }

    let target = Target::parse(item)?;
    let op = Op::parse(&args[0].to_string());
    let rhs = target.sibling(&args[1]);

    Ok(component_op(&target, &op, rhs, args.get(2)))
}
