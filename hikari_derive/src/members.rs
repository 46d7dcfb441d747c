use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::target::Target;

/// Constructors, NaN checks and component-wise extrema shared by all the math types.
fn basics(target: &Target) -> TokenStream {
    let ident = &target.ident;
    let param = &target.param;

    let args = target.each(|c| quote!(#c: #param));
    let fields = target.each(|c| quote!(#c));
    let zeros = target.each(|c| quote!(#c: #param::zero()));
    let ones = target.each(|c| quote!(#c: #param::one()));
    let nan_checks = target.each(|c| quote!(self.#c != self.#c));
    let lesser = target.each(|c| quote!(#c: self.#c.lesser(other.#c)));
    let greater = target.each(|c| quote!(#c: self.#c.greater(other.#c)));

    let new_doc = format!("Creates a new `{}` from its components.", ident);

    quote! {
        #[doc = #new_doc]
        #[inline]
        pub fn new(#(#args),*) -> Self {
            let ret = Self { #(#fields),* };
            debug_assert!(!ret.has_nans());
            ret
        }

        #[inline]
        pub fn zeros() -> Self {
            Self { #(#zeros),* }
        }

        #[inline]
        pub fn ones() -> Self {
            Self { #(#ones),* }
        }

        /// Checks if any of the components is NaN.
        // NaN is the only value that isn't equal to itself
        #[allow(clippy::eq_op)]
        #[inline]
        pub fn has_nans(&self) -> bool {
            #(#nan_checks)||*
        }

        /// Component-wise minimum
        #[inline]
        pub fn min(&self, other: Self) -> Self {
            debug_assert!(!self.has_nans());
            debug_assert!(!other.has_nans());

            Self { #(#lesser),* }
        }

        /// Component-wise maximum
        #[inline]
        pub fn max(&self, other: Self) -> Self {
            debug_assert!(!self.has_nans());
            debug_assert!(!other.has_nans());

            Self { #(#greater),* }
        }
    }
}

fn abs(target: &Target) -> TokenStream {
    let target = target.bounded(quote!(num::traits::Signed));
    let components = target.each(|c| quote!(self.#c.abs()));

    target.impl_block(
        None,
        quote! {
            /// Returns the absolute value of each component.
            #[inline]
            pub fn abs(&self) -> Self {
                Self::new(#(#components),*)
            }
        },
    )
}

/// Members of directions: vectors and normals.
pub fn vec(item: &DeriveInput) -> syn::Result<TokenStream> {
    let target = Target::parse(item)?;
    let param = &target.param;
    let basics = basics(&target);
    let products = target.each(|c| quote!(self.#c * other.#c));

    let inherent = target.impl_block(
        None,
        quote! {
            #basics

            #[inline]
            pub fn dot(&self, other: Self) -> #param {
                debug_assert!(!self.has_nans());
                debug_assert!(!other.has_nans());

                #param::zero() #(+ #products)*
            }

            #[inline]
            pub fn len_sqr(&self) -> #param {
                self.dot(*self)
            }
        },
    );

    let float = target.bounded(quote!(num::Float)).impl_block(
        None,
        quote! {
            #[inline]
            pub fn len(&self) -> #param {
                self.len_sqr().sqrt()
            }

            /// Returns a unit length copy. Zero length input gives NaNs.
            #[inline]
            pub fn normalized(&self) -> Self {
                debug_assert!(!self.has_nans());

                *self / self.len()
            }
        },
    );

    let abs = abs(&target);

    Ok(quote! {
        #inherent
        #float
        #abs
    })
}

/// Members of positions.
pub fn point(item: &DeriveInput) -> syn::Result<TokenStream> {
    let target = Target::parse(item)?;
    let param = &target.param;
    let basics = basics(&target);
    let squares = target.each(|c| quote!((self.#c - other.#c) * (self.#c - other.#c)));
    let lerped = target.each(|c| quote!(self.#c + (other.#c - self.#c) * t));
    let floors = target.each(|c| quote!(self.#c.floor()));
    let ceils = target.each(|c| quote!(self.#c.ceil()));

    let inherent = target.impl_block(
        None,
        quote! {
            #basics

            #[inline]
            pub fn dist_sqr(&self, other: Self) -> #param {
                debug_assert!(!self.has_nans());
                debug_assert!(!other.has_nans());

                #param::zero() #(+ #squares)*
            }

            /// Moves from this point towards `other`, reaching it at `t == 1`.
            #[inline]
            pub fn lerp(&self, other: Self, t: #param) -> Self {
                debug_assert!(!self.has_nans());
                debug_assert!(!other.has_nans());

                Self::new(#(#lerped),*)
            }
        },
    );

    let float = target.bounded(quote!(num::Float)).impl_block(
        None,
        quote! {
            #[inline]
            pub fn dist(&self, other: Self) -> #param {
                self.dist_sqr(other).sqrt()
            }

            #[inline]
            pub fn floor(&self) -> Self {
                Self::new(#(#floors),*)
            }

            #[inline]
            pub fn ceil(&self) -> Self {
                Self::new(#(#ceils),*)
            }
        },
    );

    let abs = abs(&target);

    Ok(quote! {
        #inherent
        #float
        #abs
    })
}

/// Members of colours.
pub fn spectrum(item: &DeriveInput) -> syn::Result<TokenStream> {
    let target = Target::parse(item)?;
    let param = &target.param;
    let basics = basics(&target);
    let zero_checks = target.each(|c| quote!(self.#c == #param::zero()));
    let clamped = target.each(|c| quote!(self.#c.greater(low).lesser(high)));

    Ok(target.impl_block(
        None,
        quote! {
            #basics

            /// Checks if all the channels are zero.
            #[inline]
            pub fn is_black(&self) -> bool {
                debug_assert!(!self.has_nans());

                #(#zero_checks)&&*
            }

            /// Returns a copy with each channel clamped to `[low, high]`.
            #[inline]
            pub fn clamped(&self, low: #param, high: #param) -> Self {
                debug_assert!(!self.has_nans());

                Self::new(#(#clamped),*)
            }
        },
    ))
}
