//! Code generation for the small fixed-size math types in `hikari::math`.
//!
//! The generated code expects the `num` and `approx` crates and the
//! `hikari::math::ValueType` bound on the scalar type parameter.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod approx_eq;
mod index;
mod members;
mod ops;
mod target;

fn expand(result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    TokenStream::from(result.unwrap_or_else(|err| err.to_compile_error()))
}

/// Emits `item` unchanged followed by the generated code.
fn append(item: &DeriveInput, result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    expand(result.map(|generated| {
        quote! {
            #item
            #generated
        }
    }))
}

macro_rules! derive_op {
    ($tr:ident $fn_name:ident) => {
        #[proc_macro_derive($tr)]
        pub fn $fn_name(input: TokenStream) -> TokenStream {
            let item = parse_macro_input!(input as DeriveInput);
            expand(ops::derive(&item, stringify!($tr)))
        }
    };
}

derive_op!(Add add);
derive_op!(Sub sub);
derive_op!(Mul mul);
derive_op!(Div div);
derive_op!(AddAssign add_assign);
derive_op!(SubAssign sub_assign);
derive_op!(MulAssign mul_assign);
derive_op!(DivAssign div_assign);
derive_op!(AddScalar add_scalar);
derive_op!(SubScalar sub_scalar);
derive_op!(MulScalar mul_scalar);
derive_op!(DivScalar div_scalar);
derive_op!(AddAssignScalar add_assign_scalar);
derive_op!(SubAssignScalar sub_assign_scalar);
derive_op!(MulAssignScalar mul_assign_scalar);
derive_op!(DivAssignScalar div_assign_scalar);

#[proc_macro_derive(Neg)]
pub fn neg(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    expand(ops::neg(&item))
}

#[proc_macro_derive(Index)]
pub fn index(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    expand(index::derive(&item, false))
}

#[proc_macro_derive(IndexMut)]
pub fn index_mut(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    expand(index::derive(&item, true))
}

#[proc_macro_derive(AbsDiffEq)]
pub fn abs_diff_eq(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    expand(approx_eq::abs_diff_eq(&item))
}

#[proc_macro_derive(RelativeEq)]
pub fn relative_eq(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    expand(approx_eq::relative_eq(&item))
}

/// Adds `new`, `zeros`, `ones`, `has_nans`, `min`, `max`, `dot`, `len_sqr`, `len`,
/// `normalized` and `abs`.
#[proc_macro_attribute]
pub fn impl_vec(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    append(&item, members::vec(&item))
}

/// Same members as [`macro@impl_vec`], normals differ only in hand-written impls.
#[proc_macro_attribute]
pub fn impl_normal(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    append(&item, members::vec(&item))
}

/// Adds the shared members plus `dist_sqr`, `dist`, `lerp`, `floor`, `ceil` and `abs`.
#[proc_macro_attribute]
pub fn impl_point(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    append(&item, members::point(&item))
}

/// Adds the shared members plus `is_black` and `clamped`.
#[proc_macro_attribute]
pub fn impl_spectrum(_attr: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    append(&item, members::spectrum(&item))
}

/// Implements an operator between two different math types.
///
/// `#[vec_op(Sub Point3 Vec3)]` implements `Sub<Point3<T>>` for the annotated type with
/// `Vec3<T>` as the output.
#[proc_macro_attribute]
pub fn vec_op(attr: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    append(&item, ops::mixed(attr.into(), &item, false))
}

/// Implements an assign operator from a different math type.
///
/// `#[vec_assign_op(AddAssign Vec3)]` implements `AddAssign<Vec3<T>>` for the annotated type.
#[proc_macro_attribute]
pub fn vec_assign_op(attr: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    append(&item, ops::mixed(attr.into(), &item, true))
}
