use hikari_derive::{
    impl_spectrum, AbsDiffEq, Add, AddAssign, Div, DivScalar, Index, IndexMut, Mul, MulAssign,
    MulAssignScalar, MulScalar, RelativeEq, Sub,
};

use super::common::ValueType;

/// A colour stored as linear RGB
///
/// Products between two spectra are component-wise.
#[impl_spectrum]
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    AbsDiffEq,
    RelativeEq,
    Index,
    IndexMut,
    Add,
    Sub,
    Mul,
    Div,
    MulScalar,
    DivScalar,
    AddAssign,
    MulAssign,
    MulAssignScalar,
)]
pub struct Spectrum<T>
where
    T: ValueType,
{
    pub r: T,
    pub g: T,
    pub b: T,
}
