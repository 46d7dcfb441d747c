use num::{
    cast::{FromPrimitive, ToPrimitive},
    traits::{Float, Num},
};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Scalars the math types can hold
pub trait ValueType:
    Num
    + Extrema
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + Copy
    + AddAssign
    + DivAssign
    + MulAssign
    + SubAssign
{
}

impl<T> ValueType for T where
    T: Num
        + Extrema
        + PartialOrd
        + ToPrimitive
        + FromPrimitive
        + Copy
        + AddAssign
        + DivAssign
        + MulAssign
        + SubAssign
{
}

/// Scalars that also support the transcendental functions transforms need
pub trait FloatValueType: ValueType + Float {}

impl<T> FloatValueType for T where T: ValueType + Float {}

/// `min` and `max` that work the same for integers and floats
///
/// Inputs are expected to be free of NaNs.
pub trait Extrema: PartialOrd + Copy {
    #[inline]
    fn lesser(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    #[inline]
    fn greater(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl<T> Extrema for T where T: PartialOrd + Copy {}
