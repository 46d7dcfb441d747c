use hikari_derive::*;

use super::{
    common::{FloatValueType, ValueType},
    vector::Vec3,
};

/// A surface normal
///
/// Normals aren't necessarily unit length. Unlike [`Vec3`] they transform by the
/// inverse transpose so they stay perpendicular under non-uniform scaling.
#[impl_normal]
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    AbsDiffEq,
    RelativeEq,
    Index,
    IndexMut,
    Neg,
    Add,
    Sub,
    MulScalar,
    DivScalar,
    AddAssign,
    SubAssign,
    MulAssignScalar,
    DivAssignScalar,
)]
pub struct Normal<T>
where
    T: ValueType,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Normal<T>
where
    T: FloatValueType,
{
    #[inline]
    pub fn dot_v(&self, v: Vec3<T>) -> T {
        Vec3::from(*self).dot(v)
    }

    /// Returns this normal flipped if needed to be on the same side as `v`.
    #[inline]
    pub fn faced_towards(&self, v: Vec3<T>) -> Self {
        if self.dot_v(v) < T::zero() {
            Self::new(-self.x, -self.y, -self.z)
        } else {
            *self
        }
    }
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: ValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
