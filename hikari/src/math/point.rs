use hikari_derive::*;

use super::{common::ValueType, vector::Vec3};

// Only the affine combinations are meaningful for points: point - point is a
// vector and point + vector a point. Scaling and point + point exist for
// weighted sums like barycentric interpolation.

/// Surface parameters of a hit, e.g. the barycentric `u`, `v` on a triangle.
#[impl_point]
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    AbsDiffEq,
    RelativeEq,
    Index,
    IndexMut,
    MulScalar,
    DivScalar,
)]
pub struct Point2<T>
where
    T: ValueType,
{
    pub x: T,
    pub y: T,
}

/// A position in 3D space.
#[impl_point]
#[vec_op(Add Vec3 Point3)]
#[vec_op(Add Point3 Point3)]
#[vec_op(Sub Vec3 Point3)]
#[vec_op(Sub Point3 Vec3)]
#[vec_assign_op(AddAssign Vec3)]
#[vec_assign_op(SubAssign Vec3)]
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    AbsDiffEq,
    RelativeEq,
    Index,
    IndexMut,
    DivScalar,
    MulScalar,
    DivAssignScalar,
    MulAssignScalar,
)]
pub struct Point3<T>
where
    T: ValueType,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> From<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    /// The point at offset `v` from the origin
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
