use hikari_derive::*;

use super::{
    common::{FloatValueType, ValueType},
    normal::Normal,
    point::Point3,
};

/// A direction or offset in 3D space.
///
/// Translations don't affect vectors, see [`Point3`] for positions.
#[impl_vec]
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
    AddScalar,
    SubScalar,
    MulScalar,
    DivScalar,
    AddAssign,
    SubAssign,
    MulAssignScalar,
    DivAssignScalar,
)]
pub struct Vec3<T>
where
    T: ValueType,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A raw homogeneous tuple
///
/// `w` is `1` for points and `0` for vectors. Matrices operate on these when
/// the typed tuples aren't a fit.
#[impl_vec]
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
pub struct Vec4<T>
where
    T: ValueType,
{
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    #[inline]
    pub fn dot_n(&self, n: Normal<T>) -> T {
        self.dot(Vec3::from(n))
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Mirrors this incoming direction about `n`, which should be unit length.
    #[inline]
    pub fn reflected(&self, n: Normal<T>) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!n.has_nans());

        let n = Vec3::from(n);
        *self - n * (self.dot(n) + self.dot(n))
    }
}

impl<T> From<Normal<T>> for Vec3<T>
where
    T: ValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}

impl<T> From<Point3<T>> for Vec3<T>
where
    T: ValueType,
{
    /// The offset of `p` from the origin
    fn from(p: Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl<T> Vec4<T>
where
    T: ValueType,
{
    #[inline]
    pub fn point(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::one())
    }

    #[inline]
    pub fn vector(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::zero())
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.w == T::one()
    }

    #[inline]
    pub fn is_vector(&self) -> bool {
        self.w == T::zero()
    }

    /// Drops `w`.
    #[inline]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T> From<Point3<T>> for Vec4<T>
where
    T: ValueType,
{
    fn from(p: Point3<T>) -> Self {
        Self::point(p.x, p.y, p.z)
    }
}

impl<T> From<Vec3<T>> for Vec4<T>
where
    T: ValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::vector(v.x, v.y, v.z)
    }
}

impl<T> From<Vec4<T>> for Point3<T>
where
    T: ValueType,
{
    /// Divides through by `w` unless it is `0` or `1`.
    fn from(v: Vec4<T>) -> Self {
        if v.w == T::one() || v.w == T::zero() {
            Point3::new(v.x, v.y, v.z)
        } else {
            Point3::new(v.x / v.w, v.y / v.w, v.z / v.w)
        }
    }
}
