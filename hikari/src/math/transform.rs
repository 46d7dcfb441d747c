use std::ops::Mul;

use super::{
    common::FloatValueType, matrix::Matrix4x4, normal::Normal, point::Point3, ray::Ray,
    vector::Vec3,
};
use crate::error::Result;

/// An invertible 4x4 transform that keeps its inverse around
///
/// Shapes go from world to object space with the inverse on every ray, so it is
/// computed once when the transform is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform<T>
where
    T: FloatValueType,
{
    m: Matrix4x4<T>,
    m_inv: Matrix4x4<T>,
}

impl<T> Transform<T>
where
    T: FloatValueType,
{
    /// Panics if `rows` is singular.
    pub fn new(rows: [[T; 4]; 4]) -> Self {
        Self::new_m(Matrix4x4::new(rows))
    }

    /// Panics if `m` is singular, use [`Transform::try_new`] for untrusted input.
    pub fn new_m(m: Matrix4x4<T>) -> Self {
        Self::new_full(m, m.inverted())
    }

    pub fn try_new(m: Matrix4x4<T>) -> Result<Self> {
        let m_inv = m.try_inverted()?;
        Ok(Self::new_full(m, m_inv))
    }

    /// `m_inv` has to be the inverse of `m`, this is not checked.
    pub fn new_full(m: Matrix4x4<T>, m_inv: Matrix4x4<T>) -> Self {
        debug_assert!(!m.has_nans());
        debug_assert!(!m_inv.has_nans());
        Self { m, m_inv }
    }

    pub fn m(&self) -> &Matrix4x4<T> {
        &self.m
    }

    pub fn m_inv(&self) -> &Matrix4x4<T> {
        &self.m_inv
    }

    pub fn inverted(&self) -> Self {
        Self {
            m: self.m_inv,
            m_inv: self.m,
        }
    }

    pub fn transposed(&self) -> Self {
        Self {
            m: self.m.transposed(),
            m_inv: self.m_inv.transposed(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.m == Matrix4x4::identity()
    }
}

impl<T> Default for Transform<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self {
            m: Matrix4x4::identity(),
            m_inv: Matrix4x4::identity(),
        }
    }
}

impl<'a, T> Mul<Point3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Point3<T>;

    fn mul(self, p: Point3<T>) -> Point3<T> {
        &self.m * p
    }
}

impl<'a, T> Mul<Vec3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        &self.m * v
    }
}

impl<'a, T> Mul<Normal<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Normal<T>;

    /// Uses the inverse transpose. The result isn't normalized.
    fn mul(self, n: Normal<T>) -> Normal<T> {
        // w = 0 drops the translation row of the transposed inverse
        Normal::from(&self.m_inv.transposed() * Vec3::from(n))
    }
}

impl<'a, 'b, T> Mul<&'b Ray<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Ray<T>;

    fn mul(self, ray: &'b Ray<T>) -> Ray<T> {
        &self.m * ray
    }
}

impl<'a, 'b, T> Mul<&'b Transform<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Transform<T>;

    /// `self * other` applies `other` first.
    fn mul(self, other: &'b Transform<T>) -> Transform<T> {
        Transform::new_full(&self.m * &other.m, &other.m_inv * &self.m_inv)
    }
}
