use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

use super::{
    common::FloatValueType, point::Point3, ray::Ray, vector::Vec3, vector::Vec4,
};
use crate::error::{Error, Result};

/// A row-major 4x4 matrix for affine transforms
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        let mut ret = Self::zeros();
        for i in 0..4 {
            ret.m[i][i] = T::one();
        }
        ret
    }

    /// Creates a new `Matrix4x4` filled with zeroes.
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); 4]; 4],
        }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|t| t.is_nan())
    }

    /// Returns the `i`th row of this `Matrix4x4`.
    pub fn row(&self, i: usize) -> [T; 4] {
        self.m[i]
    }

    /// Returns the `i`th column of this `Matrix4x4`.
    pub fn col(&self, i: usize) -> [T; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        let mut ret = Self::zeros();
        for (row, values) in self.m.iter().enumerate() {
            for (col, &v) in values.iter().enumerate() {
                ret.m[col][row] = v;
            }
        }
        ret
    }

    /// Returns the determinant of the 3x3 matrix left after removing `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> T {
        debug_assert!(row < 4 && col < 4);

        let mut sub = [[T::zero(); 3]; 3];
        for (sub_row, r) in (0..4).filter(|&r| r != row).enumerate() {
            for (sub_col, c) in (0..4).filter(|&c| c != col).enumerate() {
                sub[sub_row][sub_col] = self.m[r][c];
            }
        }

        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }

    /// Returns the signed minor at `row`, `col`.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Returns the determinant of this `Matrix4x4` using cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::zero(), |acc, col| acc + self.m[0][col] * self.cofactor(0, col))
    }

    /// Checks if this `Matrix4x4` has an inverse.
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > T::epsilon()
    }

    /// Returns the inverse of this `Matrix4x4` or [`Error::SingularMatrix`].
    pub fn try_inverted(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() <= T::epsilon() {
            return Err(Error::SingularMatrix);
        }

        // Transposed cofactors over the determinant
        let mut ret = Self::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[col][row] = self.cofactor(row, col) / det;
            }
        }
        Ok(ret)
    }

    /// Returns the inverse of this `Matrix4x4`.
    ///
    /// Panics if the matrix is singular. Use [`Matrix4x4::try_inverted`] for input that is not
    /// known to be invertible.
    pub fn inverted(&self) -> Self {
        match self.try_inverted() {
            Ok(m) => m,
            Err(why) => panic!("Can't invert: {}", why),
        }
    }
}

impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'b Matrix4x4<T>) -> Matrix4x4<T> {
        let mut ret = Matrix4x4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = (0..4).fold(T::zero(), |acc, i| {
                    acc + self.m[row][i] * other.m[i][col]
                });
            }
        }
        ret
    }
}

impl<'a, T> Mul<Vec4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        let m = &self.m;
        let row = |r: usize| m[r][0] * v.x + m[r][1] * v.y + m[r][2] * v.z + m[r][3] * v.w;
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

impl<'a, T> Mul<Point3<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Point3<T>;

    fn mul(self, p: Point3<T>) -> Point3<T> {
        Point3::from(self * Vec4::from(p))
    }
}

impl<'a, T> Mul<Vec3<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        (self * Vec4::from(v)).xyz()
    }
}

impl<'a, T> Mul<&Ray<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Ray<T>;

    fn mul(self, ray: &Ray<T>) -> Ray<T> {
        Ray::new(self * ray.o, self * ray.d)
    }
}

impl<T> AbsDiffEq for Matrix4x4<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix4x4<T>
where
    T: FloatValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
