use approx::AbsDiffEq;

use super::{common::FloatValueType, matrix::Matrix4x4};
use crate::error::{Error, Result};

/// A row-major matrix of any size.
///
/// Every operation that depends on the dimensions checks them and reports mismatches as errors.
/// Transforms use the fixed-size [`Matrix4x4`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixN<T>
where
    T: FloatValueType,
{
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> MatrixN<T>
where
    T: FloatValueType,
{
    /// Creates a new `MatrixN` from `rows * cols` values in row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidArgument(format!(
                "matrix dimensions must be non-zero, got {}x{}",
                rows, cols
            )));
        }
        if data.len() != rows * cols {
            return Err(Error::InvalidArgument(format!(
                "{}x{} matrix needs {} values, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a new `MatrixN` filled with zeroes.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, vec![T::zero(); rows * cols])
    }

    /// Creates a new `size`x`size` identity `MatrixN`.
    pub fn identity(size: usize) -> Result<Self> {
        let mut ret = Self::zeros(size, size)?;
        for i in 0..size {
            ret.data[i * size + i] = T::one();
        }
        Ok(ret)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            Err(Error::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        } else {
            Ok(row * self.cols + col)
        }
    }

    /// Returns the element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        Ok(self.data[self.index(row, col)?])
    }

    /// Sets the element at `row`, `col`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let i = self.index(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Returns the product `self * other`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch(
                self.rows, self.cols, other.rows, other.cols,
            ));
        }

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for row in 0..self.rows {
            for col in 0..other.cols {
                data.push((0..self.cols).fold(T::zero(), |acc, i| {
                    acc + self.data[row * self.cols + i] * other.data[i * other.cols + col]
                }));
            }
        }
        Self::new(self.rows, other.cols, data)
    }

    /// Returns the transpose of this `MatrixN`.
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Returns a copy of this `MatrixN` with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Self> {
        self.index(row, col)?;
        if self.rows < 2 || self.cols < 2 {
            return Err(Error::InvalidArgument(format!(
                "can't take a submatrix of a {}x{} matrix",
                self.rows, self.cols
            )));
        }

        let data = (0..self.rows)
            .filter(|&r| r != row)
            .flat_map(|r| {
                (0..self.cols)
                    .filter(move |&c| c != col)
                    .map(move |c| self.data[r * self.cols + c])
            })
            .collect();
        Self::new(self.rows - 1, self.cols - 1, data)
    }

    fn check_square(&self) -> Result<()> {
        if self.rows == self.cols {
            Ok(())
        } else {
            Err(Error::NotSquare(self.rows, self.cols))
        }
    }

    /// Returns the determinant of the submatrix without `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<T> {
        self.check_square()?;
        self.submatrix(row, col)?.determinant()
    }

    /// Returns the signed minor at `row`, `col`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    /// Returns the determinant using cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<T> {
        self.check_square()?;
        match self.rows {
            1 => Ok(self.data[0]),
            2 => Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]),
            _ => (0..self.cols).try_fold(T::zero(), |acc, col| {
                Ok(acc + self.data[col] * self.cofactor(0, col)?)
            }),
        }
    }

    /// Checks if this `MatrixN` is square with a non-zero determinant.
    pub fn is_invertible(&self) -> bool {
        matches!(self.determinant(), Ok(det) if det.abs() > T::epsilon())
    }

    /// Returns the inverse of this `MatrixN`.
    pub fn inverted(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det.abs() <= T::epsilon() {
            return Err(Error::SingularMatrix);
        }
        if self.rows == 1 {
            return Self::new(1, 1, vec![T::one() / det]);
        }

        let mut ret = Self::zeros(self.rows, self.cols)?;
        for row in 0..self.rows {
            for col in 0..self.cols {
                // Transposed
                ret.data[col * self.cols + row] = self.cofactor(row, col)? / det;
            }
        }
        Ok(ret)
    }
}

impl<T> From<Matrix4x4<T>> for MatrixN<T>
where
    T: FloatValueType,
{
    fn from(m: Matrix4x4<T>) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: m.m.iter().flatten().copied().collect(),
        }
    }
}

impl<T> TryFrom<&MatrixN<T>> for Matrix4x4<T>
where
    T: FloatValueType,
{
    type Error = Error;

    fn try_from(m: &MatrixN<T>) -> Result<Self> {
        if m.rows != 4 || m.cols != 4 {
            return Err(Error::DimensionMismatch(m.rows, m.cols, 4, 4));
        }

        let mut ret = Matrix4x4::zeros();
        for (i, &v) in m.data.iter().enumerate() {
            ret.m[i / 4][i % 4] = v;
        }
        Ok(ret)
    }
}

impl<T> AbsDiffEq for MatrixN<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
