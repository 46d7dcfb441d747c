use super::{common::FloatValueType, point::Point3, vector::Vec3};

/// A half-line `o + t * d`
///
/// `d` is left unnormalized when a ray is moved into object space, which keeps
/// `t` comparable between the spaces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    pub o: Point3<T>,
    pub d: Vec3<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    pub fn new(o: Point3<T>, d: Vec3<T>) -> Self {
        let ret = Self { o, d };
        debug_assert!(!ret.has_nans());
        ret
    }

    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Position at distance `t` in units of `d`.
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }
}
