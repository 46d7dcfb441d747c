use super::{common::FloatValueType, matrix::Matrix4x4, point::Point3, vector::Vec3, Transform};
use crate::error::{Error, Result};

/// Builds an affine matrix from a linear 3x3 part and a translation.
fn affine<T>(linear: [[T; 3]; 3], offset: [T; 3]) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let mut m = Matrix4x4::identity();
    for (row, (linear, offset)) in m.m.iter_mut().zip(linear.iter().zip(offset)) {
        row[..3].copy_from_slice(linear);
        row[3] = offset;
    }
    m
}

/// Wraps a pure rotation, whose inverse is its transpose.
fn rotation_from<T>(linear: [[T; 3]; 3]) -> Transform<T>
where
    T: FloatValueType,
{
    let m = affine(linear, [T::zero(); 3]);
    Transform::new_full(m, m.transposed())
}

pub fn translation<T>(delta: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let (zero, one) = (T::zero(), T::one());
    let identity = [[one, zero, zero], [zero, one, zero], [zero, zero, one]];
    Transform::new_full(
        affine(identity, [delta.x, delta.y, delta.z]),
        affine(identity, [-delta.x, -delta.y, -delta.z]),
    )
}

/// Non-uniform scaling, all factors should be non-zero.
pub fn scale<T>(x: T, y: T, z: T) -> Transform<T>
where
    T: FloatValueType,
{
    debug_assert!(x != T::zero() && y != T::zero() && z != T::zero());

    let zero = T::zero();
    let diagonal = |x, y, z| affine([[x, zero, zero], [zero, y, zero], [zero, zero, z]], [zero; 3]);
    let one = T::one();
    Transform::new_full(diagonal(x, y, z), diagonal(one / x, one / y, one / z))
}

/// Rotation of `theta` radians around +x, counter-clockwise looking down the axis.
pub fn rotation_x<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (s, c) = theta.sin_cos();
    let (zero, one) = (T::zero(), T::one());
    rotation_from([[one, zero, zero], [zero, c, -s], [zero, s, c]])
}

pub fn rotation_y<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (s, c) = theta.sin_cos();
    let (zero, one) = (T::zero(), T::one());
    rotation_from([[c, zero, s], [zero, one, zero], [-s, zero, c]])
}

pub fn rotation_z<T>(theta: T) -> Transform<T>
where
    T: FloatValueType,
{
    let (s, c) = theta.sin_cos();
    let (zero, one) = (T::zero(), T::one());
    rotation_from([[c, -s, zero], [s, c, zero], [zero, zero, one]])
}

/// Rotation of `theta` radians around an arbitrary `axis` through the origin.
pub fn rotation<T>(theta: T, axis: Vec3<T>) -> Transform<T>
where
    T: FloatValueType,
{
    let Vec3 { x, y, z } = axis.normalized();
    let (s, c) = theta.sin_cos();
    let k = T::one() - c;
    rotation_from([
        [x * x * k + c, x * y * k - z * s, x * z * k + y * s],
        [x * y * k + z * s, y * y * k + c, y * z * k - x * s],
        [x * z * k - y * s, y * z * k + x * s, z * z * k + c],
    ])
}

/// Shear where e.g. `xy` moves x in proportion to y.
///
/// Fails if the factors flatten space, which leaves the matrix singular.
pub fn shearing<T>(xy: T, xz: T, yx: T, yz: T, zx: T, zy: T) -> Result<Transform<T>>
where
    T: FloatValueType,
{
    let one = T::one();
    Transform::try_new(affine(
        [[one, xy, xz], [yx, one, yz], [zx, zy, one]],
        [T::zero(); 3],
    ))
}

/// World-to-camera transform for an eye at `from` looking at `to`.
///
/// Fails if `from` and `to` coincide or `up` is parallel to the view direction.
pub fn view_transform<T>(from: Point3<T>, to: Point3<T>, up: Vec3<T>) -> Result<Transform<T>>
where
    T: FloatValueType,
{
    let forward = to - from;
    if forward.len_sqr() <= T::epsilon() || forward.cross(up).len_sqr() <= T::epsilon() {
        return Err(Error::InvalidArgument(
            "view direction is zero or parallel to up".to_string(),
        ));
    }

    let forward = forward.normalized();
    // left is only unit length when up is perpendicular to the view direction,
    // so the basis may be skewed and needs a real inverse
    let left = forward.cross(up.normalized());
    let true_up = left.cross(forward);
    let orientation = Transform::try_new(affine(
        [
            [left.x, left.y, left.z],
            [true_up.x, true_up.y, true_up.z],
            [-forward.x, -forward.y, -forward.z],
        ],
        [T::zero(); 3],
    ))?;

    Ok(&orientation * &translation(Vec3::zeros() - Vec3::from(from)))
}

/// Composes `transforms` so that the result applies them in the listed order.
pub fn chain<T>(transforms: &[Transform<T>]) -> Transform<T>
where
    T: FloatValueType,
{
    transforms
        .iter()
        .fold(Transform::default(), |acc, t| t * &acc)
}
