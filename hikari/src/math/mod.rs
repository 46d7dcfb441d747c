mod common;
mod matrix;
mod matrix_n;
mod normal;
mod point;
mod ray;
mod spectrum;
mod transform;
pub mod transforms;
mod vector;

pub use common::{Extrema, FloatValueType, ValueType};
pub use matrix::Matrix4x4;
pub use matrix_n::MatrixN;
pub use normal::Normal;
pub use point::{Point2, Point3};
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use transform::Transform;
pub use vector::{Vec3, Vec4};
