mod cone;
mod cube;
mod cylinder;
mod plane;
mod sphere;
mod triangle;

pub use cone::Cone;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::{SmoothTriangle, Triangle};

use std::fmt::Debug;

use crate::{
    error::{Error, Result},
    math::{Normal, Point2, Point3, Ray},
};

/// A hit on a primitive in its object space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Time along the ray.
    pub t: f64,
    /// Barycentrics of the hit on a smooth triangle.
    pub uv: Option<Point2<f64>>,
}

impl Hit {
    pub fn new(t: f64) -> Self {
        Self { t, uv: None }
    }

    pub fn with_uv(t: f64, u: f64, v: f64) -> Self {
        Self {
            t,
            uv: Some(Point2::new(u, v)),
        }
    }
}

/// A primitive surface defined in its own object space.
///
/// Transforms, materials and nesting are handled by the [`Scene`](crate::scene::Scene) the
/// shape is added to.
pub trait Shape: Send + Sync + Debug {
    /// Intersects `ray`, given in object space, with this `Shape`.
    ///
    /// `eps` is the threshold for parallel and degenerate configurations. The hits are not
    /// sorted.
    fn intersect(&self, ray: &Ray<f64>, eps: f64) -> Vec<Hit>;

    /// Returns the object space normal at `p` on this `Shape`.
    ///
    /// `uv` carries the barycentrics of the hit for shapes that report them.
    fn normal(&self, p: Point3<f64>, uv: Option<Point2<f64>>, eps: f64) -> Normal<f64>;
}

/// Height limits along the y-axis for cylinders and cones
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeightBounds {
    pub minimum: f64,
    pub maximum: f64,
    /// Whether the ends are capped.
    pub closed: bool,
}

impl HeightBounds {
    pub fn new(minimum: f64, maximum: f64, closed: bool) -> Result<Self> {
        if minimum > maximum || minimum.is_nan() || maximum.is_nan() {
            return Err(Error::InvertedBounds { minimum, maximum });
        }
        Ok(Self {
            minimum,
            maximum,
            closed,
        })
    }

    /// Checks if `y` is strictly between the limits.
    fn contains(&self, y: f64) -> bool {
        self.minimum < y && y < self.maximum
    }
}

impl Default for HeightBounds {
    /// Infinite and open
    fn default() -> Self {
        Self {
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            closed: false,
        }
    }
}

/// Intersects `ray` with the end caps of `bounds`, where a cap at height `y` has `radius(y)`.
fn intersect_caps(
    bounds: &HeightBounds,
    ray: &Ray<f64>,
    eps: f64,
    radius: impl Fn(f64) -> f64,
    hits: &mut Vec<Hit>,
) {
    if !bounds.closed || ray.d.y.abs() < eps {
        return;
    }

    for y in [bounds.minimum, bounds.maximum] {
        let t = (y - ray.o.y) / ray.d.y;
        let x = ray.o.x + t * ray.d.x;
        let z = ray.o.z + t * ray.d.z;
        let r = radius(y);
        if x * x + z * z <= r * r {
            hits.push(Hit::new(t));
        }
    }
}
