use super::{Hit, Shape};
use crate::math::{Normal, Point2, Point3, Ray};

/// An axis-aligned cube with corners at -1 and 1
#[derive(Copy, Clone, Debug, Default)]
pub struct Cube;

impl Cube {
    pub fn new() -> Self {
        Self
    }
}

/// Returns the times where a ray enters and exits the slab `[-1, 1]` on one axis.
fn check_axis(origin: f64, direction: f64, eps: f64) -> (f64, f64) {
    let tmin_numerator = -1.0 - origin;
    let tmax_numerator = 1.0 - origin;

    let (tmin, tmax) = if direction.abs() >= eps {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        // Parallel to the slab
        (
            f64::INFINITY.copysign(tmin_numerator),
            f64::INFINITY.copysign(tmax_numerator),
        )
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}

impl Shape for Cube {
    fn intersect(&self, ray: &Ray<f64>, eps: f64) -> Vec<Hit> {
        let (xtmin, xtmax) = check_axis(ray.o.x, ray.d.x, eps);
        let (ytmin, ytmax) = check_axis(ray.o.y, ray.d.y, eps);
        let (ztmin, ztmax) = check_axis(ray.o.z, ray.d.z, eps);

        let tmin = xtmin.max(ytmin).max(ztmin);
        let tmax = xtmax.min(ytmax).min(ztmax);
        if tmin > tmax {
            return Vec::new();
        }

        vec![Hit::new(tmin), Hit::new(tmax)]
    }

    fn normal(&self, p: Point3<f64>, _uv: Option<Point2<f64>>, _eps: f64) -> Normal<f64> {
        let abs = p.abs();
        let max_c = abs.x.max(abs.y).max(abs.z);

        if max_c == abs.x {
            Normal::new(p.x, 0.0, 0.0)
        } else if max_c == abs.y {
            Normal::new(0.0, p.y, 0.0)
        } else {
            Normal::new(0.0, 0.0, p.z)
        }
    }
}
