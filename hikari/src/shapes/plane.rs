use super::{Hit, Shape};
use crate::math::{Normal, Point2, Point3, Ray};

/// The xz-plane
#[derive(Copy, Clone, Debug, Default)]
pub struct Plane;

impl Plane {
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray<f64>, eps: f64) -> Vec<Hit> {
        // Parallel and coplanar rays both miss, an edge-on plane has no area
        if ray.d.y.abs() < eps {
            return Vec::new();
        }

        vec![Hit::new(-ray.o.y / ray.d.y)]
    }

    fn normal(&self, _p: Point3<f64>, _uv: Option<Point2<f64>>, _eps: f64) -> Normal<f64> {
        Normal::new(0.0, 1.0, 0.0)
    }
}
