use super::{Hit, Shape};
use crate::math::{Normal, Point2, Point3, Ray, Vec3};

/// A unit sphere at the origin
#[derive(Copy, Clone, Debug, Default)]
pub struct Sphere;

impl Sphere {
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray<f64>, _eps: f64) -> Vec<Hit> {
        let oc = Vec3::from(ray.o);
        let a = ray.d.len_sqr();
        let b = 2.0 * ray.d.dot(oc);
        let c = oc.len_sqr() - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Vec::new();
        }

        let root = discriminant.sqrt();
        vec![
            Hit::new((-b - root) / (2.0 * a)),
            Hit::new((-b + root) / (2.0 * a)),
        ]
    }

    fn normal(&self, p: Point3<f64>, _uv: Option<Point2<f64>>, _eps: f64) -> Normal<f64> {
        Normal::new(p.x, p.y, p.z)
    }
}
