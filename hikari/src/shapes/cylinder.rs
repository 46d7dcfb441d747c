use super::{intersect_caps, HeightBounds, Hit, Shape};
use crate::{
    error::Result,
    math::{Normal, Point2, Point3, Ray},
};

/// A unit-radius cylinder around the y-axis
#[derive(Copy, Clone, Debug, Default)]
pub struct Cylinder {
    bounds: HeightBounds,
}

impl Cylinder {
    /// Creates an infinite open `Cylinder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Cylinder` between `minimum` and `maximum`, capped if `closed`.
    pub fn truncated(minimum: f64, maximum: f64, closed: bool) -> Result<Self> {
        Ok(Self {
            bounds: HeightBounds::new(minimum, maximum, closed)?,
        })
    }

    pub fn bounds(&self) -> &HeightBounds {
        &self.bounds
    }
}

impl Shape for Cylinder {
    fn intersect(&self, ray: &Ray<f64>, eps: f64) -> Vec<Hit> {
        let mut hits = Vec::new();

        let a = ray.d.x * ray.d.x + ray.d.z * ray.d.z;
        // Rays parallel to the axis can only hit the caps
        if a.abs() >= eps {
            let b = 2.0 * (ray.o.x * ray.d.x + ray.o.z * ray.d.z);
            let c = ray.o.x * ray.o.x + ray.o.z * ray.o.z - 1.0;
            let discriminant = b * b - 4.0 * a * c;
            if discriminant >= 0.0 {
                let root = discriminant.sqrt();
                for t in [(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)] {
                    if self.bounds.contains(ray.o.y + t * ray.d.y) {
                        hits.push(Hit::new(t));
                    }
                }
            }
        }

        intersect_caps(&self.bounds, ray, eps, |_| 1.0, &mut hits);

        hits
    }

    fn normal(&self, p: Point3<f64>, _uv: Option<Point2<f64>>, eps: f64) -> Normal<f64> {
        let dist = p.x * p.x + p.z * p.z;

        if dist < 1.0 && p.y >= self.bounds.maximum - eps {
            Normal::new(0.0, 1.0, 0.0)
        } else if dist < 1.0 && p.y <= self.bounds.minimum + eps {
            Normal::new(0.0, -1.0, 0.0)
        } else {
            Normal::new(p.x, 0.0, p.z)
        }
    }
}
