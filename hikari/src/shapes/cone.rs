use super::{intersect_caps, HeightBounds, Hit, Shape};
use crate::{
    error::Result,
    math::{Normal, Point2, Point3, Ray},
};

/// A double-napped cone around the y-axis with its apex at the origin
///
/// The radius at height `y` is `|y|`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Cone {
    bounds: HeightBounds,
}

impl Cone {
    /// Creates an infinite open `Cone`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Cone` between `minimum` and `maximum`, capped if `closed`.
    pub fn truncated(minimum: f64, maximum: f64, closed: bool) -> Result<Self> {
        Ok(Self {
            bounds: HeightBounds::new(minimum, maximum, closed)?,
        })
    }

    pub fn bounds(&self) -> &HeightBounds {
        &self.bounds
    }
}

impl Shape for Cone {
    fn intersect(&self, ray: &Ray<f64>, eps: f64) -> Vec<Hit> {
        let (o, d) = (ray.o, ray.d);
        let a = d.x * d.x - d.y * d.y + d.z * d.z;
        let b = 2.0 * (o.x * d.x - o.y * d.y + o.z * d.z);
        let c = o.x * o.x - o.y * o.y + o.z * o.z;

        let mut wall_times = Vec::with_capacity(2);
        if a.abs() < eps {
            // Parallel to one of the halves, at most one wall hit
            if b.abs() >= eps {
                wall_times.push(-c / (2.0 * b));
            }
        } else {
            let discriminant = b * b - 4.0 * a * c;
            if discriminant >= 0.0 {
                let root = discriminant.sqrt();
                let t0 = (-b - root) / (2.0 * a);
                let t1 = (-b + root) / (2.0 * a);
                wall_times.push(t0.min(t1));
                wall_times.push(t0.max(t1));
            }
        }

        let mut hits: Vec<Hit> = wall_times
            .into_iter()
            .filter(|t| self.bounds.contains(o.y + t * d.y))
            .map(Hit::new)
            .collect();

        intersect_caps(&self.bounds, ray, eps, f64::abs, &mut hits);

        hits
    }

    fn normal(&self, p: Point3<f64>, _uv: Option<Point2<f64>>, eps: f64) -> Normal<f64> {
        let dist = p.x * p.x + p.z * p.z;
        let HeightBounds {
            minimum, maximum, ..
        } = self.bounds;

        if dist < maximum * maximum && p.y >= maximum - eps {
            Normal::new(0.0, 1.0, 0.0)
        } else if dist < minimum * minimum && p.y <= minimum + eps {
            Normal::new(0.0, -1.0, 0.0)
        } else if dist == 0.0 {
            // Apex, where the wall normal vanishes
            Normal::new(0.0, 1.0, 0.0)
        } else {
            let y = if p.y > 0.0 { -dist.sqrt() } else { dist.sqrt() };
            Normal::new(p.x, y, p.z)
        }
    }
}
