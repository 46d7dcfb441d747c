use super::{Hit, Shape};
use crate::math::{Normal, Point2, Point3, Ray, Vec3};

/// A flat triangle
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    p1: Point3<f64>,
    p2: Point3<f64>,
    p3: Point3<f64>,
    e1: Vec3<f64>,
    e2: Vec3<f64>,
    n: Normal<f64>,
}

impl Triangle {
    pub fn new(p1: Point3<f64>, p2: Point3<f64>, p3: Point3<f64>) -> Self {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let n = e2.cross(e1);
        // Degenerate triangles are never hit so their normal is never used
        let n = if n.len_sqr() > 0.0 {
            Normal::from(n.normalized())
        } else {
            Normal::zeros()
        };

        Self {
            p1,
            p2,
            p3,
            e1,
            e2,
            n,
        }
    }

    pub fn points(&self) -> [Point3<f64>; 3] {
        [self.p1, self.p2, self.p3]
    }

    pub fn edges(&self) -> [Vec3<f64>; 2] {
        [self.e1, self.e2]
    }

    /// Returns the geometric normal.
    pub fn face_normal(&self) -> Normal<f64> {
        self.n
    }

    /// Möller-Trumbore, returns `(t, u, v)` of the hit.
    fn intersect_uv(&self, ray: &Ray<f64>, eps: f64) -> Option<(f64, f64, f64)> {
        let dir_cross_e2 = ray.d.cross(self.e2);
        let det = self.e1.dot(dir_cross_e2);
        if det.abs() < eps {
            return None;
        }

        let f = 1.0 / det;
        let p1_to_origin = ray.o - self.p1;
        let u = f * p1_to_origin.dot(dir_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let origin_cross_e1 = p1_to_origin.cross(self.e1);
        let v = f * ray.d.dot(origin_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        Some((f * self.e2.dot(origin_cross_e1), u, v))
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: &Ray<f64>, eps: f64) -> Vec<Hit> {
        self.intersect_uv(ray, eps)
            .map(|(t, _, _)| vec![Hit::new(t)])
            .unwrap_or_default()
    }

    fn normal(&self, _p: Point3<f64>, _uv: Option<Point2<f64>>, _eps: f64) -> Normal<f64> {
        self.n
    }
}

/// A triangle with vertex normals interpolated over its face
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SmoothTriangle {
    triangle: Triangle,
    n1: Normal<f64>,
    n2: Normal<f64>,
    n3: Normal<f64>,
}

impl SmoothTriangle {
    pub fn new(
        p1: Point3<f64>,
        p2: Point3<f64>,
        p3: Point3<f64>,
        n1: Normal<f64>,
        n2: Normal<f64>,
        n3: Normal<f64>,
    ) -> Self {
        Self {
            triangle: Triangle::new(p1, p2, p3),
            n1,
            n2,
            n3,
        }
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn normals(&self) -> [Normal<f64>; 3] {
        [self.n1, self.n2, self.n3]
    }
}

impl Shape for SmoothTriangle {
    fn intersect(&self, ray: &Ray<f64>, eps: f64) -> Vec<Hit> {
        self.triangle
            .intersect_uv(ray, eps)
            .map(|(t, u, v)| vec![Hit::with_uv(t, u, v)])
            .unwrap_or_default()
    }

    fn normal(&self, _p: Point3<f64>, uv: Option<Point2<f64>>, _eps: f64) -> Normal<f64> {
        match uv {
            Some(uv) => self.n2 * uv.x + self.n3 * uv.y + self.n1 * (1.0 - uv.x - uv.y),
            None => self.triangle.n,
        }
    }
}
