use crate::{math::Point2, scene::ShapeId};

/// A ray hit on a primitive in a [`Scene`](crate::scene::Scene).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Time along the ray.
    pub t: f64,
    /// The primitive that was hit.
    pub shape: ShapeId,
    /// Barycentrics for smooth triangles.
    pub uv: Option<Point2<f64>>,
}

impl Intersection {
    pub fn new(t: f64, shape: ShapeId) -> Self {
        Self {
            t,
            shape,
            uv: None,
        }
    }

    pub fn with_uv(t: f64, shape: ShapeId, u: f64, v: f64) -> Self {
        Self {
            t,
            shape,
            uv: Some(Point2::new(u, v)),
        }
    }
}

/// Sorts `xs` by ascending time.
pub fn sort_intersections(xs: &mut [Intersection]) {
    xs.sort_by(|a, b| a.t.total_cmp(&b.t));
}

/// Returns the index of the intersection with the lowest non-negative time.
///
/// `xs` doesn't need to be sorted.
pub fn hit(xs: &[Intersection]) -> Option<usize> {
    xs.iter()
        .enumerate()
        .filter(|(_, x)| x.t >= 0.0)
        .min_by(|(_, a), (_, b)| a.t.total_cmp(&b.t))
        .map(|(i, _)| i)
}
