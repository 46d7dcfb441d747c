use crate::{
    error::Result,
    intersection::Intersection,
    math::{Normal, Point3, Ray, Vec3},
    scene::{Scene, ShapeId},
};

/// Shading state at a ray hit
#[derive(Copy, Clone, Debug)]
pub struct SurfaceInteraction {
    pub t: f64,
    pub shape: ShapeId,
    /// World space hit point.
    pub p: Point3<f64>,
    /// `p` nudged along `n` for rays leaving the surface.
    pub over_p: Point3<f64>,
    /// `p` nudged against `n` for rays entering the surface.
    pub under_p: Point3<f64>,
    /// Direction towards the ray origin.
    pub wo: Vec3<f64>,
    /// Normal facing `wo`.
    pub n: Normal<f64>,
    pub reflect: Vec3<f64>,
    /// Whether the hit is on the inside of the surface.
    pub inside: bool,
    /// Refractive index on the incoming side.
    pub n1: f64,
    /// Refractive index on the outgoing side.
    pub n2: f64,
}

impl SurfaceInteraction {
    /// Prepares shading at `xs[hit_index]`.
    ///
    /// `xs` has to hold all the hits of `ray` in ascending order, the refractive indices are
    /// resolved by tracking which shapes the ray is inside of before the hit.
    pub fn new(
        scene: &Scene,
        xs: &[Intersection],
        hit_index: usize,
        ray: &Ray<f64>,
        eps: f64,
    ) -> Result<Self> {
        let hit = xs[hit_index];
        let p = ray.point(hit.t);
        let wo = -ray.d;

        let surface_n = scene.normal_at(hit.shape, p, hit.uv, eps)?;
        let inside = surface_n.dot_v(wo) < 0.0;
        let n = surface_n.faced_towards(wo);

        let offset = Vec3::from(n) * eps;
        let (n1, n2) = refractive_indices(scene, xs, hit_index)?;

        Ok(Self {
            t: hit.t,
            shape: hit.shape,
            p,
            over_p: p + offset,
            under_p: p - offset,
            wo,
            n,
            reflect: ray.d.reflected(n),
            inside,
            n1,
            n2,
        })
    }
}

fn refractive_indices(scene: &Scene, xs: &[Intersection], hit_index: usize) -> Result<(f64, f64)> {
    let mut containers: Vec<ShapeId> = Vec::new();

    let outer_index = |containers: &[ShapeId]| -> Result<f64> {
        match containers.last() {
            Some(&s) => Ok(scene.material(s)?.refractive_index),
            None => Ok(1.0),
        }
    };

    let mut n1 = 1.0;
    for (i, x) in xs.iter().enumerate() {
        if i == hit_index {
            n1 = outer_index(&containers)?;
        }

        match containers.iter().position(|&s| s == x.shape) {
            Some(j) => {
                containers.remove(j);
            }
            None => containers.push(x.shape),
        }

        if i == hit_index {
            return Ok((n1, outer_index(&containers)?));
        }
    }

    Ok((n1, 1.0))
}
