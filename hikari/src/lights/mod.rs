mod point_light;

pub use point_light::PointLight;

use std::fmt::Debug;

use crate::math::{Point3, Spectrum, Vec3};

/// Sample from a light source for visibility testing and shading
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightSample {
    /// Normalized direction from the shaded point towards the light.
    pub l: Vec3<f64>,
    /// Distance from the shaded point to the light.
    pub dist: f64,
    /// Incident intensity.
    pub li: Spectrum<f64>,
}

pub trait Light: Send + Sync + Debug {
    /// Returns a [LightSample] from `p` to this `Light`.
    fn sample_li(&self, p: Point3<f64>) -> LightSample;
}
