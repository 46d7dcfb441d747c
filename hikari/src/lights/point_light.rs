use super::{Light, LightSample};
use crate::math::{Point3, Spectrum};

/// A light that shines from a single point with no falloff.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    p: Point3<f64>,
    i: Spectrum<f64>,
}

impl PointLight {
    /// Creates a new `PointLight` at `p` with intensity `i`.
    pub fn new(p: Point3<f64>, i: Spectrum<f64>) -> Self {
        Self { p, i }
    }

    pub fn position(&self) -> Point3<f64> {
        self.p
    }

    pub fn intensity(&self) -> Spectrum<f64> {
        self.i
    }
}

impl Light for PointLight {
    fn sample_li(&self, p: Point3<f64>) -> LightSample {
        let to_light = self.p - p;
        let dist = to_light.len();
        let l = if dist > 0.0 { to_light / dist } else { to_light };

        LightSample {
            l,
            dist,
            li: self.i,
        }
    }
}
