use super::{band_colour, impl_pattern_common, Pattern};
use crate::math::{Point3, Spectrum, Transform};

/// Concentric rings around the y-axis
#[derive(Clone, Debug)]
pub struct RingPattern {
    colours: Vec<Spectrum<f64>>,
    transform: Transform<f64>,
}

impl_pattern_common!(RingPattern);

impl Pattern for RingPattern {
    fn transform(&self) -> &Transform<f64> {
        &self.transform
    }

    fn colour_at(&self, p: Point3<f64>) -> Spectrum<f64> {
        band_colour(&self.colours, (p.x * p.x + p.z * p.z).sqrt().floor())
    }
}
