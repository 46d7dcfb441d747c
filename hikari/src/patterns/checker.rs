use super::{band_colour, impl_pattern_common, Pattern};
use crate::math::{Point3, Spectrum, Transform};

/// Alternating unit cubes
#[derive(Clone, Debug)]
pub struct CheckerPattern {
    colours: Vec<Spectrum<f64>>,
    transform: Transform<f64>,
}

impl_pattern_common!(CheckerPattern);

impl Pattern for CheckerPattern {
    fn transform(&self) -> &Transform<f64> {
        &self.transform
    }

    fn colour_at(&self, p: Point3<f64>) -> Spectrum<f64> {
        let p = p.floor();
        band_colour(&self.colours, p.x + p.y + p.z)
    }
}
