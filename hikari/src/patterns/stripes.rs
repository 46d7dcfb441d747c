use super::{band_colour, impl_pattern_common, Pattern};
use crate::math::{Point3, Spectrum, Transform};

/// Bands along x
#[derive(Clone, Debug)]
pub struct Stripes {
    colours: Vec<Spectrum<f64>>,
    transform: Transform<f64>,
}

impl_pattern_common!(Stripes);

impl Pattern for Stripes {
    fn transform(&self) -> &Transform<f64> {
        &self.transform
    }

    fn colour_at(&self, p: Point3<f64>) -> Spectrum<f64> {
        band_colour(&self.colours, p.x.floor())
    }
}
