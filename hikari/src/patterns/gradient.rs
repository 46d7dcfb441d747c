use super::{impl_pattern_common, Pattern};
use crate::math::{Point3, Spectrum, Transform};

/// Linear blend along x
///
/// Each unit interval blends from one colour to the next. With more than two colours the
/// segments follow each other and repeat.
#[derive(Clone, Debug)]
pub struct LinearGradient {
    colours: Vec<Spectrum<f64>>,
    transform: Transform<f64>,
}

impl_pattern_common!(LinearGradient);

impl Pattern for LinearGradient {
    fn transform(&self) -> &Transform<f64> {
        &self.transform
    }

    fn colour_at(&self, p: Point3<f64>) -> Spectrum<f64> {
        let segments = (self.colours.len() - 1) as i64;
        let floor = p.x.floor();
        let i = (floor as i64).rem_euclid(segments) as usize;

        let from = self.colours[i];
        let to = self.colours[i + 1];
        from + (to - from) * (p.x - floor)
    }
}
