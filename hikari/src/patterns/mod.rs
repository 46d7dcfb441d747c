mod checker;
mod gradient;
mod ring;
mod stripes;

pub use checker::CheckerPattern;
pub use gradient::LinearGradient;
pub use ring::RingPattern;
pub use stripes::Stripes;

use std::fmt::Debug;

use crate::{
    error::{Error, Result},
    math::{Point3, Spectrum, Transform},
};

/// A colour function over space
///
/// Patterns are shared between materials through `Arc<dyn Pattern>`.
pub trait Pattern: Send + Sync + Debug {
    /// Returns the pattern-to-object [`Transform`] of this `Pattern`.
    fn transform(&self) -> &Transform<f64>;

    /// Evaluates this `Pattern` at `p` given in pattern space.
    fn colour_at(&self, p: Point3<f64>) -> Spectrum<f64>;

    /// Evaluates this `Pattern` at `p` given in the object space of the shape it's applied to.
    fn colour_at_object(&self, p: Point3<f64>) -> Spectrum<f64> {
        self.colour_at(self.transform().m_inv() * p)
    }
}

fn check_colours(colours: &[Spectrum<f64>]) -> Result<()> {
    if colours.len() < 2 {
        Err(Error::InvalidArgument(format!(
            "patterns need at least 2 colours, got {}",
            colours.len()
        )))
    } else {
        Ok(())
    }
}

/// Picks the colour for band `band`, wrapping around in both directions.
fn band_colour(colours: &[Spectrum<f64>], band: f64) -> Spectrum<f64> {
    let i = (band as i64).rem_euclid(colours.len() as i64);
    colours[i as usize]
}

macro_rules! impl_pattern_common {
    ($pattern:ident) => {
        impl $pattern {
            /// Creates a new pattern that cycles through `colours`.
            pub fn new(colours: Vec<crate::math::Spectrum<f64>>) -> crate::error::Result<Self> {
                super::check_colours(&colours)?;
                Ok(Self {
                    colours,
                    transform: crate::math::Transform::default(),
                })
            }

            /// Returns this pattern with `transform` as its pattern-to-object transform.
            pub fn with_transform(mut self, transform: crate::math::Transform<f64>) -> Self {
                self.transform = transform;
                self
            }

            pub fn colours(&self) -> &[crate::math::Spectrum<f64>] {
                &self.colours
            }
        }

        impl Default for $pattern {
            /// White and black
            fn default() -> Self {
                Self {
                    colours: vec![
                        crate::math::Spectrum::ones(),
                        crate::math::Spectrum::zeros(),
                    ],
                    transform: crate::math::Transform::default(),
                }
            }
        }
    };
}
pub(crate) use impl_pattern_common;
