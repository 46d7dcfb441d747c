mod fresnel;
mod phong;

pub use fresnel::schlick;
pub use phong::lighting;

use std::sync::Arc;

use crate::{
    error::{Error, Result},
    math::{Point3, Spectrum},
    patterns::Pattern,
};

/// Surface description for the Phong model plus mirror and glass terms
#[derive(Clone, Debug)]
pub struct Material {
    /// Base colour, ignored when `pattern` is set.
    pub colour: Spectrum<f64>,
    pub pattern: Option<Arc<dyn Pattern>>,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    /// `0` is matte, `1` a perfect mirror.
    pub reflective: f64,
    pub transparency: f64,
    pub refractive_index: f64,
    /// Shapes with `false` are skipped by shadow rays.
    pub casts_shadow: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            colour: Spectrum::ones(),
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            casts_shadow: true,
        }
    }
}

impl Material {
    /// Fully transparent glass
    pub fn glass() -> Self {
        Self {
            transparency: 1.0,
            refractive_index: 1.5,
            ..Self::default()
        }
    }

    /// Returns this `Material` with `pattern` applied.
    pub fn with_pattern(mut self, pattern: Arc<dyn Pattern>) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Returns the surface colour at `p` given in the object space of the shaded shape.
    pub fn colour_at(&self, p: Point3<f64>) -> Spectrum<f64> {
        match &self.pattern {
            Some(pattern) => pattern.colour_at_object(p),
            None => self.colour,
        }
    }

    /// Checks that the coefficients are in range.
    pub fn validate(&self) -> Result<()> {
        let coefficients = [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
            ("shininess", self.shininess),
            ("reflective", self.reflective),
            ("transparency", self.transparency),
        ];
        for (name, value) in coefficients {
            if value < 0.0 || value.is_nan() {
                return Err(Error::InvalidArgument(format!(
                    "material {} should be non-negative, got {}",
                    name, value
                )));
            }
        }
        if self.refractive_index < 1.0 || self.refractive_index.is_nan() {
            return Err(Error::InvalidArgument(format!(
                "refractive index should be at least 1, got {}",
                self.refractive_index
            )));
        }
        Ok(())
    }
}
