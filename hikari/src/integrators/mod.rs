pub mod whitted;

pub use whitted::Whitted;

use crate::{
    error::Result,
    math::{Ray, Spectrum},
    world::World,
};

pub type WhittedParams = whitted::Params;

// Public interface for scene integrators.
pub trait Integrator {
    /// Evaluates the incoming radiance along `ray` with `remaining` bounces left.
    fn li(&self, ray: &Ray<f64>, world: &World, remaining: u32) -> Result<Spectrum<f64>>;

    /// Returns the recursion budget of primary rays.
    fn max_depth(&self) -> u32;
}
