pub mod camera;
mod error;
pub mod film;
pub mod integrators;
pub mod interaction;
pub mod intersection;
pub mod lights;
mod macros;
pub mod materials;
pub mod math;
pub mod patterns;
pub mod scene;
pub mod settings;
pub mod shapes;
pub mod world;

pub use error::{Error, Result};

#[doc(hidden)]
pub use log;
