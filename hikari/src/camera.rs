use std::time::Instant;

use crate::{
    error::{Error, Result},
    film::Film,
    hikari_info, hikari_trace,
    integrators::Integrator,
    math::{Point3, Ray, Transform, Vec3},
    world::World,
};

/// A pinhole camera looking down -z from the origin of its own space
///
/// The image plane sits one unit in front of the camera and `fov` spans its longer side.
#[derive(Clone, Debug)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    fov: f64,
    world_to_camera: Transform<f64>,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// Creates a new `Camera` with a `hsize`x`vsize` image and a field of view of `fov` radians.
    pub fn new(hsize: usize, vsize: usize, fov: f64) -> Result<Self> {
        if hsize == 0 || vsize == 0 {
            return Err(Error::InvalidArgument(format!(
                "camera resolution should be non-zero, got {}x{}",
                hsize, vsize
            )));
        }
        if !(fov > 0.0 && fov < std::f64::consts::PI) {
            return Err(Error::InvalidArgument(format!(
                "field of view should be in (0, pi), got {}",
                fov
            )));
        }

        let half_view = (fov / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Ok(Self {
            hsize,
            vsize,
            fov,
            world_to_camera: Transform::default(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as f64,
        })
    }

    /// Returns this `Camera` with `transform` as its view transform.
    pub fn with_transform(mut self, transform: Transform<f64>) -> Self {
        self.world_to_camera = transform;
        self
    }

    /// Sets the view transform, mapping world space to camera space.
    pub fn set_transform(&mut self, transform: Transform<f64>) {
        self.world_to_camera = transform;
    }

    pub fn transform(&self) -> &Transform<f64> {
        &self.world_to_camera
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// World space size of a pixel on the image plane.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Returns the world space ray through the center of pixel (`x`, `y`).
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Result<Ray<f64>> {
        if x >= self.hsize || y >= self.vsize {
            return Err(Error::InvalidPixel {
                x,
                y,
                width: self.hsize,
                height: self.vsize,
            });
        }

        // Image plane coordinates, +x is left as the camera looks down -z
        let x_offset = (x as f64 + 0.5) * self.pixel_size;
        let y_offset = (y as f64 + 0.5) * self.pixel_size;
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let camera_to_world = self.world_to_camera.m_inv();
        let pixel = camera_to_world * Point3::new(world_x, world_y, -1.0);
        let origin = camera_to_world * Point3::zeros();
        let direction: Vec3<f64> = (pixel - origin).normalized();

        Ok(Ray::new(origin, direction))
    }

    /// Renders `world` with `integrator` row by row.
    pub fn render(&self, world: &World, integrator: &dyn Integrator) -> Result<Film> {
        let render_start = Instant::now();

        let mut film = Film::new(self.hsize, self.vsize);
        for y in 0..self.vsize {
            for x in 0..self.hsize {
                let ray = self.ray_for_pixel(x, y)?;
                let colour = integrator.li(&ray, world, integrator.max_depth())?;
                film.write_pixel(x, y, colour)?;
            }
            hikari_trace!("Row {}/{} done", y + 1, self.vsize);
        }

        hikari_info!(
            "Rendered {}x{} in {:.2}s",
            self.hsize,
            self.vsize,
            render_start.elapsed().as_secs_f64()
        );

        Ok(film)
    }
}
