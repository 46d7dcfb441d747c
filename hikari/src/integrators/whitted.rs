use serde::{Deserialize, Serialize};

use super::Integrator;
use crate::{
    error::Result,
    interaction::SurfaceInteraction,
    intersection::hit,
    lights::Light,
    materials::{lighting, schlick},
    math::{Point3, Ray, Spectrum, Vec3},
    world::World,
};

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Params {
    /// Bounces evaluated for reflection and refraction.
    pub max_depth: u32,
    /// Threshold for parallel tests and the bias of secondary ray origins.
    pub epsilon: f64,
    pub shadows: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_depth: 5,
            epsilon: 1e-4,
            shadows: true,
        }
    }
}

/// Recursive ray tracer with Phong direct lighting, hard shadows and perfect
/// reflection and refraction.
pub struct Whitted {
    params: Params,
}

impl Whitted {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the colour seen along `ray`, the background if nothing is hit.
    pub fn colour_at(&self, world: &World, ray: &Ray<f64>, remaining: u32) -> Result<Spectrum<f64>> {
        let xs = world.intersect(ray, self.params.epsilon);
        match hit(&xs) {
            Some(i) => {
                let si = SurfaceInteraction::new(&world.scene, &xs, i, ray, self.params.epsilon)?;
                self.shade_hit(world, &si, remaining)
            }
            None => Ok(world.background),
        }
    }

    /// Returns the full colour at a prepared hit.
    pub fn shade_hit(
        &self,
        world: &World,
        si: &SurfaceInteraction,
        remaining: u32,
    ) -> Result<Spectrum<f64>> {
        let material = world.scene.material(si.shape)?;
        let object_p = world.scene.world_to_object(si.shape, si.over_p);
        let surface_colour = material.colour_at(object_p);

        let mut surface = Spectrum::zeros();
        for light in &world.lights {
            let sample = light.sample_li(si.over_p);
            let in_shadow = self.is_shadowed(world, si.over_p, light.as_ref());
            surface += lighting(material, surface_colour, &sample, si.wo, si.n, in_shadow);
        }

        let reflected = self.reflected_colour(world, si, remaining)?;
        let refracted = self.refracted_colour(world, si, remaining)?;

        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = schlick(si);
            Ok(surface + reflected * reflectance + refracted * (1.0 - reflectance))
        } else {
            Ok(surface + reflected + refracted)
        }
    }

    /// Checks if something that casts shadows is between `p` and `light`.
    pub fn is_shadowed(&self, world: &World, p: Point3<f64>, light: &dyn Light) -> bool {
        if !self.params.shadows {
            return false;
        }

        let sample = light.sample_li(p);
        let ray = Ray::new(p, sample.l);
        world
            .intersect(&ray, self.params.epsilon)
            .iter()
            .filter(|x| x.t >= 0.0 && x.t < sample.dist)
            .any(|x| {
                world
                    .scene
                    .material(x.shape)
                    .map_or(true, |m| m.casts_shadow)
            })
    }

    pub fn reflected_colour(
        &self,
        world: &World,
        si: &SurfaceInteraction,
        remaining: u32,
    ) -> Result<Spectrum<f64>> {
        let reflective = world.scene.material(si.shape)?.reflective;
        if reflective == 0.0 || remaining == 0 {
            return Ok(Spectrum::zeros());
        }

        let ray = Ray::new(si.over_p, si.reflect);
        Ok(self.colour_at(world, &ray, remaining - 1)? * reflective)
    }

    pub fn refracted_colour(
        &self,
        world: &World,
        si: &SurfaceInteraction,
        remaining: u32,
    ) -> Result<Spectrum<f64>> {
        let transparency = world.scene.material(si.shape)?.transparency;
        if transparency == 0.0 || remaining == 0 {
            return Ok(Spectrum::zeros());
        }

        // Snell's law
        let n_ratio = si.n1 / si.n2;
        let cos_i = si.wo.dot_n(si.n);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            // Total internal reflection
            return Ok(Spectrum::zeros());
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let d = Vec3::from(si.n) * (n_ratio * cos_i - cos_t) - si.wo * n_ratio;
        let ray = Ray::new(si.under_p, d);
        Ok(self.colour_at(world, &ray, remaining - 1)? * transparency)
    }
}

impl Integrator for Whitted {
    fn li(&self, ray: &Ray<f64>, world: &World, remaining: u32) -> Result<Spectrum<f64>> {
        self.colour_at(world, ray, remaining)
    }

    fn max_depth(&self) -> u32 {
        self.params.max_depth
    }
}
