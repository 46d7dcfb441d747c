use std::sync::Arc;

use crate::{
    error::Result,
    intersection::{sort_intersections, Intersection},
    lights::{Light, PointLight},
    materials::Material,
    math::{transforms::scale, Point3, Ray, Spectrum},
    scene::Scene,
    shapes::Sphere,
};

/// Everything a ray can interact with
#[derive(Debug)]
pub struct World {
    pub scene: Scene,
    pub lights: Vec<Arc<dyn Light>>,
    /// Colour of rays that miss every object.
    pub background: Spectrum<f64>,
}

impl World {
    pub fn new(scene: Scene, lights: Vec<Arc<dyn Light>>) -> Self {
        Self {
            scene,
            lights,
            background: Spectrum::zeros(),
        }
    }

    /// Returns all hits of `ray` on the top-level objects in ascending order.
    pub fn intersect(&self, ray: &Ray<f64>, eps: f64) -> Vec<Intersection> {
        let mut xs = Vec::new();
        for &id in self.scene.objects() {
            self.scene.intersect(id, ray, eps, &mut xs);
        }
        sort_intersections(&mut xs);
        xs
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Scene::new(), Vec::new())
    }
}

/// Two concentric spheres lit from the upper left.
///
/// The outer unit sphere is greenish, the inner one is scaled to half size.
pub fn default_world() -> Result<World> {
    let mut scene = Scene::new();

    let s1 = scene.add(Sphere::new());
    scene.set_material(
        s1,
        Material {
            colour: Spectrum::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Material::default()
        },
    )?;
    scene.add_object(s1)?;

    let s2 = scene.add(Sphere::new());
    scene.set_transform(s2, scale(0.5, 0.5, 0.5))?;
    scene.add_object(s2)?;

    let light = PointLight::new(Point3::new(-10.0, 10.0, -10.0), Spectrum::ones());
    Ok(World::new(scene, vec![Arc::new(light)]))
}
