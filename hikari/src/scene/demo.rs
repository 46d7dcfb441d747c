use std::{f64::consts::PI, sync::Arc};

use super::{CsgOp, Scene};
use crate::{
    camera::Camera,
    error::Result,
    lights::PointLight,
    materials::Material,
    math::{
        transforms::{chain, rotation_y, scale, translation, view_transform},
        Point3, Spectrum, Vec3,
    },
    patterns::{CheckerPattern, LinearGradient, RingPattern, Stripes},
    shapes::{Cone, Cube, Plane, Sphere},
    world::World,
};

/// Builds the built-in showcase scene rendered at `width`x`height`.
///
/// Checkered floor, a gradient cone, patterned spheres, a hollowed cube and a glass ball.
pub fn demo_scene(width: usize, height: usize) -> Result<(World, Camera)> {
    let mut scene = Scene::new();

    let checkers = Arc::new(CheckerPattern::new(vec![
        Spectrum::ones(),
        Spectrum::new(0.1, 0.3, 0.9),
    ])?);
    let gradient = Arc::new(
        LinearGradient::new(vec![
            Spectrum::new(0.34, 0.89, 0.89),
            Spectrum::new(0.31, 1.0, 0.44),
        ])?
        .with_transform(chain(&[
            scale(2.5, 1.0, 1.0),
            translation(Vec3::new(1.5, -1.0, -0.5)),
        ])),
    );
    let rings = Arc::new(
        RingPattern::new(vec![Spectrum::new(0.0, 0.0, 1.0), Spectrum::new(0.5, 0.0, 1.0)])?
            .with_transform(scale(0.2, 0.2, 0.2)),
    );
    let stripes = Arc::new(
        Stripes::new(vec![Spectrum::new(1.0, 0.65, 0.0), Spectrum::new(1.0, 1.0, 0.0)])?
            .with_transform(scale(0.25, 0.25, 0.25)),
    );

    let floor = scene.add(Plane::new());
    scene.set_material(
        floor,
        Material {
            reflective: 0.1,
            ..Material::default().with_pattern(checkers)
        },
    )?;
    scene.add_object(floor)?;

    let cone = scene.add(Cone::truncated(-1.0, 0.0, true)?);
    scene.set_transform(
        cone,
        chain(&[scale(0.75, 2.0, 0.75), translation(Vec3::new(-0.5, 2.0, 1.5))]),
    )?;
    scene.set_material(
        cone,
        Material {
            diffuse: 0.7,
            specular: 0.3,
            ..Material::default().with_pattern(gradient)
        },
    )?;
    scene.add_object(cone)?;

    let right = scene.add(Sphere::new());
    scene.set_transform(
        right,
        chain(&[scale(0.5, 0.5, 0.5), translation(Vec3::new(1.5, 0.5, -0.5))]),
    )?;
    scene.set_material(right, Material::default().with_pattern(rings))?;
    scene.add_object(right)?;

    let left = scene.add(Sphere::new());
    scene.set_transform(
        left,
        chain(&[scale(0.33, 0.33, 0.33), translation(Vec3::new(-1.5, 0.33, -0.75))]),
    )?;
    scene.set_material(left, Material::default().with_pattern(stripes))?;
    scene.add_object(left)?;

    // Cube with a sphere carved out of its front corner
    let cube = scene.add(Cube::new());
    let bite = scene.add(Sphere::new());
    scene.set_transform(
        bite,
        chain(&[scale(0.6, 0.6, 0.6), translation(Vec3::new(-0.6, 0.6, -0.6))]),
    )?;
    let hollow = scene.add_csg(CsgOp::Difference, cube, bite)?;
    scene.set_transform(
        hollow,
        chain(&[
            scale(0.5, 0.5, 0.5),
            rotation_y(PI / 5.0),
            translation(Vec3::new(1.75, 0.5, 1.5)),
        ]),
    )?;
    scene.set_material(
        hollow,
        Material {
            colour: Spectrum::new(0.9, 0.2, 0.2),
            specular: 0.4,
            ..Material::default()
        },
    )?;
    scene.add_object(hollow)?;

    let glass = scene.add(Sphere::new());
    scene.set_transform(
        glass,
        chain(&[scale(0.6, 0.6, 0.6), translation(Vec3::new(0.25, 0.6, -1.5))]),
    )?;
    scene.set_material(
        glass,
        Material {
            colour: Spectrum::new(0.1, 0.1, 0.1),
            diffuse: 0.1,
            specular: 1.0,
            reflective: 0.9,
            casts_shadow: false,
            ..Material::glass()
        },
    )?;
    scene.add_object(glass)?;

    let light = PointLight::new(Point3::new(-10.0, 10.0, -10.0), Spectrum::ones());
    let world = World::new(scene, vec![Arc::new(light)]);

    let camera = Camera::new(width, height, PI / 3.0)?.with_transform(view_transform(
        Point3::new(0.0, 2.5, -6.0),
        Point3::new(0.0, 0.75, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    )?);

    Ok((world, camera))
}
