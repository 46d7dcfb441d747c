#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::SQRT_2;

    use hikari::{
        interaction::SurfaceInteraction,
        intersection::{hit, sort_intersections, Intersection},
        materials::{schlick, Material},
        math::{
            transforms::{scale, translation},
            Normal, Point3, Ray, Vec3,
        },
        scene::{Scene, ShapeId},
        shapes::{Plane, Sphere},
        world::World,
    };

    const EPS: f64 = 1e-4;

    fn sphere_scene() -> (Scene, ShapeId) {
        let mut scene = Scene::new();
        let s = scene.add(Sphere::new());
        scene.add_object(s).unwrap();
        (scene, s)
    }

    fn glass_sphere_world() -> World {
        let (mut scene, s) = sphere_scene();
        scene.set_material(s, Material::glass()).unwrap();
        World::new(scene, Vec::new())
    }

    #[test]
    fn new() {
        let (_, s) = sphere_scene();
        let x = Intersection::new(3.5, s);
        assert_eq!(x.t, 3.5);
        assert_eq!(x.shape, s);
        assert_eq!(x.uv, None);

        let x = Intersection::with_uv(3.5, s, 0.2, 0.4);
        assert_eq!(x.uv.unwrap().x, 0.2);
        assert_eq!(x.uv.unwrap().y, 0.4);
    }

    #[test]
    fn hits() {
        let (_, s) = sphere_scene();
        let xs = |ts: &[f64]| -> Vec<Intersection> {
            ts.iter().map(|&t| Intersection::new(t, s)).collect()
        };

        // All positive
        assert_eq!(hit(&xs(&[1.0, 2.0])), Some(0));
        // Some negative
        assert_eq!(hit(&xs(&[-1.0, 1.0])), Some(1));
        // All negative
        assert_eq!(hit(&xs(&[-2.0, -1.0])), None);
        assert_eq!(hit(&[]), None);
        // Unsorted
        assert_eq!(hit(&xs(&[5.0, 7.0, -3.0, 2.0])), Some(3));
        // Zero counts as a hit
        assert_eq!(hit(&xs(&[-1.0, 0.0])), Some(1));
    }

    #[test]
    fn sorted() {
        let (_, s) = sphere_scene();
        let mut xs: Vec<Intersection> = [5.0, 7.0, -3.0, 2.0]
            .iter()
            .map(|&t| Intersection::new(t, s))
            .collect();
        sort_intersections(&mut xs);
        let ts: Vec<f64> = xs.iter().map(|x| x.t).collect();
        assert_eq!(ts, [-3.0, 2.0, 5.0, 7.0]);
    }

    #[test]
    fn interaction_outside() {
        let (scene, s) = sphere_scene();
        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let xs = [Intersection::new(4.0, s)];
        let si = SurfaceInteraction::new(&scene, &xs, 0, &r, EPS).unwrap();
        assert_eq!(si.t, 4.0);
        assert_eq!(si.shape, s);
        assert_eq!(si.p, Point3::new(0.0, 0.0, -1.0));
        assert_eq!(si.wo, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(si.n, Normal::new(0.0, 0.0, -1.0));
        assert!(!si.inside);
    }

    #[test]
    fn interaction_inside() {
        let (scene, s) = sphere_scene();
        let r = Ray::new(Point3::zeros(), Vec3::new(0.0, 0.0, 1.0));
        let xs = [Intersection::new(1.0, s)];
        let si = SurfaceInteraction::new(&scene, &xs, 0, &r, EPS).unwrap();
        assert_eq!(si.p, Point3::new(0.0, 0.0, 1.0));
        assert_eq!(si.wo, Vec3::new(0.0, 0.0, -1.0));
        assert!(si.inside);
        // Flipped to face the viewer
        assert_eq!(si.n, Normal::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn interaction_reflect() {
        let mut scene = Scene::new();
        let p = scene.add(Plane::new());
        scene.add_object(p).unwrap();

        let r = Ray::new(
            Point3::new(0.0, 1.0, -1.0),
            Vec3::new(0.0, -SQRT_2 / 2.0, SQRT_2 / 2.0),
        );
        let xs = [Intersection::new(SQRT_2, p)];
        let si = SurfaceInteraction::new(&scene, &xs, 0, &r, EPS).unwrap();
        assert_abs_diff_eq!(
            si.reflect,
            Vec3::new(0.0, SQRT_2 / 2.0, SQRT_2 / 2.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn interaction_offsets() {
        let (mut scene, s) = sphere_scene();
        scene
            .set_transform(s, translation(Vec3::new(0.0, 0.0, 1.0)))
            .unwrap();

        let r = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let xs = [Intersection::new(5.0, s)];
        let si = SurfaceInteraction::new(&scene, &xs, 0, &r, EPS).unwrap();
        assert!(si.over_p.z < -EPS / 2.0);
        assert!(si.p.z > si.over_p.z);
        assert!(si.under_p.z > EPS / 2.0);
        assert!(si.p.z < si.under_p.z);
    }

    #[test]
    fn refractive_indices() {
        let mut scene = Scene::new();
        let glass = |ri| Material {
            refractive_index: ri,
            ..Material::glass()
        };

        let a = scene.add(Sphere::new());
        scene.set_transform(a, scale(2.0, 2.0, 2.0)).unwrap();
        scene.set_material(a, glass(1.5)).unwrap();
        let b = scene.add(Sphere::new());
        scene
            .set_transform(b, translation(Vec3::new(0.0, 0.0, -0.25)))
            .unwrap();
        scene.set_material(b, glass(2.0)).unwrap();
        let c = scene.add(Sphere::new());
        scene
            .set_transform(c, translation(Vec3::new(0.0, 0.0, 0.25)))
            .unwrap();
        scene.set_material(c, glass(2.5)).unwrap();
        for id in [a, b, c] {
            scene.add_object(id).unwrap();
        }

        let r = Ray::new(Point3::new(0.0, 0.0, -4.0), Vec3::new(0.0, 0.0, 1.0));
        let xs = [
            Intersection::new(2.0, a),
            Intersection::new(2.75, b),
            Intersection::new(3.25, c),
            Intersection::new(4.75, b),
            Intersection::new(5.25, c),
            Intersection::new(6.0, a),
        ];
        let expected = [
            (1.0, 1.5),
            (1.5, 2.0),
            (2.0, 2.5),
            (2.5, 2.5),
            (2.5, 1.5),
            (1.5, 1.0),
        ];
        for (i, (n1, n2)) in expected.into_iter().enumerate() {
            let si = SurfaceInteraction::new(&scene, &xs, i, &r, EPS).unwrap();
            assert_eq!((si.n1, si.n2), (n1, n2), "hit {}", i);
        }
    }

    #[test]
    fn schlick_total_internal_reflection() {
        let world = glass_sphere_world();
        let r = Ray::new(Point3::new(0.0, 0.0, SQRT_2 / 2.0), Vec3::new(0.0, 1.0, 0.0));
        let xs = world.intersect(&r, EPS);
        assert_eq!(xs.len(), 2);
        let si = SurfaceInteraction::new(&world.scene, &xs, 1, &r, EPS).unwrap();
        assert_eq!(schlick(&si), 1.0);
    }

    #[test]
    fn schlick_perpendicular() {
        let world = glass_sphere_world();
        let r = Ray::new(Point3::zeros(), Vec3::new(0.0, 1.0, 0.0));
        let xs = world.intersect(&r, EPS);
        let si = SurfaceInteraction::new(&world.scene, &xs, 1, &r, EPS).unwrap();
        assert_abs_diff_eq!(schlick(&si), 0.04, epsilon = 1e-9);
    }

    #[test]
    fn schlick_small_angle() {
        let world = glass_sphere_world();
        let r = Ray::new(Point3::new(0.0, 0.99, -2.0), Vec3::new(0.0, 0.0, 1.0));
        let xs = world.intersect(&r, EPS);
        let si = SurfaceInteraction::new(&world.scene, &xs, 0, &r, EPS).unwrap();
        assert_abs_diff_eq!(schlick(&si), 0.48873, epsilon = 1e-4);
    }
}
