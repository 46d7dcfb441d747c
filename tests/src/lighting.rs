#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::{f64::consts::SQRT_2, sync::Arc};

    use hikari::{
        lights::{Light, PointLight},
        materials::{lighting, Material},
        math::{Normal, Point3, Spectrum, Vec3},
        patterns::Stripes,
    };

    fn shade(eye: Vec3<f64>, light_p: Point3<f64>, in_shadow: bool) -> Spectrum<f64> {
        let m = Material::default();
        let light = PointLight::new(light_p, Spectrum::ones());
        let p = Point3::zeros();
        lighting(
            &m,
            m.colour_at(p),
            &light.sample_li(p),
            eye,
            Normal::new(0.0, 0.0, -1.0),
            in_shadow,
        )
    }

    #[test]
    fn point_light() {
        let light = PointLight::new(Point3::new(0.0, 3.0, 0.0), Spectrum::new(1.0, 0.5, 0.25));
        assert_eq!(light.position(), Point3::new(0.0, 3.0, 0.0));
        assert_eq!(light.intensity(), Spectrum::new(1.0, 0.5, 0.25));

        let sample = light.sample_li(Point3::new(0.0, -1.0, 0.0));
        assert_eq!(sample.l, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sample.dist, 4.0);
        assert_eq!(sample.li, Spectrum::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn material_default() {
        let m = Material::default();
        assert_eq!(m.colour, Spectrum::ones());
        assert!(m.pattern.is_none());
        assert_eq!(m.ambient, 0.1);
        assert_eq!(m.diffuse, 0.9);
        assert_eq!(m.specular, 0.9);
        assert_eq!(m.shininess, 200.0);
        assert_eq!(m.reflective, 0.0);
        assert_eq!(m.transparency, 0.0);
        assert_eq!(m.refractive_index, 1.0);
        assert!(m.casts_shadow);
        assert!(m.validate().is_ok());

        let g = Material::glass();
        assert_eq!(g.transparency, 1.0);
        assert_eq!(g.refractive_index, 1.5);
    }

    #[test]
    fn material_validate() {
        let m = Material {
            diffuse: -0.1,
            ..Material::default()
        };
        assert!(m.validate().is_err());

        let m = Material {
            refractive_index: 0.5,
            ..Material::default()
        };
        assert!(m.validate().is_err());

        let m = Material {
            ambient: f64::NAN,
            ..Material::default()
        };
        assert!(m.validate().is_err());
    }

    #[test]
    fn eye_between_light_and_surface() {
        let c = shade(
            Vec3::new(0.0, 0.0, -1.0),
            Point3::new(0.0, 0.0, -10.0),
            false,
        );
        assert_abs_diff_eq!(c, Spectrum::new(1.9, 1.9, 1.9), epsilon = 1e-9);
    }

    #[test]
    fn eye_offset_45() {
        let c = shade(
            Vec3::new(0.0, SQRT_2 / 2.0, -SQRT_2 / 2.0),
            Point3::new(0.0, 0.0, -10.0),
            false,
        );
        assert_abs_diff_eq!(c, Spectrum::new(1.0, 1.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn light_offset_45() {
        let c = shade(
            Vec3::new(0.0, 0.0, -1.0),
            Point3::new(0.0, 10.0, -10.0),
            false,
        );
        assert_abs_diff_eq!(c, Spectrum::new(0.7364, 0.7364, 0.7364), epsilon = 1e-4);
    }

    #[test]
    fn eye_in_reflection() {
        let c = shade(
            Vec3::new(0.0, -SQRT_2 / 2.0, -SQRT_2 / 2.0),
            Point3::new(0.0, 10.0, -10.0),
            false,
        );
        assert_abs_diff_eq!(c, Spectrum::new(1.6364, 1.6364, 1.6364), epsilon = 1e-4);
    }

    #[test]
    fn light_behind_surface() {
        let c = shade(
            Vec3::new(0.0, 0.0, -1.0),
            Point3::new(0.0, 0.0, 10.0),
            false,
        );
        assert_abs_diff_eq!(c, Spectrum::new(0.1, 0.1, 0.1), epsilon = 1e-9);
    }

    #[test]
    fn in_shadow() {
        let c = shade(
            Vec3::new(0.0, 0.0, -1.0),
            Point3::new(0.0, 0.0, -10.0),
            true,
        );
        assert_abs_diff_eq!(c, Spectrum::new(0.1, 0.1, 0.1), epsilon = 1e-9);
    }

    #[test]
    fn coloured_light() {
        let m = Material::default();
        let light = PointLight::new(Point3::new(0.0, 0.0, -10.0), Spectrum::new(1.0, 0.5, 0.0));
        let p = Point3::zeros();
        let c = lighting(
            &m,
            Spectrum::new(0.5, 1.0, 1.0),
            &light.sample_li(p),
            Vec3::new(0.0, 0.0, -1.0),
            Normal::new(0.0, 0.0, -1.0),
            true,
        );
        assert_abs_diff_eq!(c, Spectrum::new(0.05, 0.05, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn pattern_colour() {
        let m = Material {
            ambient: 1.0,
            diffuse: 0.0,
            specular: 0.0,
            ..Material::default().with_pattern(Arc::new(Stripes::default()))
        };
        let light = PointLight::new(Point3::new(0.0, 0.0, -10.0), Spectrum::ones());
        let eye = Vec3::new(0.0, 0.0, -1.0);
        let n = Normal::new(0.0, 0.0, -1.0);

        let p = Point3::new(0.9, 0.0, 0.0);
        let c1 = lighting(&m, m.colour_at(p), &light.sample_li(p), eye, n, false);
        let p = Point3::new(1.1, 0.0, 0.0);
        let c2 = lighting(&m, m.colour_at(p), &light.sample_li(p), eye, n, false);
        assert_eq!(c1, Spectrum::ones());
        assert_eq!(c2, Spectrum::zeros());
    }
}
