#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, SQRT_2};

    use hikari::math::{
        transforms::{
            chain, rotation, rotation_x, rotation_y, rotation_z, scale, shearing, translation,
            view_transform,
        },
        Matrix4x4, Normal, Point3, Ray, Transform, Vec3,
    };

    fn invertible() -> Matrix4x4<f64> {
        Matrix4x4::new([
            [-5.0, 2.0, 6.0, -8.0],
            [1.0, -5.0, 1.0, 8.0],
            [7.0, 7.0, -6.0, -7.0],
            [1.0, -3.0, 7.0, 4.0],
        ])
    }

    #[test]
    fn new() {
        let m = invertible();
        let mi = m.inverted();

        let t0 = Transform::new(m.m);
        let t1 = Transform::new_m(m);
        let t2 = Transform::new_full(m, mi);
        assert_eq!(t0.m(), &m);
        assert_eq!(t0.m_inv(), &mi);
        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
        assert_eq!(Transform::try_new(m).unwrap(), t0);
    }

    #[test]
    fn try_new_singular() {
        let m = Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert!(Transform::try_new(m).is_err());
    }

    #[test]
    fn default() {
        let t = Transform::default();
        let m = Matrix4x4::<f64>::identity();
        let ti = Transform::new_full(m, m);
        assert_eq!(t, ti);
        assert!(t.is_identity());
    }

    #[test]
    fn inverted() {
        let t = Transform::new_m(invertible());
        let ti = t.inverted();
        assert_eq!(t.m(), ti.m_inv());
        assert_eq!(t.m_inv(), ti.m());
    }

    #[test]
    fn transposed() {
        let m = invertible();
        let t = Transform::new_m(m).transposed();
        assert_eq!(t.m(), &m.transposed());
        assert_eq!(t.m_inv(), &m.inverted().transposed());
    }

    #[test]
    fn is_identity() {
        let t = Transform::new_m(Matrix4x4::<f64>::identity());
        assert!(t.is_identity());

        let t = Transform::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert!(!t.is_identity());
    }

    #[test]
    fn mul() {
        let t = translation(Vec3::new(5.0, -3.0, 2.0));
        let s = scale(2.0, 3.0, 4.0);

        let p = Point3::new(-3.0, 4.0, 5.0);
        assert_eq!(&t * p, Point3::new(2.0, 1.0, 7.0));
        assert_eq!(&t.inverted() * p, Point3::new(-8.0, 7.0, 3.0));

        // Vectors aren't affected by translation
        let v = Vec3::new(-3.0, 4.0, 5.0);
        assert_eq!(&t * v, v);

        assert_eq!(
            &s * Point3::new(-4.0, 6.0, 8.0),
            Point3::new(-8.0, 18.0, 32.0)
        );
        assert_eq!(&s * Vec3::new(-4.0, 6.0, 8.0), Vec3::new(-8.0, 18.0, 32.0));
        assert_eq!(
            &s.inverted() * Vec3::new(-4.0, 6.0, 8.0),
            Vec3::new(-2.0, 2.0, 2.0)
        );

        // Normals use the inverse transpose
        let n = Normal::new(0.0, 1.0, 0.0);
        assert_eq!(&t * n, n);
        assert_eq!(&scale(1.0, 0.5, 1.0) * n, Normal::new(0.0, 2.0, 0.0));

        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(
            &translation(Vec3::new(3.0, 4.0, 5.0)) * &r,
            Ray::new(Point3::new(4.0, 6.0, 8.0), Vec3::new(0.0, 1.0, 0.0))
        );
        assert_eq!(
            &s * &r,
            Ray::new(Point3::new(2.0, 6.0, 12.0), Vec3::new(0.0, 3.0, 0.0))
        );

        // Composition applies the right hand side first
        let ts = &t * &s;
        assert_eq!(ts.m(), &(t.m() * s.m()));
        assert_abs_diff_eq!(ts.m_inv(), &ts.m().inverted(), epsilon = 1e-12);
        assert_eq!(&ts * p, &t * (&s * p));
    }

    #[test]
    fn translation_matrix() {
        let tm = Matrix4x4::new([
            [1.0, 0.0, 0.0, 2.0],
            [0.0, 1.0, 0.0, 3.0],
            [0.0, 0.0, 1.0, 4.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let tt = translation(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(tt.m(), &tm);
        assert_eq!(tt.m_inv(), &tm.inverted());
    }

    #[test]
    fn scale_matrix() {
        let sm = Matrix4x4::new([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let st = scale(2.0, 3.0, 4.0);
        assert_eq!(st.m(), &sm);
        assert_eq!(st.m_inv(), &sm.inverted());

        // Reflection
        assert_eq!(
            &scale(-1.0, 1.0, 1.0) * Point3::new(2.0, 3.0, 4.0),
            Point3::new(-2.0, 3.0, 4.0)
        );
    }

    fn assert_inverse_pair(t: &Transform<f64>) {
        assert_abs_diff_eq!(t.m() * t.m_inv(), Matrix4x4::identity(), epsilon = 1e-12);
    }

    #[test]
    fn rotate_about_x() {
        let p = Point3::new(0.0, 1.0, 0.0);
        let eighth = rotation_x(FRAC_PI_4);
        let quarter = rotation_x(FRAC_PI_2);
        assert_abs_diff_eq!(
            &eighth * p,
            Point3::new(0.0, SQRT_2 / 2.0, SQRT_2 / 2.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(&quarter * p, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        // Inverse turns the other way
        assert_abs_diff_eq!(
            &eighth.inverted() * p,
            Point3::new(0.0, SQRT_2 / 2.0, -SQRT_2 / 2.0),
            epsilon = 1e-12
        );
        assert_inverse_pair(&quarter);
    }

    #[test]
    fn rotate_about_y() {
        let p = Point3::new(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(
            &rotation_y(FRAC_PI_4) * p,
            Point3::new(SQRT_2 / 2.0, 0.0, SQRT_2 / 2.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            &rotation_y(FRAC_PI_2) * p,
            Point3::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        assert_inverse_pair(&rotation_y(0.3));
    }

    #[test]
    fn rotate_about_z() {
        let p = Point3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(
            &rotation_z(FRAC_PI_4) * p,
            Point3::new(-SQRT_2 / 2.0, SQRT_2 / 2.0, 0.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            &rotation_z(FRAC_PI_2) * p,
            Point3::new(-1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        assert_inverse_pair(&rotation_z(-1.2));
    }

    #[test]
    fn rotate_about_axis() {
        // Principal axes agree with the dedicated rotations
        let theta = 0.7;
        let cases = [
            (Vec3::new(1.0, 0.0, 0.0), rotation_x(theta)),
            (Vec3::new(0.0, 2.0, 0.0), rotation_y(theta)),
            (Vec3::new(0.0, 0.0, 0.5), rotation_z(theta)),
        ];
        for (axis, expected) in cases {
            assert_abs_diff_eq!(rotation(theta, axis).m(), expected.m(), epsilon = 1e-12);
        }

        // A third of a turn about the diagonal cycles the axes
        let t = rotation(2.0 * FRAC_PI_3, Vec3::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(
            &t * Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            &t * Point3::new(0.0, 0.0, 3.0),
            Point3::new(3.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        assert_inverse_pair(&t);
    }

    #[test]
    fn shearing_matrix() {
        let p = Point3::new(2.0, 3.0, 4.0);
        let cases = [
            ([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Point3::new(5.0, 3.0, 4.0)),
            ([0.0, 1.0, 0.0, 0.0, 0.0, 0.0], Point3::new(6.0, 3.0, 4.0)),
            ([0.0, 0.0, 1.0, 0.0, 0.0, 0.0], Point3::new(2.0, 5.0, 4.0)),
            ([0.0, 0.0, 0.0, 1.0, 0.0, 0.0], Point3::new(2.0, 7.0, 4.0)),
            ([0.0, 0.0, 0.0, 0.0, 1.0, 0.0], Point3::new(2.0, 3.0, 6.0)),
            ([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], Point3::new(2.0, 3.0, 7.0)),
        ];
        for ([xy, xz, yx, yz, zx, zy], expected) in cases {
            let t = shearing(xy, xz, yx, yz, zx, zy).unwrap();
            assert_eq!(&t * p, expected);
        }

        // x = y and y = x collapses the xy-plane
        assert!(shearing(1.0, 0.0, 1.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn chained() {
        let p = Point3::new(1.0, 0.0, 1.0);
        let a = rotation_x(FRAC_PI_2);
        let b = scale(5.0, 5.0, 5.0);
        let c = translation(Vec3::new(10.0, 5.0, 7.0));

        let p2 = &a * p;
        assert_abs_diff_eq!(p2, Point3::new(1.0, -1.0, 0.0), epsilon = 1e-12);
        let p3 = &b * p2;
        assert_abs_diff_eq!(p3, Point3::new(5.0, -5.0, 0.0), epsilon = 1e-12);
        let p4 = &c * p3;
        assert_abs_diff_eq!(p4, Point3::new(15.0, 0.0, 7.0), epsilon = 1e-12);

        let t = chain(&[a, b, c]);
        assert_abs_diff_eq!(&t * p, Point3::new(15.0, 0.0, 7.0), epsilon = 1e-12);

        assert!(chain::<f64>(&[]).is_identity());
    }

    #[test]
    fn view_transform_matrix() {
        let up = Vec3::new(0.0, 1.0, 0.0);

        // Default orientation
        let t = view_transform(Point3::zeros(), Point3::new(0.0, 0.0, -1.0), up).unwrap();
        assert_abs_diff_eq!(t.m(), &Matrix4x4::identity(), epsilon = 1e-15);

        // Looking down +z mirrors x and z
        let t = view_transform(Point3::zeros(), Point3::new(0.0, 0.0, 1.0), up).unwrap();
        assert_abs_diff_eq!(t.m(), scale(-1.0, 1.0, -1.0).m(), epsilon = 1e-15);

        // Moves the world, not the eye
        let t = view_transform(Point3::new(0.0, 0.0, 8.0), Point3::zeros(), up).unwrap();
        assert_abs_diff_eq!(
            t.m(),
            translation(Vec3::new(0.0, 0.0, -8.0)).m(),
            epsilon = 1e-15
        );

        let t = view_transform(
            Point3::new(1.0, 3.0, 2.0),
            Point3::new(4.0, -2.0, 8.0),
            Vec3::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(
            t.m(),
            &Matrix4x4::new([
                [-0.50709, 0.50709, 0.67612, -2.36643],
                [0.76772, 0.60609, 0.12122, -2.82843],
                [-0.35857, 0.59761, -0.71714, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(t.m_inv(), &t.m().inverted(), epsilon = 1e-12);
    }

    #[test]
    fn view_transform_degenerate() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(view_transform(p, p, Vec3::new(0.0, 1.0, 0.0)).is_err());
        assert!(view_transform(
            Point3::zeros(),
            Point3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0)
        )
        .is_err());
    }
}
