#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};
    use std::panic;

    use hikari::{
        math::{Matrix4x4, Point3, Vec3, Vec4},
        Error,
    };

    #[test]
    fn constants() {
        let zeros = Matrix4x4::<f64>::zeros();
        let identity = Matrix4x4::<f64>::identity();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(zeros.m[row][col], 0.0);
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(identity.m[row][col], expected);
            }
        }
        assert_eq!(identity.determinant(), 1.0);
        assert_eq!(identity.inverted(), identity);
    }

    #[test]
    fn has_nans() {
        assert!(!Matrix4x4::<f64>::identity().has_nans());
        let result = panic::catch_unwind(|| {
            Matrix4x4::new([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, f64::NAN, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ])
        });
        assert!(result.is_err());
    }

    fn sample() -> Matrix4x4<f64> {
        Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 8.0, 7.0, 6.0],
            [5.0, 4.0, 3.0, 2.0],
        ])
    }

    #[test]
    fn rows_and_cols() {
        let m = sample();
        assert_eq!(m.row(0), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(2), [9.0, 8.0, 7.0, 6.0]);
        assert_eq!(m.col(1), [2.0, 6.0, 8.0, 4.0]);
        assert_eq!(m.col(3), [4.0, 8.0, 6.0, 2.0]);
        for i in 0..4 {
            assert_eq!(m.transposed().row(i), m.col(i));
        }
    }

    #[test]
    fn transposed() {
        let m = Matrix4x4::new([
            [0.0, 9.0, 3.0, 0.0],
            [9.0, 8.0, 0.0, 8.0],
            [1.0, 8.0, 5.0, 3.0],
            [0.0, 0.0, 5.0, 8.0],
        ]);
        let expected = Matrix4x4::new([
            [0.0, 9.0, 1.0, 0.0],
            [9.0, 8.0, 8.0, 0.0],
            [3.0, 0.0, 5.0, 5.0],
            [0.0, 8.0, 3.0, 8.0],
        ]);
        let before = m;

        assert_eq!(m.transposed(), expected);
        assert_eq!(m.transposed().transposed(), m);
        assert_eq!(Matrix4x4::<f64>::identity().transposed(), Matrix4x4::identity());
        assert_eq!(m, before);
    }

    #[test]
    fn determinant() {
        let m = Matrix4x4::new([
            [-2.0, -8.0, 3.0, 5.0],
            [-3.0, 1.0, 7.0, 3.0],
            [1.0, 2.0, -9.0, 6.0],
            [-6.0, 7.0, 7.0, -9.0],
        ]);
        assert_eq!(m.cofactor(0, 0), 690.0);
        assert_eq!(m.cofactor(0, 1), 447.0);
        assert_eq!(m.cofactor(0, 2), 210.0);
        assert_eq!(m.cofactor(0, 3), 51.0);
        assert_eq!(m.determinant(), -4071.0);
        assert!(m.is_invertible());

        let singular = Matrix4x4::new([
            [-4.0, 2.0, -2.0, -3.0],
            [9.0, 6.0, 2.0, 6.0],
            [0.0, -5.0, 1.0, -5.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert_eq!(singular.determinant(), 0.0);
        assert!(!singular.is_invertible());
    }

    #[test]
    fn inverted() {
        let m = Matrix4x4::new([
            [-5.0, 2.0, 6.0, -8.0],
            [1.0, -5.0, 1.0, 8.0],
            [7.0, 7.0, -6.0, -7.0],
            [1.0, -3.0, 7.0, 4.0],
        ]);
        assert_eq!(m.determinant(), 532.0);
        let inv = m.inverted();
        assert_abs_diff_eq!(inv.m[3][2], -160.0 / 532.0, epsilon = 1e-12);
        assert_abs_diff_eq!(inv.m[2][3], 105.0 / 532.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            inv,
            Matrix4x4::new([
                [0.21805, 0.45113, 0.24060, -0.04511],
                [-0.80827, -1.45677, -0.44361, 0.52068],
                [-0.07895, -0.22368, -0.05263, 0.19737],
                [-0.52256, -0.81391, -0.30075, 0.30639],
            ]),
            epsilon = 1e-4
        );

        assert_abs_diff_eq!(inv.inverted(), m, epsilon = 1e-9);
        assert_abs_diff_eq!(&m * &inv, Matrix4x4::identity(), epsilon = 1e-9);
    }

    #[test]
    fn inverted_undoes_product() {
        let a = Matrix4x4::new([
            [3.0, -9.0, 7.0, 3.0],
            [3.0, -8.0, 2.0, -9.0],
            [-4.0, 4.0, 4.0, 1.0],
            [-6.0, 5.0, -1.0, 1.0],
        ]);
        let b = Matrix4x4::new([
            [8.0, 2.0, 2.0, 2.0],
            [3.0, -1.0, 7.0, 0.0],
            [7.0, 0.0, 5.0, 4.0],
            [6.0, -2.0, 0.0, 5.0],
        ]);
        let c = &a * &b;
        assert_abs_diff_eq!(&c * &b.inverted(), a, epsilon = 1e-9);
    }

    #[test]
    fn singular() {
        let m = Matrix4x4::new([
            [-4.0, 2.0, -2.0, -3.0],
            [9.0, 6.0, 2.0, 6.0],
            [0.0, -5.0, 1.0, -5.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert!(matches!(m.try_inverted(), Err(Error::SingularMatrix)));
        let result = panic::catch_unwind(|| m.inverted());
        assert!(result.is_err());
    }

    #[test]
    fn mul() {
        let a = sample();
        let b = Matrix4x4::new([
            [-2.0, 1.0, 2.0, 3.0],
            [3.0, 2.0, 1.0, -1.0],
            [4.0, 3.0, 6.0, 5.0],
            [1.0, 2.0, 7.0, 8.0],
        ]);

        assert_eq!(
            &a * &b,
            Matrix4x4::new([
                [20.0, 22.0, 50.0, 48.0],
                [44.0, 54.0, 114.0, 108.0],
                [40.0, 58.0, 110.0, 102.0],
                [16.0, 26.0, 46.0, 42.0],
            ])
        );
        assert_eq!(&a * &Matrix4x4::identity(), a);
        assert_eq!(&Matrix4x4::identity() * &b, b);
    }

    #[test]
    fn mul_tuples() {
        let m = Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 4.0, 2.0],
            [8.0, 6.0, 4.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(
            &m * Vec4::new(1.0, 2.0, 3.0, 1.0),
            Vec4::new(18.0, 24.0, 33.0, 1.0)
        );
        assert_eq!(
            &m * Point3::new(1.0, 2.0, 3.0),
            Point3::new(18.0, 24.0, 33.0)
        );
        // Vectors ignore the translation column
        assert_eq!(&m * Vec3::new(1.0, 2.0, 3.0), Vec3::new(14.0, 22.0, 32.0));
        assert_eq!(
            &Matrix4x4::identity() * Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn abs_diff_eq() {
        assert_abs_diff_eq!(Matrix4x4::<f64>::identity(), Matrix4x4::identity());
        for row in 0..4 {
            for col in 0..4 {
                let mut m = Matrix4x4::zeros();
                m.m[row][col] = 1.0;
                assert_abs_diff_ne!(m, Matrix4x4::identity());
                assert_abs_diff_eq!(m, Matrix4x4::identity(), epsilon = 1.0)
            }
        }
    }

    #[test]
    fn relative_eq() {
        assert_relative_eq!(Matrix4x4::<f64>::identity(), Matrix4x4::identity());
        for row in 0..4 {
            for col in 0..4 {
                let mut m = Matrix4x4::new([[2.0; 4]; 4]);
                let mc = m;
                m.m[row][col] = 1.0;
                assert_relative_ne!(m, mc);
                assert_relative_eq!(m, mc, epsilon = 1.0);
                assert_relative_eq!(m, mc, epsilon = 0.0, max_relative = 0.5);
            }
        }
    }
}
