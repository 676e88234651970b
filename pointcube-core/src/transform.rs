/// Rotation state and the closed-form Euler rotation applied to cube points
use nalgebra::{Matrix3, Point3};

/// Rotation angles A, B and C (in radians)
///
/// Angles are never wrapped; the trigonometric terms take care of periodicity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl RotationState {
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    pub fn zero() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            c: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, da: f32, db: f32, dc: f32) {
        self.a += da;
        self.b += db;
        self.c += dc;
    }

    /// Advance the spin angle C
    pub fn advance(&mut self, dc: f32) {
        self.c += dc;
    }

    fn terms(&self) -> Terms {
        let (sin_a, cos_a) = (self.a as f64).sin_cos();
        let (sin_b, cos_b) = (self.b as f64).sin_cos();
        let (sin_c, cos_c) = (self.c as f64).sin_cos();
        Terms {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
            sin_c,
            cos_c,
        }
    }

    /// Rotate a cube-local point `(i, j, k)` by the current angles, using the
    /// expanded sin/cos sums rather than a matrix product.
    ///
    /// The sums are taken in `f64` and rounded to `f32` once per coordinate.
    pub fn rotate_point(&self, point: &Point3<f32>) -> Point3<f32> {
        let (i, j, k) = (point.x as f64, point.y as f64, point.z as f64);
        let t = self.terms();

        let x = j * t.sin_a * t.sin_b * t.cos_c - k * t.cos_a * t.sin_b * t.cos_c
            + j * t.cos_a * t.sin_c
            + k * t.sin_a * t.sin_c
            + i * t.cos_b * t.cos_c;
        let y = j * t.cos_a * t.cos_c + k * t.sin_a * t.cos_c
            - j * t.sin_a * t.sin_b * t.sin_c
            + k * t.cos_a * t.sin_b * t.sin_c
            - i * t.cos_b * t.sin_c;
        let z = k * t.cos_a * t.cos_b - j * t.sin_a * t.cos_b + i * t.sin_b;

        Point3::new(x as f32, y as f32, z as f32)
    }

    /// The same rotation as `rotate_point`, as a matrix acting on `(i, j, k)`
    pub fn rotation_matrix(&self) -> Matrix3<f32> {
        let t = self.terms();
        Matrix3::<f64>::new(
            t.cos_b * t.cos_c,
            t.sin_a * t.sin_b * t.cos_c + t.cos_a * t.sin_c,
            -t.cos_a * t.sin_b * t.cos_c + t.sin_a * t.sin_c,
            -t.cos_b * t.sin_c,
            t.cos_a * t.cos_c - t.sin_a * t.sin_b * t.sin_c,
            t.sin_a * t.cos_c + t.cos_a * t.sin_b * t.sin_c,
            t.sin_b,
            -t.sin_a * t.cos_b,
            t.cos_a * t.cos_b,
        )
        .cast::<f32>()
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

struct Terms {
    sin_a: f64,
    cos_a: f64,
    sin_b: f64,
    cos_b: f64,
    sin_c: f64,
    cos_c: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::PI;

    fn random_state(rng: &mut StdRng) -> RotationState {
        RotationState::new(
            rng.gen_range(-4.0 * PI..4.0 * PI),
            rng.gen_range(-4.0 * PI..4.0 * PI),
            rng.gen_range(-4.0 * PI..4.0 * PI),
        )
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.a, 0.0);
        assert_eq!(state.b, 0.0);
        assert_eq!(state.c, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.a - 0.1).abs() < 1e-6);
        assert!((state.b - 0.2).abs() < 1e-6);
        assert!((state.c - 0.3).abs() < 1e-6);

        state.advance(0.1);
        assert!((state.c - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let p = Point3::new(3.0, -7.0, 11.0);
        assert_eq!(rotation.rotate_point(&p), p);
        assert!((rotation.rotation_matrix() - Matrix3::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_origin_stays_at_origin() {
        let rotation = RotationState::new(0.4, -1.3, 2.9);
        let p = rotation.rotate_point(&Point3::origin());
        assert_eq!(p, Point3::origin());
    }

    #[test]
    fn test_rotation_preserves_norm() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let rotation = random_state(&mut rng);
            let p = Point3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            );
            let rotated = rotation.rotate_point(&p);
            assert_relative_eq!(
                rotated.coords.norm(),
                p.coords.norm(),
                epsilon = 1e-4,
                max_relative = 1e-4
            );
        }
    }

    #[test]
    fn test_closed_form_matches_matrix() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let rotation = random_state(&mut rng);
            let p = Point3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            );
            let closed = rotation.rotate_point(&p);
            let matrix = rotation.rotation_matrix() * p;
            assert!((closed - matrix).norm() < 1e-3);
        }
    }

    #[test]
    fn test_rotation_matrix_is_orthonormal() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let m = random_state(&mut rng).rotation_matrix();
            assert!((m.transpose() * m - Matrix3::identity()).norm() < 1e-5);
            assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sums_are_rounded_once_from_double() {
        let rotation = RotationState::new(0.7, -1.9, 2.3);
        let p = Point3::new(-45.0f32, 50.0, 15.0);
        let rotated = rotation.rotate_point(&p);

        let (sa, ca) = (0.7f32 as f64).sin_cos();
        let (sb, cb) = (-1.9f32 as f64).sin_cos();
        let (sc, cc) = (2.3f32 as f64).sin_cos();
        let (i, j, k) = (-45.0f64, 50.0f64, 15.0f64);
        let z = k * ca * cb - j * sa * cb + i * sb;
        let x = j * sa * sb * cc - k * ca * sb * cc + j * ca * sc + k * sa * sc + i * cb * cc;

        assert_eq!(rotated.x, x as f32);
        assert_eq!(rotated.z, z as f32);
    }

    #[test]
    fn test_single_axis_spin_about_view_axis() {
        // With A = B = 0 only C acts, rotating in the screen plane.
        let rotation = RotationState::new(0.0, 0.0, PI / 2.0);
        let p = rotation.rotate_point(&Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, -10.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
    }
}
