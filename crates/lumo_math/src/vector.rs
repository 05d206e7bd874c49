//! Vector helpers shared by the shading and camera code.

use crate::Vec3;

/// Squared-length threshold below which a vector counts as zero.
pub const MIN_NORM: f32 = 1e-12;

/// Normalize a vector, leaving near-zero vectors untouched.
///
/// A vector whose magnitude is effectively zero has no meaningful
/// direction; returning it unchanged keeps degenerate geometry from
/// producing NaNs further down the pipeline.
#[inline]
pub fn normalize_safe(v: Vec3) -> Vec3 {
    if v.length_squared() < MIN_NORM {
        v
    } else {
        v.normalize()
    }
}

/// Reflect the direction-to-light `l` about the surface normal `n`.
///
/// Returns `2(n·l)n - l`. Both inputs are expected to be unit length,
/// in which case the result is unit length as well.
#[inline]
pub fn reflect(n: Vec3, l: Vec3) -> Vec3 {
    2.0 * n.dot(l) * n - l
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_safe_unit_result() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        let n = normalize_safe(v);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n - Vec3::new(0.6, 0.8, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_normalize_safe_zero_unchanged() {
        assert_eq!(normalize_safe(Vec3::ZERO), Vec3::ZERO);

        let tiny = Vec3::new(1e-8, -1e-8, 0.0);
        assert_eq!(normalize_safe(tiny), tiny);
    }

    #[test]
    fn test_reflect_preserves_length_and_angle() {
        let n = Vec3::Z;
        let l = Vec3::new(1.0, 0.0, 1.0).normalize();
        let r = reflect(n, l);

        // |R| == 1 and R·N == L·N (incidence = reflection)
        assert!((r.length() - 1.0).abs() < 1e-6);
        assert!((r.dot(n) - l.dot(n)).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_head_on() {
        // Light straight along the normal reflects back along the normal
        let n = Vec3::Y;
        let r = reflect(n, Vec3::Y);
        assert!((r - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_reflect_grazing() {
        // Light perpendicular to the normal flips sign
        let n = Vec3::Y;
        let r = reflect(n, Vec3::X);
        assert!((r + Vec3::X).length() < 1e-6);
    }
}
