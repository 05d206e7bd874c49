//! Analytic ray-sphere intersection.

use lumo_math::{Interval, Ray, Vec3};

/// Lower bound for accepted hit distances.
///
/// Rays that start on a surface (shadow rays) would otherwise re-hit
/// their own sphere at t ~ 0 due to floating-point rounding.
pub const HIT_EPSILON: f32 = 1e-4;

/// Intersect a ray with a sphere, returning the nearest t inside `ray_t`.
///
/// Solves the quadratic `|O + tD - C|^2 = r^2` in half-b form. A tangent
/// ray (discriminant exactly zero) is a valid repeated root. Returns
/// `None` when the sphere is missed entirely or lies outside the interval,
/// including the case where it sits behind the ray origin.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32, ray_t: Interval) -> Option<f32> {
    let oc = center - ray.origin();
    let a = ray.direction().length_squared();
    let h = ray.direction().dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Find the nearest root in the acceptable range
    let mut root = (h - sqrtd) / a;
    if !ray_t.surrounds(root) {
        root = (h + sqrtd) / a;
        if !ray_t.surrounds(root) {
            return None;
        }
    }

    Some(root)
}

/// The default query interval for primary rays: everything in front of
/// the origin beyond the self-intersection epsilon.
pub fn forward_interval() -> Interval {
    Interval::new(HIT_EPSILON, f32::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_on_hit_distance() {
        // From distance 15 straight at a radius-2 sphere: t = 15 - 2 = 13
        let ray = Ray::new(Vec3::new(-15.0, 0.0, 0.0), Vec3::X);
        let t = ray_sphere(&ray, Vec3::ZERO, 2.0, forward_interval()).unwrap();
        assert!((t - 13.0).abs() < 1e-4);
    }

    #[test]
    fn test_perpendicular_miss() {
        // Offset larger than the radius never intersects
        let ray = Ray::new(Vec3::new(-15.0, 3.0, 0.0), Vec3::X);
        assert!(ray_sphere(&ray, Vec3::ZERO, 2.0, forward_interval()).is_none());
    }

    #[test]
    fn test_tangent_ray_single_root() {
        // Grazing ray at exactly the radius: repeated root, still a hit
        let ray = Ray::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::X);
        let t = ray_sphere(&ray, Vec3::ZERO, 1.0, forward_interval()).unwrap();
        assert!((t - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_surface_origin_outward_no_self_hit() {
        // A ray starting on the surface pointing away must not re-hit
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::X);
        assert!(ray_sphere(&ray, Vec3::ZERO, 1.0, forward_interval()).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        // Both roots negative: no hit even though the discriminant is positive
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        assert!(ray_sphere(&ray, Vec3::ZERO, 1.0, forward_interval()).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_uses_far_root() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray_sphere(&ray, Vec3::ZERO, 1.0, forward_interval()).unwrap();
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_interval_upper_bound() {
        // A hit beyond the interval max is rejected
        let ray = Ray::new(Vec3::new(-15.0, 0.0, 0.0), Vec3::X);
        let clipped = Interval::new(HIT_EPSILON, 10.0);
        assert!(ray_sphere(&ray, Vec3::ZERO, 2.0, clipped).is_none());
    }

    #[test]
    fn test_zero_direction_is_a_miss() {
        // Degenerate direction: no panic, no hit
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO);
        assert!(ray_sphere(&ray, Vec3::ZERO, 1.0, forward_interval()).is_none());
    }
}
