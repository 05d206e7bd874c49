//! Nearest-hit resolution against the scene's sphere list.

use lumo_core::Scene;
use lumo_math::{Interval, Ray, Vec3};

use crate::intersect::ray_sphere;

/// Record of a ray-sphere intersection.
///
/// Derived per ray and never cached across pixels.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Index of the hit sphere in the scene list
    pub sphere: usize,
}

/// Find the nearest sphere intersection along a ray.
///
/// Every sphere is tested, shrinking the acceptable interval to the
/// closest t found so far. The shrink is strict, so when two spheres are
/// hit at exactly the same distance the first-registered one wins.
pub fn hit_scene(scene: &Scene, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
    let mut closest: Option<HitRecord> = None;
    let mut closest_so_far = ray_t.max;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        let interval = Interval::new(ray_t.min, closest_so_far);
        if let Some(t) = ray_sphere(ray, sphere.center, sphere.radius, interval) {
            closest_so_far = t;
            let p = ray.at(t);
            closest = Some(HitRecord {
                t,
                p,
                normal: (p - sphere.center) / sphere.radius,
                sphere: index,
            });
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intersect::forward_interval;
    use lumo_core::{Material, PointLight, Sphere};

    fn test_material() -> Material {
        Material::grey(0.1, 0.8, 0.3, 32.0)
    }

    fn scene_with(spheres: Vec<Sphere>) -> Scene {
        Scene::new(
            spheres,
            PointLight::new(Vec3::new(0.0, 5.0, 5.0), 1.0),
            Vec3::ZERO,
        )
    }

    #[test]
    fn test_nearest_of_two_spheres() {
        let scene = scene_with(vec![
            Sphere::new(Vec3::new(10.0, 0.0, 0.0), 1.0, test_material()),
            Sphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0, test_material()),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = hit_scene(&scene, &ray, forward_interval()).unwrap();
        assert_eq!(rec.sphere, 1);
        assert!((rec.t - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_exact_tie_first_sphere_wins() {
        // Two coincident spheres: strict comparison keeps the first
        let sphere = Sphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0, test_material());
        let scene = scene_with(vec![sphere, sphere]);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = hit_scene(&scene, &ray, forward_interval()).unwrap();
        assert_eq!(rec.sphere, 0);
    }

    #[test]
    fn test_miss_returns_none() {
        let scene = scene_with(vec![Sphere::new(
            Vec3::new(5.0, 0.0, 0.0),
            1.0,
            test_material(),
        )]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(hit_scene(&scene, &ray, forward_interval()).is_none());
    }

    #[test]
    fn test_normal_faces_the_ray() {
        let scene = scene_with(vec![Sphere::new(
            Vec3::new(5.0, 0.0, 0.0),
            2.0,
            test_material(),
        )]);
        let ray = Ray::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);

        let rec = hit_scene(&scene, &ray, forward_interval()).unwrap();
        assert!((rec.t - 13.0).abs() < 1e-3);
        assert!((rec.normal - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-4);
        assert!((rec.normal.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_scene() {
        let scene = scene_with(Vec::new());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(hit_scene(&scene, &ray, forward_interval()).is_none());
    }
}
