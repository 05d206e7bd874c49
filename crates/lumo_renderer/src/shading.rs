//! Phong shading and the hard-shadow test.

use lumo_core::{Material, PointLight, Scene, ShadeMode};
use lumo_math::{normalize_safe, reflect, Interval, Ray, Vec3};

use crate::hit::HitRecord;
use crate::intersect::{ray_sphere, HIT_EPSILON};

/// Offset along the surface normal for shadow-ray origins.
pub const SHADOW_BIAS: f32 = 1e-3;

/// The three Phong components, evaluated once per hit.
///
/// Shadow attenuation is already folded into the diffuse and specular
/// terms; ambient is never attenuated.
#[derive(Debug, Clone, Copy)]
pub struct PhongTerms {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl PhongTerms {
    /// Sum the terms selected by `mode`, clamped to [0, 1].
    ///
    /// The four modes are four presentations of the same computation,
    /// not different algorithms.
    pub fn compose(&self, mode: ShadeMode) -> Vec3 {
        let color = match mode {
            ShadeMode::Ambient => self.ambient,
            ShadeMode::Diffuse => self.ambient + self.diffuse,
            ShadeMode::Specular => self.ambient + self.specular,
            ShadeMode::Full => self.ambient + self.diffuse + self.specular,
        };
        color.clamp(Vec3::ZERO, Vec3::ONE)
    }
}

/// Evaluate the Phong model at a hit point.
///
/// `normal` and `view` are unit vectors; `view` points from the hit point
/// back toward the camera. `shadow` is the attenuation factor from
/// `shadow_factor` (0 = occluded, 1 = lit).
pub fn phong_terms(
    material: &Material,
    light: &PointLight,
    p: Vec3,
    normal: Vec3,
    view: Vec3,
    shadow: f32,
) -> PhongTerms {
    let ambient = material.ka * material.color;

    let l = normalize_safe(light.position - p);
    let ndotl = normal.dot(l);
    let li = light.intensity * light.color;

    // A light at or below the horizon contributes neither diffuse nor
    // specular light.
    let (diffuse, specular) = if ndotl > 0.0 {
        let r = normalize_safe(reflect(normal, l));
        let rdotv = r.dot(view).max(0.0);
        (
            material.kd * material.color * li * ndotl * shadow,
            material.ks * li * rdotv.powf(material.shininess) * shadow,
        )
    } else {
        (Vec3::ZERO, Vec3::ZERO)
    };

    PhongTerms {
        ambient,
        diffuse,
        specular,
    }
}

/// Hard-shadow test: 0.0 if any sphere occludes the light, 1.0 otherwise.
///
/// The shadow ray starts a small bias above the surface so the sphere
/// that produced the hit point cannot occlude it through rounding error;
/// there is no index-based self-exclusion.
pub fn shadow_factor(scene: &Scene, p: Vec3, normal: Vec3) -> f32 {
    let origin = p + SHADOW_BIAS * normal;
    let to_light = scene.light.position - origin;
    let light_dist = to_light.length();
    let ray = Ray::new(origin, normalize_safe(to_light));

    // Only occluders strictly between the surface and the light count
    let ray_t = Interval::new(HIT_EPSILON, light_dist);
    for sphere in &scene.spheres {
        if ray_sphere(&ray, sphere.center, sphere.radius, ray_t).is_some() {
            return 0.0;
        }
    }

    1.0
}

/// Shade a hit point: shadow test plus Phong evaluation for `mode`.
pub fn shade(scene: &Scene, ray: &Ray, rec: &HitRecord, mode: ShadeMode) -> Vec3 {
    let material = &scene.spheres[rec.sphere].material;
    let view = normalize_safe(-ray.direction());
    let shadow = shadow_factor(scene, rec.p, rec.normal);

    phong_terms(material, &scene.light, rec.p, rec.normal, view, shadow).compose(mode)
}
