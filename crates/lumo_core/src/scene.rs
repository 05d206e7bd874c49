//! Scene description types.
//!
//! A scene is an ordered list of spheres plus a single point light and a
//! background color. Everything here is plain immutable data: the scene is
//! built once, validated, and then shared read-only with the renderer
//! (including across worker threads).

use lumo_math::Vec3;

use crate::config::{ConfigError, ConfigResult};

/// Phong material coefficients plus a base color.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Ambient coefficient
    pub ka: f32,
    /// Diffuse coefficient
    pub kd: f32,
    /// Specular coefficient
    pub ks: f32,
    /// Specular shininess exponent
    pub shininess: f32,
    /// Base color (linear RGB, 0-1)
    pub color: Vec3,
}

impl Material {
    /// Create a new material.
    pub fn new(ka: f32, kd: f32, ks: f32, shininess: f32, color: Vec3) -> Self {
        Self {
            ka,
            kd,
            ks,
            shininess,
            color,
        }
    }

    /// Create a grey material from a scalar base intensity.
    ///
    /// Monochrome scenes are just RGB scenes with equal channels.
    pub fn grey(ka: f32, kd: f32, ks: f32, shininess: f32) -> Self {
        Self::new(ka, kd, ks, shininess, Vec3::ONE)
    }
}

/// A sphere primitive with its material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point in world coordinates
    pub center: Vec3,
    /// Radius (must be positive, see `Scene::validate`)
    pub radius: f32,
    /// Material properties
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A single point light.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// Position in world coordinates
    pub position: Vec3,
    /// Scalar intensity
    pub intensity: f32,
    /// Light color (linear RGB); white for the untinted variant
    pub color: Vec3,
}

impl PointLight {
    /// Create a white point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
            color: Vec3::ONE,
        }
    }

    /// Create a colored point light.
    pub fn with_color(position: Vec3, intensity: f32, color: Vec3) -> Self {
        Self {
            position,
            intensity,
            color,
        }
    }
}

/// The complete scene handed to the renderer.
///
/// Sphere order matters only as a tie-break: when two spheres intersect a
/// ray at exactly the same distance, the first-registered sphere wins.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Spheres, in registration order
    pub spheres: Vec<Sphere>,
    /// The single point light
    pub light: PointLight,
    /// Background color for rays that miss everything
    pub background: Vec3,
}

impl Scene {
    /// Create a new scene.
    pub fn new(spheres: Vec<Sphere>, light: PointLight, background: Vec3) -> Self {
        Self {
            spheres,
            light,
            background,
        }
    }

    /// Check scene geometry, rejecting spheres with non-positive or
    /// non-finite radii.
    pub fn validate(&self) -> ConfigResult<()> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) || !sphere.radius.is_finite() {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }
        Ok(())
    }
}
