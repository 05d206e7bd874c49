//! Render configuration and JSON scene-file loading.
//!
//! All parameters the renderer needs arrive through explicit structs; there
//! is no module-level state. Scene files are JSON: a `render` block, a
//! `camera` block, a `light`, an optional `background`, and a list of
//! sphere descriptors with inline material coefficients. `Vec3` fields are
//! written as `[x, y, z]` arrays.

use lumo_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::{Material, PointLight, Scene, Sphere};

/// Errors from configuration validation or scene-file loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sphere {index} has invalid radius {radius} (must be positive and finite)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("invalid image dimensions {width}x{height} (must be non-zero)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid focal distance {0} (must be positive and finite)")]
    InvalidFocalDistance(f32),

    #[error("invalid field of view {0} degrees (must be in (0, 180))")]
    InvalidFov(f32),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which Phong terms the rendered image presents.
///
/// All four modes evaluate the same shading computation; they only differ
/// in which terms are summed into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeMode {
    /// Ambient term only
    Ambient,
    /// Ambient + diffuse
    Diffuse,
    /// Ambient + specular
    Specular,
    /// Ambient + diffuse + specular
    #[default]
    Full,
}

/// Pinhole camera parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CameraConfig {
    /// Eye position
    pub eye: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
    /// World-space up hint
    #[serde(default = "default_vup")]
    pub vup: Vec3,
    /// Distance from the eye to the projection plane
    pub focal_dist: f32,
    /// Vertical field of view in degrees
    pub vfov: f32,
}

fn default_vup() -> Vec3 {
    Vec3::Z
}

impl CameraConfig {
    /// Check camera parameters.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.focal_dist > 0.0) || !self.focal_dist.is_finite() {
            return Err(ConfigError::InvalidFocalDistance(self.focal_dist));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(ConfigError::InvalidFov(self.vfov));
        }
        Ok(())
    }
}

/// Image and output settings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Which Phong terms to present
    #[serde(default)]
    pub mode: ShadeMode,
    /// Gamma exponent applied by the post-processor
    #[serde(default = "default_gamma")]
    pub gamma: f32,
}

fn default_gamma() -> f32 {
    2.2
}

impl RenderSettings {
    /// Check image settings.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// A fully parsed and validated scene file.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub scene: Scene,
    pub camera: CameraConfig,
    pub settings: RenderSettings,
}

#[derive(Deserialize)]
struct SphereDesc {
    center: Vec3,
    radius: f32,
    ka: f32,
    kd: f32,
    ks: f32,
    shininess: f32,
    #[serde(default = "default_color")]
    color: Vec3,
}

fn default_color() -> Vec3 {
    Vec3::ONE
}

#[derive(Deserialize)]
struct LightDesc {
    position: Vec3,
    intensity: f32,
    #[serde(default = "default_color")]
    color: Vec3,
}

#[derive(Deserialize)]
struct SceneFile {
    render: RenderSettings,
    camera: CameraConfig,
    light: LightDesc,
    #[serde(default)]
    background: Vec3,
    spheres: Vec<SphereDesc>,
}

/// Load and validate a JSON scene file from disk.
pub fn load_scene(path: &str) -> ConfigResult<LoadedScene> {
    let data = std::fs::read_to_string(path)?;
    load_scene_from_str(&data)
}

/// Load and validate a JSON scene from a string.
pub fn load_scene_from_str(json: &str) -> ConfigResult<LoadedScene> {
    let file: SceneFile = serde_json::from_str(json)?;

    let spheres = file
        .spheres
        .into_iter()
        .map(|s| {
            Sphere::new(
                s.center,
                s.radius,
                Material::new(s.ka, s.kd, s.ks, s.shininess, s.color),
            )
        })
        .collect();

    let light = PointLight::with_color(file.light.position, file.light.intensity, file.light.color);
    let scene = Scene::new(spheres, light, file.background);

    scene.validate()?;
    file.camera.validate()?;
    file.render.validate()?;

    log::debug!(
        "loaded scene: {} spheres, {}x{} {:?}",
        scene.spheres.len(),
        file.render.width,
        file.render.height,
        file.render.mode
    );

    Ok(LoadedScene {
        scene,
        camera: file.camera,
        settings: file.render,
    })
}
