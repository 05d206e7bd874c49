//! Camera for ray generation.

use lumo_core::CameraConfig;
use lumo_math::{normalize_safe, Ray, Vec3};

/// Pinhole camera generating one ray per pixel.
///
/// Pixel (0, 0) is the top-left corner of the image. Ray directions are
/// unit length; downstream intersection code relies on that and does not
/// re-normalize.
#[derive(Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    eye: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Projection settings
    vfov: f32,       // Vertical field of view in degrees
    focal_dist: f32, // Distance from the eye to the projection plane

    // Cached computed values (set by initialize())
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 512,
            image_height: 320,
            eye: Vec3::ZERO,
            look_at: Vec3::X,
            vup: Vec3::Z,
            vfov: 90.0,
            focal_dist: 1.0,
            // Cached values (initialized to defaults)
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, eye: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.eye = eye;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set projection settings.
    pub fn with_lens(mut self, vfov: f32, focal_dist: f32) -> Self {
        self.vfov = vfov;
        self.focal_dist = focal_dist;
        self
    }

    /// Build an initialized camera from a configuration struct.
    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Camera::new()
            .with_resolution(width, height)
            .with_position(config.eye, config.look_at, config.vup)
            .with_lens(config.vfov, config.focal_dist);
        camera.initialize();
        camera
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        // Camera basis: right/up span the projection plane. With the eye
        // on -x and vup = +z this makes column 0 the -y edge and row 0
        // the +z edge of the plane.
        let forward = normalize_safe(self.look_at - self.eye);
        let right = normalize_safe(self.vup.cross(forward));
        let up = forward.cross(right);

        // Half-extents of the projection plane at the focal distance
        let theta = self.vfov.to_radians();
        let half_v = self.focal_dist * (theta / 2.0).tan();
        let half_u = half_v * (self.image_width as f32 / self.image_height as f32);

        // Viewport vectors across the top edge and down the left edge
        let viewport_u = 2.0 * half_u * right;
        let viewport_v = -2.0 * half_v * up;

        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        let viewport_upper_left =
            self.eye + self.focal_dist * forward - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Generate the ray through the center of pixel (x, y).
    ///
    /// x is the column (0 = left), y is the row (0 = top).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let pixel_center =
            self.pixel00_loc + (x as f32) * self.pixel_delta_u + (y as f32) * self.pixel_delta_v;

        Ray::new(self.eye, normalize_safe(pixel_center - self.eye))
    }

    /// Eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
