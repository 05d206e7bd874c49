//! Per-pixel render loop.
//!
//! Each pixel is a pure function of (scene, camera, light, pixel
//! coordinates): generate the ray, resolve the nearest hit, shade or fall
//! back to the background. The serial and bucket-parallel entry points
//! produce identical buffers.

use log::info;
use lumo_core::{Scene, ShadeMode};
use lumo_math::Vec3;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::Camera;
use crate::hit::hit_scene;
use crate::intersect::forward_interval;
use crate::shading::shade;

/// Row-major buffer of linear RGB pixels in [0, 1].
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render a single pixel.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: u32, y: u32, mode: ShadeMode) -> Vec3 {
    let ray = camera.get_ray(x, y);

    match hit_scene(scene, &ray, forward_interval()) {
        Some(rec) => shade(scene, &ray, &rec, mode),
        None => scene.background,
    }
}

/// Render the entire scene serially.
pub fn render(scene: &Scene, camera: &Camera, mode: ShadeMode) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(scene, camera, x, y, mode);
            image.set(x, y, color);
        }
    }

    image
}

/// Render the scene with rayon, one bucket at a time.
///
/// Buckets cover disjoint pixel ranges, and every pixel is independent of
/// every other, so the result is identical to the serial renderer no
/// matter how the buckets are scheduled.
pub fn render_parallel(scene: &Scene, camera: &Camera, mode: ShadeMode) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height;
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);

    info!(
        "rendering {}x{} in {} buckets on {} threads",
        width,
        height,
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = std::time::Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, scene, camera, mode)))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in results {
        let bucket = result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                image.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    info!("rendered in {:.2?}", start.elapsed());

    image
}
