//! Lumo Renderer - CPU Phong ray tracing.
//!
//! A single-bounce ray tracer for sphere scenes: pinhole camera rays,
//! analytic ray-sphere intersection, Phong shading with hard shadows,
//! and clamp/gamma post-processing into a display-ready image.

mod bucket;
mod camera;
mod hit;
mod intersect;
mod post;
mod renderer;
mod shading;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hit::{hit_scene, HitRecord};
pub use intersect::{forward_interval, ray_sphere, HIT_EPSILON};
pub use post::{color_to_rgb8, linear_to_gamma, to_rgb_image, tone_map, DEFAULT_GAMMA};
pub use renderer::{render, render_parallel, render_pixel, ImageBuffer};
pub use shading::{phong_terms, shade, shadow_factor, PhongTerms, SHADOW_BIAS};

/// Re-export the scene types the renderer consumes
pub use lumo_core::{CameraConfig, Material, PointLight, Scene, ShadeMode, Sphere};

/// Re-export Vec3 and common math types from lumo_math
pub use lumo_math::{Interval, Ray, Vec3};
