//! Lumo Core - Scene description and configuration for Phong rendering.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Material`, `PointLight`
//! - **Configuration**: `CameraConfig`, `RenderSettings`, `ShadeMode`
//! - **Scene files**: JSON loading with validation
//!
//! # Example
//!
//! ```ignore
//! use lumo_core::config::load_scene;
//!
//! let loaded = load_scene("scene.json")?;
//! println!("Loaded {} spheres", loaded.scene.spheres.len());
//! ```

pub mod config;
pub mod scene;

// Re-export commonly used types
pub use config::{
    load_scene, load_scene_from_str, CameraConfig, ConfigError, ConfigResult, LoadedScene,
    RenderSettings, ShadeMode,
};
pub use scene::{Material, PointLight, Scene, Sphere};
