//! Lumo command line renderer.
//!
//! With no arguments, renders the built-in three-sphere demo scene in all
//! four shading passes (ambient, diffuse, specular, full) and writes one
//! PNG per pass. With a scene file argument, renders that scene's
//! configured pass.

use anyhow::{bail, Context, Result};
use log::info;
use lumo_core::{
    load_scene, CameraConfig, Material, PointLight, Scene, ShadeMode, Sphere,
};
use lumo_math::Vec3;
use lumo_renderer::{render_parallel, to_rgb_image, Camera, DEFAULT_GAMMA};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => render_demo(),
        2 => render_file(&args[1], "render.png"),
        3 => render_file(&args[1], &args[2]),
        _ => bail!("usage: lumo_cli [scene.json [output.png]]"),
    }
}

/// Render a scene file with its configured settings.
fn render_file(scene_path: &str, output_path: &str) -> Result<()> {
    let loaded = load_scene(scene_path)
        .with_context(|| format!("failed to load scene {}", scene_path))?;

    let camera = Camera::from_config(&loaded.camera, loaded.settings.width, loaded.settings.height);

    info!(
        "rendering {} ({} spheres, {:?} pass)",
        scene_path,
        loaded.scene.spheres.len(),
        loaded.settings.mode
    );

    let image = render_parallel(&loaded.scene, &camera, loaded.settings.mode);
    to_rgb_image(&image, loaded.settings.gamma)
        .save(output_path)
        .with_context(|| format!("failed to write {}", output_path))?;

    info!("wrote {}", output_path);
    Ok(())
}

/// Render the demo scene, one PNG per shading pass.
fn render_demo() -> Result<()> {
    let scene = demo_scene();
    let camera = Camera::from_config(&demo_camera(), 512, 320);

    let passes = [
        (ShadeMode::Ambient, "phong_ambient.png"),
        (ShadeMode::Diffuse, "phong_diffuse.png"),
        (ShadeMode::Specular, "phong_specular.png"),
        (ShadeMode::Full, "phong_full.png"),
    ];

    for (mode, path) in passes {
        let image = render_parallel(&scene, &camera, mode);
        to_rgb_image(&image, DEFAULT_GAMMA)
            .save(path)
            .with_context(|| format!("failed to write {}", path))?;
        info!("wrote {}", path);
    }

    Ok(())
}

/// Three colored spheres: big red, small blue, small green.
fn demo_scene() -> Scene {
    let spheres = vec![
        Sphere::new(
            Vec3::new(3.0, 0.0, 0.0),
            1.6,
            Material::new(0.15, 0.85, 0.25, 64.0, Vec3::new(0.95, 0.1, 0.1)),
        ),
        Sphere::new(
            Vec3::new(2.3, -0.55, 0.4),
            0.5,
            Material::new(0.18, 0.85, 0.3, 96.0, Vec3::new(0.1, 0.35, 0.95)),
        ),
        Sphere::new(
            Vec3::new(4.1, 0.65, -0.15),
            0.4,
            Material::new(0.18, 0.85, 0.35, 32.0, Vec3::new(0.3, 0.95, 0.3)),
        ),
    ];

    Scene::new(
        spheres,
        PointLight::new(Vec3::new(-2.0, 2.5, 2.0), 1.2),
        Vec3::splat(0.02),
    )
}

fn demo_camera() -> CameraConfig {
    CameraConfig {
        eye: Vec3::new(-8.0, 0.0, 0.0),
        look_at: Vec3::ZERO,
        vup: Vec3::Z,
        focal_dist: 6.0,
        vfov: 60.0,
    }
}
