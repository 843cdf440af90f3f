//! Three sphere example.
//!
//! Renders the red, glass-green and blue sphere scene and saves it to PPM.
//!
//! Run with: cargo run --example three_spheres

use glint_renderer::{render, save_ppm, Camera, RenderConfig, Scene};

fn main() {
    println!("glint - Three Spheres Example");
    println!("=============================");

    let scene = Scene::three_spheres();
    let camera = Camera::new(800, 600);
    let config = RenderConfig::default();

    println!(
        "Rendering {}x{} with {} spheres...",
        camera.image_width,
        camera.image_height,
        scene.len()
    );

    let start = std::time::Instant::now();
    let image = render(&scene, &camera, &config).expect("Failed to render");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}
