//! Render configuration and the sequential render loop.

use std::time::Instant;

use glint_core::{Color, PointLight, Scene};

use crate::shading::color_at;
use crate::{Camera, ImageBuffer, RenderError, RenderResult};

/// Background color when a ray doesn't hit anything.
pub const DEFAULT_BACKGROUND: Color = Color::new(0.2, 0.2, 0.3);

/// Number of reflection/refraction bounces after the primary hit.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// The single point light
    pub light: PointLight,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Maximum number of secondary bounces
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            light: PointLight::default(),
            background: DEFAULT_BACKGROUND,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Set the light.
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.light = light;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the maximum bounce depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.get_ray(x, y);
    color_at(&ray, scene, config, 0)
}

/// Render the entire scene to an image buffer.
///
/// Pixels are shaded one after another, row by row. The output is fully
/// deterministic for a given scene, camera and configuration.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let (width, height) = (camera.image_width, camera.image_height);
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidResolution { width, height });
    }

    log::info!(
        "Rendering {}x{} ({} pixels) with {} spheres (max depth {})",
        width,
        height,
        camera.pixel_count(),
        scene.len(),
        config.max_depth
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{quantize, write_ppm};

    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;

    fn three_sphere_image() -> ImageBuffer {
        let scene = Scene::three_spheres();
        let camera = Camera::new(WIDTH, HEIGHT);
        render(&scene, &camera, &RenderConfig::default()).unwrap()
    }

    fn rgb(image: &ImageBuffer, x: u32, y: u32) -> [i32; 3] {
        image.get(x, y).to_array().map(quantize)
    }

    #[test]
    fn test_render_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.light.position, glint_math::Vec3::new(5.0, 5.0, -5.0));
        assert_eq!(config.background, Color::new(0.2, 0.2, 0.3));
        assert_eq!(config.max_depth, 2);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let scene = Scene::three_spheres();
        let config = RenderConfig::default();

        for camera in [Camera::new(0, 10), Camera::new(10, 0)] {
            assert!(matches!(
                render(&scene, &camera, &config),
                Err(RenderError::InvalidResolution { .. })
            ));
        }
    }

    #[test]
    fn test_empty_scene_is_all_background() {
        let image = render(&Scene::new(), &Camera::new(8, 6), &RenderConfig::default()).unwrap();
        assert!(image.pixels.iter().all(|&c| c == DEFAULT_BACKGROUND));
    }

    #[test]
    fn test_three_spheres_end_to_end() {
        let image = three_sphere_image();

        // Corners see nothing but the background
        for (x, y) in [(0, 0), (WIDTH - 1, 0), (0, HEIGHT - 1), (WIDTH - 1, HEIGHT - 1)] {
            assert_eq!(rgb(&image, x, y), [51, 51, 76], "pixel ({x}, {y})");
        }

        // Image center hits the red sphere
        let center = rgb(&image, 400, 300);
        assert_ne!(center, [51, 51, 76]);
        assert!(center[0] > center[1], "center pixel {center:?}");
        assert!(center[0] >= center[2], "center pixel {center:?}");

        let mut ppm = Vec::new();
        write_ppm(&image, &mut ppm).unwrap();
        let text = String::from_utf8(ppm).unwrap();

        assert!(text.starts_with("P3\n800 600\n255\n"));
        assert_eq!(text.lines().count(), 3 + (WIDTH * HEIGHT) as usize);
        assert_eq!(text.lines().nth(3), Some("51 51 76"));
    }

    #[test]
    fn test_render_is_bit_identical() {
        let scene = Scene::three_spheres();
        let camera = Camera::new(64, 48);
        let config = RenderConfig::default();

        let a = render(&scene, &camera, &config).unwrap();
        let b = render(&scene, &camera, &config).unwrap();

        let bits = |image: &ImageBuffer| -> Vec<u32> {
            image
                .pixels
                .iter()
                .flat_map(|c| c.to_array().map(f32::to_bits))
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_render_pixel_matches_render() {
        let scene = Scene::three_spheres();
        let camera = Camera::new(40, 30);
        let config = RenderConfig::default();

        let image = render(&scene, &camera, &config).unwrap();
        assert_eq!(image.get(13, 17), render_pixel(&camera, &scene, 13, 17, &config));
    }
}
