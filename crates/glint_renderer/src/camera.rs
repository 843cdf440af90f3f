//! Camera for ray generation.
//!
//! Maps pixel coordinates linearly onto [-1, 1] in both axes and shoots rays
//! through the plane z = -1 in front of the eye. There is no field of view and
//! no aspect ratio correction.

use glint_math::{Ray, Vec3};

/// Camera for generating primary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    eye: Vec3,
}

impl Camera {
    /// Create a camera at the origin for the given resolution.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            eye: Vec3::ZERO,
        }
    }

    /// Set the eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Get the eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.image_width as usize * self.image_height as usize
    }

    /// Generate the primary ray for pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let nx = to_ndc(x, self.image_width);
        let ny = to_ndc(y, self.image_height);
        Ray::new(self.eye, Vec3::new(nx, ny, -1.0))
    }
}

/// Map a pixel index onto [-1, 1]. A single-pixel axis maps to 0.
#[inline]
fn to_ndc(i: u32, extent: u32) -> f32 {
    if extent <= 1 {
        return 0.0;
    }
    i as f32 / (extent - 1) as f32 * 2.0 - 1.0
}
