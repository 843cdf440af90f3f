//! Surface material of a sphere.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1, never clamped here)
pub type Color = Vec3;

/// Surface properties used by the shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base color used by the ambient and diffuse terms
    pub color: Color,

    /// Blend weight of secondary rays (intended range 0-1, not enforced)
    pub reflectivity: f32,

    /// Index of refraction (1.0 = opaque, > 1.0 transmits light)
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(0.5, 0.5, 0.5), // Grey default
            reflectivity: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create an opaque, non-reflective material with the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the index of refraction.
    pub fn with_refractive_index(mut self, refractive_index: f32) -> Self {
        self.refractive_index = refractive_index;
        self
    }

    /// Whether reflected rays contribute to this surface.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }

    /// Whether refracted rays contribute to this surface.
    pub fn is_refractive(&self) -> bool {
        self.refractive_index > 1.0
    }
}
