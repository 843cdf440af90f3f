//! Point light source.

use glint_math::Vec3;

/// A point light with implicit unit intensity and white color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
}

impl PointLight {
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Unit vector from `point` towards the light.
    #[inline]
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::new(5.0, 5.0, -5.0))
    }
}
