//! Sphere primitive for ray tracing.

use glint_math::{Ray, Vec3};

use crate::material::Material;

/// A sphere primitive with its surface material.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            material,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect a ray with the sphere.
    ///
    /// Only the near root of `|o + t*d - c|^2 = r^2` is considered, and only
    /// when it lies strictly in front of the ray origin. A ray starting inside
    /// the sphere therefore never hits it.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        (t > 0.0).then_some(t)
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
