//! Scene container and nearest-hit queries.

use glint_math::{Ray, Vec3};

use crate::material::{Color, Material};
use crate::sphere::Sphere;

/// Record of the closest ray-sphere intersection.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    /// Distance along the ray
    pub t: f32,
    /// The sphere that was hit
    pub sphere: &'a Sphere,
}

/// An ordered collection of spheres.
///
/// Spheres are immutable once added. Iteration follows insertion order, which
/// decides ties between spheres hit at the same distance.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic three-sphere demo scene: red, glass-green and blue spheres
    /// in a row five units in front of the origin.
    pub fn three_spheres() -> Self {
        Self::new()
            .with_sphere(Sphere::new(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::new(Color::new(1.0, 0.0, 0.0)).with_reflectivity(0.5),
            ))
            .with_sphere(Sphere::new(
                Vec3::new(2.0, 0.0, -5.0),
                1.0,
                Material::new(Color::new(0.0, 1.0, 0.0))
                    .with_reflectivity(0.5)
                    .with_refractive_index(1.5),
            ))
            .with_sphere(Sphere::new(
                Vec3::new(-2.0, 0.0, -5.0),
                1.0,
                Material::new(Color::new(0.0, 0.0, 1.0)).with_reflectivity(0.5),
            ))
    }

    /// Add a sphere to the end of the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Builder-style variant of [`Scene::add`].
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add(sphere);
        self
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Find the closest sphere hit by `ray`.
    ///
    /// Only a strictly smaller `t` replaces the current best, so the
    /// first-inserted sphere wins ties.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;

        for sphere in &self.spheres {
            let Some(t) = sphere.intersect(ray) else {
                continue;
            };
            if nearest.map_or(true, |hit| t < hit.t) {
                nearest = Some(Hit { t, sphere });
            }
        }

        nearest
    }
}

impl FromIterator<Sphere> for Scene {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            spheres: iter.into_iter().collect(),
        }
    }
}
