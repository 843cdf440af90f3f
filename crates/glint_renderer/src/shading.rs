//! Recursive color evaluation.
//!
//! Implements Whitted-style shading with:
//! - Phong local illumination from a single point light (no shadow rays)
//! - Mirror reflection and Snell refraction via recursive secondary rays
//! - A hard bound on the recursion depth

use glint_core::{Color, PointLight, Scene, Sphere};
use glint_math::{reflect, refract, Ray, Vec3};

use crate::RenderConfig;

/// Fraction of the base color always visible regardless of lighting.
pub const AMBIENT_STRENGTH: f32 = 0.1;

/// Phong exponent of the white specular highlight.
pub const SPECULAR_EXPONENT: i32 = 32;

/// Offset along the normal for secondary ray origins, avoids re-hitting the
/// surface the ray just left.
pub const SURFACE_EPSILON: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// `depth` is the number of bounces taken so far; primary rays start at 0.
/// Secondary rays are only spawned while `depth < config.max_depth`, so the
/// recursion always terminates.
pub fn color_at(ray: &Ray, scene: &Scene, config: &RenderConfig, depth: u32) -> Color {
    let Some(hit) = scene.nearest_hit(ray) else {
        return config.background;
    };

    let sphere = hit.sphere;
    let material = sphere.material();
    let point = ray.at(hit.t);
    let normal = sphere.normal_at(point);

    let mut color = local_color(ray, sphere, point, normal, &config.light);

    if depth >= config.max_depth {
        return color;
    }

    let weight = material.reflectivity;

    if material.is_reflective() {
        let reflected_ray = Ray::new(
            point + normal * SURFACE_EPSILON,
            reflect(ray.direction(), normal),
        );
        let reflected = color_at(&reflected_ray, scene, config, depth + 1);
        color = color * (1.0 - weight) + reflected * weight;
    }

    if material.is_refractive() {
        // The refracted color is blended with the reflectivity weight as well
        let eta = 1.0 / material.refractive_index;
        if let Some(direction) = refract(ray.direction(), normal, eta) {
            let refracted_ray = Ray::new(point - normal * SURFACE_EPSILON, direction);
            let refracted = color_at(&refracted_ray, scene, config, depth + 1);
            color = color * (1.0 - weight) + refracted * weight;
        }
    }

    color
}

/// Ambient + diffuse + specular shading at a surface point.
///
/// The light is always treated as visible. The result is not clamped and can
/// exceed 1.0 per channel.
pub fn local_color(ray: &Ray, sphere: &Sphere, point: Vec3, normal: Vec3, light: &PointLight) -> Color {
    let base = sphere.material().color;
    let light_dir = light.direction_from(point);

    let ambient = base * AMBIENT_STRENGTH;
    let diffuse = base * normal.dot(light_dir).max(0.0);

    let view_dir = (ray.origin() - point).normalize();
    let reflect_dir = reflect(light_dir, normal);
    let specular = Color::ONE * view_dir.dot(reflect_dir).max(0.0).powi(SPECULAR_EXPONENT);

    ambient + diffuse + specular
}
