//! JSON scene descriptions.
//!
//! A scene file lists spheres and may override the light position, the
//! background color and the eye position:
//!
//! ```json
//! {
//!     "light": [5.0, 5.0, -5.0],
//!     "background": [0.2, 0.2, 0.3],
//!     "spheres": [
//!         { "center": [0.0, 0.0, -5.0], "radius": 1.0,
//!           "color": [1.0, 0.0, 0.0], "reflectivity": 0.5 },
//!         { "center": [2.0, 0.0, -5.0], "radius": 1.0,
//!           "color": [0.0, 1.0, 0.0], "reflectivity": 0.5,
//!           "refractive_index": 1.5 }
//!     ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glint_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::light::PointLight;
use crate::material::{Color, Material};
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {index} has invalid radius {radius} (must be positive)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index} has invalid refractive index {value} (must be at least 1.0)")]
    InvalidRefractiveIndex { index: usize, value: f32 },
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

fn default_refractive_index() -> f32 {
    1.0
}

/// One sphere entry of a scene file.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDesc {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub reflectivity: f32,
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f32,
}

impl SphereDesc {
    fn validate(&self, index: usize) -> SceneResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                index,
                radius: self.radius,
            });
        }
        if !(self.refractive_index.is_finite() && self.refractive_index >= 1.0) {
            return Err(SceneError::InvalidRefractiveIndex {
                index,
                value: self.refractive_index,
            });
        }
        if !(0.0..=1.0).contains(&self.reflectivity) {
            log::warn!(
                "Sphere {} has reflectivity {} outside [0, 1]",
                index,
                self.reflectivity
            );
        }
        Ok(())
    }

    fn to_sphere(&self) -> Sphere {
        let material = Material::new(Color::from_array(self.color))
            .with_reflectivity(self.reflectivity)
            .with_refractive_index(self.refractive_index);
        Sphere::new(Vec3::from_array(self.center), self.radius, material)
    }
}

/// A deserialized scene file.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
    /// Light position, defaults to the renderer's light
    #[serde(default)]
    pub light: Option<[f32; 3]>,
    /// Background color, defaults to the renderer's background
    #[serde(default)]
    pub background: Option<[f32; 3]>,
    /// Eye position, defaults to the origin
    #[serde(default)]
    pub eye: Option<[f32; 3]>,
}

impl SceneDescription {
    /// Parse a scene description from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every sphere and build the scene in file order.
    pub fn build(&self) -> SceneResult<Scene> {
        for (index, desc) in self.spheres.iter().enumerate() {
            desc.validate(index)?;
        }
        let scene: Scene = self.spheres.iter().map(SphereDesc::to_sphere).collect();
        log::debug!("Built scene with {} spheres", scene.len());
        Ok(scene)
    }

    /// Light override, if the file sets one.
    pub fn light(&self) -> Option<PointLight> {
        self.light.map(|p| PointLight::new(Vec3::from_array(p)))
    }

    /// Background override, if the file sets one.
    pub fn background(&self) -> Option<Color> {
        self.background.map(Color::from_array)
    }

    /// Eye position override, if the file sets one.
    pub fn eye(&self) -> Option<Vec3> {
        self.eye.map(Vec3::from_array)
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::debug!("Loading scene file {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let description: SceneDescription = serde_json::from_reader(reader)?;

    log::debug!(
        "Scene file {} lists {} spheres",
        path.display(),
        description.spheres.len()
    );
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_SPHERES: &str = r#"{
        "light": [5.0, 5.0, -5.0],
        "spheres": [
            { "center": [0.0, 0.0, -5.0], "radius": 1.0, "color": [1.0, 0.0, 0.0], "reflectivity": 0.5 },
            { "center": [2.0, 0.0, -5.0], "radius": 1.0, "color": [0.0, 1.0, 0.0], "reflectivity": 0.5, "refractive_index": 1.5 },
            { "center": [-2.0, 0.0, -5.0], "radius": 1.0, "color": [0.0, 0.0, 1.0], "reflectivity": 0.5 }
        ]
    }"#;

    #[test]
    fn test_parse_matches_builtin_scene() {
        let _ = env_logger::builder().is_test(true).try_init();

        let desc = SceneDescription::from_json_str(THREE_SPHERES).unwrap();
        let scene = desc.build().unwrap();

        assert_eq!(scene.spheres(), Scene::three_spheres().spheres());
        assert_eq!(desc.light(), Some(PointLight::default()));
        assert_eq!(desc.background(), None);
        assert_eq!(desc.eye(), None);
    }

    #[test]
    fn test_optional_sphere_fields_default() {
        let desc = SceneDescription::from_json_str(
            r#"{ "spheres": [ { "center": [0, 0, -3], "radius": 0.5, "color": [0.2, 0.4, 0.6] } ] }"#,
        )
        .unwrap();
        let scene = desc.build().unwrap();
        let material = scene.spheres()[0].material();

        assert_eq!(material.reflectivity, 0.0);
        assert_eq!(material.refractive_index, 1.0);
        assert_eq!(scene.spheres()[0].radius(), 0.5);
    }

    #[test]
    fn test_empty_scene_is_valid() {
        let desc = SceneDescription::from_json_str("{}").unwrap();
        assert!(desc.build().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let desc = SceneDescription::from_json_str(
            r#"{ "spheres": [
                { "center": [0, 0, -3], "radius": 1.0, "color": [1, 1, 1] },
                { "center": [0, 0, -3], "radius": 0.0, "color": [1, 1, 1] }
            ] }"#,
        )
        .unwrap();

        match desc.build() {
            Err(SceneError::InvalidRadius { index, radius }) => {
                assert_eq!(index, 1);
                assert_eq!(radius, 0.0);
            }
            other => panic!("expected InvalidRadius, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_refractive_index_rejected() {
        let desc = SceneDescription::from_json_str(
            r#"{ "spheres": [ { "center": [0, 0, -3], "radius": 1.0, "color": [1, 1, 1], "refractive_index": 0.5 } ] }"#,
        )
        .unwrap();

        assert!(matches!(
            desc.build(),
            Err(SceneError::InvalidRefractiveIndex { index: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SceneDescription::from_json_str(r#"{ "lights": [] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn test_load_scene_from_file() {
        let path = std::env::temp_dir().join(format!("glint_scene_{}.json", std::process::id()));
        std::fs::write(&path, THREE_SPHERES).unwrap();

        let desc = load_scene(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(desc.spheres.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scene("/nonexistent/glint/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
