//! glint core - scene types for the Whitted-style renderer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Material`, `PointLight`
//! - **Scene files**: JSON scene descriptions loaded through serde
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{load_scene, Scene};
//!
//! let description = load_scene("scenes/three_spheres.json")?;
//! let scene = description.build()?;
//! println!("Loaded {} spheres", scene.len());
//! ```

pub mod description;
pub mod light;
pub mod material;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use description::{load_scene, SceneDescription, SceneError, SceneResult, SphereDesc};
pub use light::PointLight;
pub use material::{Color, Material};
pub use scene::{Hit, Scene};
pub use sphere::Sphere;
