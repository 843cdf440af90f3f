//! glint renderer - recursive Whitted-style ray tracing.
//!
//! Shades every camera ray with ambient, diffuse and specular terms from a
//! single point light, then follows mirror reflection and refraction for a
//! bounded number of bounces.

mod buffer;
mod camera;
mod error;
mod output;
mod renderer;
mod shading;

pub use buffer::ImageBuffer;
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use output::{quantize, save, save_png, save_ppm, write_ppm, OutputFormat};
pub use renderer::{render, render_pixel, RenderConfig, DEFAULT_BACKGROUND, DEFAULT_MAX_DEPTH};
pub use shading::{color_at, local_color, AMBIENT_STRENGTH, SPECULAR_EXPONENT, SURFACE_EPSILON};

/// Re-export scene types from glint_core
pub use glint_core::{Color, Material, PointLight, Scene, Sphere};

/// Re-export Vec3 and Ray from glint_math
pub use glint_math::{Ray, Vec3};
