// Re-export glam for convenience
pub use glam::*;

// glint math types
mod optics;
mod ray;
pub use optics::{reflect, refract};
pub use ray::Ray;
