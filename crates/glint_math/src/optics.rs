//! Mirror reflection and Snell's law refraction.

use crate::Vec3;

/// Reflect `v` about the normal `n`.
///
/// `n` is expected to be unit length. Returns `v - 2 * dot(v, n) * n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * v.dot(n))
}

/// Refract the incident direction `v` through a surface with normal `n`.
///
/// `eta` is the ratio of refractive indices (incident over transmitted).
/// Returns `None` on total internal reflection, when no light is transmitted.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let cos_i = -n.dot(v);
    let sin2_t = eta * eta * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return None;
    }

    let cos_t = (1.0 - sin2_t).sqrt();
    Some(v * eta + n * (eta * cos_i - cos_t))
}
