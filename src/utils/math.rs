use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Tolerance below which a vector is treated as having no direction.
pub const DIRECTION_EPSILON: f64 = 1e-9;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Component of `v` orthogonal to `onto` (vector rejection).
///
/// Returns `v` unchanged when `onto` carries no direction.
pub fn reject(v: &Vector3<f64>, onto: &Vector3<f64>) -> Vector3<f64> {
    let denom = onto.norm_squared();
    if denom < DIRECTION_EPSILON {
        return *v;
    }
    v - onto * (v.dot(onto) / denom)
}

/// Normalized copy of `v`, or the zero vector when `v` is too short to
/// carry a direction.
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(DIRECTION_EPSILON)
        .unwrap_or_else(Vector3::zeros)
}

/// Forward direction of a thrust transform at a given orientation.
///
/// Pure function of the orientation and the local thrust axis (+Z); the
/// live transform state is never touched when sampling an alternative
/// orientation.
#[inline]
pub fn forward_at(orientation: &UnitQuaternion<f64>) -> Vector3<f64> {
    orientation * Vector3::z()
}
