use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use autotrim::components::TrimTelemetry;

/// Assert two directions agree to within `epsilon` (euclidean distance).
#[track_caller]
pub fn assert_direction_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    let distance = (actual - expected).norm();
    assert!(
        distance < epsilon,
        "direction mismatch: {actual:?} vs {expected:?} (distance {distance})"
    );
}

/// Assert the telemetry reports no applied correction.
#[track_caller]
pub fn assert_telemetry_clear(telemetry: &TrimTelemetry) {
    assert_eq!(
        telemetry,
        &TrimTelemetry::default(),
        "expected cleared telemetry"
    );
}
