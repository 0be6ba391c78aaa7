use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::forward_at;

/// One thrust-producing point on an engine.
///
/// The local thrust axis is +Z; the live forward direction is that axis
/// rotated by `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustTransform {
    /// Position in vehicle space [m]
    pub position: Vector3<f64>,

    /// Current orientation of the thrust axis
    pub orientation: UnitQuaternion<f64>,
}

impl ThrustTransform {
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Transform pointing its thrust axis along `forward`.
    pub fn aimed_at(position: Vector3<f64>, forward: Vector3<f64>) -> Self {
        let orientation = UnitQuaternion::rotation_between(&Vector3::z(), &forward)
            .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI));
        Self {
            position,
            orientation,
        }
    }

    /// Forward direction at the current orientation.
    pub fn forward(&self) -> Vector3<f64> {
        forward_at(&self.orientation)
    }
}

/// Component for an engine-like thrust producer.
///
/// Read-only to the trim core except for the transform orientations, which
/// the trim systems steer when a gimbal mount is present on the same entity.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct EngineComponent {
    /// Thrust transforms, one per nozzle
    pub transforms: Vec<ThrustTransform>,

    /// Current scalar thrust [N]
    pub thrust: f64,
}

impl EngineComponent {
    pub fn new(transforms: Vec<ThrustTransform>, thrust: f64) -> Self {
        Self { transforms, thrust }
    }

    /// Single-nozzle engine pointing along `forward`.
    pub fn single(position: Vector3<f64>, forward: Vector3<f64>, thrust: f64) -> Self {
        Self {
            transforms: vec![ThrustTransform::aimed_at(position, forward)],
            thrust,
        }
    }

    pub fn is_firing(&self) -> bool {
        self.thrust > 0.0
    }
}
