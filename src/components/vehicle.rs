use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable vehicle identity, shared by the vehicle entity and every part
/// that belongs to it. Used as the per-step cache key.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub Uuid);

impl VehicleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

/// Mass state of a vehicle as reported by the host physics for the current
/// step.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VehicleMassState {
    /// Center of mass in vehicle space [m]
    pub center_of_mass: Vector3<f64>,
}

impl VehicleMassState {
    pub fn new(center_of_mass: Vector3<f64>) -> Self {
        Self { center_of_mass }
    }
}

impl Default for VehicleMassState {
    fn default() -> Self {
        Self {
            center_of_mass: Vector3::zeros(),
        }
    }
}
