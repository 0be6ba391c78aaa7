use bevy::prelude::*;
use nalgebra::Vector3;

use autotrim::components::{
    AutoTrimBundle, AutoTrimConfig, EngineComponent, ThrustTransform, VehicleId, VehicleMassState,
};

pub struct TestVehicle {
    pub id: VehicleId,
    pub entity: Entity,
}

pub fn spawn_vehicle(app: &mut App, center_of_mass: Vector3<f64>) -> TestVehicle {
    let id = VehicleId::new();
    let entity = app
        .world_mut()
        .spawn((id, VehicleMassState::new(center_of_mass)))
        .id();
    TestVehicle { id, entity }
}

/// Engine with no gimbal; always buckets into the trim-disabled totals.
pub fn spawn_fixed_engine(
    app: &mut App,
    vehicle: &TestVehicle,
    position: Vector3<f64>,
    forward: Vector3<f64>,
    thrust: f64,
) -> Entity {
    app.world_mut()
        .spawn((vehicle.id, EngineComponent::single(position, forward, thrust)))
        .id()
}

/// Gimbaled engine with an auto-trim group; the spawn orientation becomes
/// the neutral pose.
pub fn spawn_trim_engine(
    app: &mut App,
    vehicle: &TestVehicle,
    position: Vector3<f64>,
    forward: Vector3<f64>,
    thrust: f64,
    config: AutoTrimConfig,
) -> Entity {
    let engine = EngineComponent::single(position, forward, thrust);
    let group = AutoTrimBundle::for_engine(&engine, config);
    app.world_mut().spawn((vehicle.id, engine, group)).id()
}

/// Gimbaled twin-nozzle engine sharing one auto-trim group.
pub fn spawn_twin_trim_engine(
    app: &mut App,
    vehicle: &TestVehicle,
    positions: [Vector3<f64>; 2],
    forward: Vector3<f64>,
    thrust: f64,
    config: AutoTrimConfig,
) -> Entity {
    let engine = EngineComponent::new(
        vec![
            ThrustTransform::aimed_at(positions[0], forward),
            ThrustTransform::aimed_at(positions[1], forward),
        ],
        thrust,
    );
    let group = AutoTrimBundle::for_engine(&engine, config);
    app.world_mut().spawn((vehicle.id, engine, group)).id()
}

pub fn set_trim_enabled(app: &mut App, entity: Entity, enabled: bool) {
    app.world_mut()
        .get_mut::<AutoTrimConfig>(entity)
        .expect("entity has no trim config")
        .enabled = enabled;
}

pub fn set_thrust(app: &mut App, entity: Entity, thrust: f64) {
    app.world_mut()
        .get_mut::<EngineComponent>(entity)
        .expect("entity has no engine")
        .thrust = thrust;
}

/// Unit forward direction with a perpendicular X component of sin = 0.1,
/// used by the hand-computed offset scenarios.
pub fn offset_forward() -> Vector3<f64> {
    Vector3::new(0.1, 0.0, -(1.0_f64 - 0.01).sqrt())
}
