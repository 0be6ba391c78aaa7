use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    aggregate_thrust, AutoTrimConfig, EngineComponent, GimbalComponent, GimbalMount, GimbalView,
    ProducerSample, ThrustTransform, VehicleId, VehicleMassState,
};
use crate::resources::ThrustInfoCache;

/// Fill the per-step thrust cache for every vehicle with at least one
/// trim-enabled gimbal group.
///
/// Each enabled actuator queries the cache independently; the stamp guard
/// inside [`ThrustInfoCache`] keeps the O(parts) scan at one per vehicle
/// per step no matter how many actuators ask.
pub fn aggregate_thrust_system(
    time: Res<Time>,
    mut cache: ResMut<ThrustInfoCache>,
    actuators: Query<(&VehicleId, &AutoTrimConfig), With<GimbalComponent>>,
    vehicles: Query<(&VehicleId, &VehicleMassState)>,
    engines: Query<(
        &VehicleId,
        &EngineComponent,
        Option<&GimbalComponent>,
        Option<&AutoTrimConfig>,
    )>,
) {
    let stamp = time.elapsed_secs_f64();

    for (vehicle, config) in actuators.iter() {
        if !config.enabled {
            continue;
        }

        cache.fetch_or_compute(vehicle.0, stamp, || {
            let center_of_mass = vehicles
                .iter()
                .find(|(id, _)| *id == vehicle)
                .map(|(_, mass)| mass.center_of_mass)
                .unwrap_or_else(Vector3::zeros);

            let parts: Vec<(f64, &[ThrustTransform], Option<GimbalView>)> = engines
                .iter()
                .filter(|(id, ..)| *id == vehicle)
                .map(|(_, engine, gimbal, trim)| {
                    let mount = gimbal.map(|gimbal| GimbalView {
                        gimbal,
                        trim_enabled: trim.is_some_and(|t| t.enabled),
                    });
                    (engine.thrust, engine.transforms.as_slice(), mount)
                })
                .collect();

            let info = aggregate_thrust(
                parts.iter().map(|(thrust, transforms, mount)| ProducerSample {
                    thrust: *thrust,
                    transforms: *transforms,
                    mount: mount.as_ref().map(|m| m as &dyn GimbalMount),
                }),
                center_of_mass,
            );
            debug!(
                "aggregated thrust for vehicle {}: total {:.1} N, aligned {:.1} N",
                vehicle.0,
                info.total_thrust(),
                info.thrust_aligned
            );
            info
        });
    }
}
