use bevy::prelude::*;

use crate::components::{
    solve_trim, AutoTrimConfig, EngineComponent, GimbalComponent, TrimTelemetry, VehicleId,
};
use crate::resources::ThrustInfoCache;
use crate::utils::TrimError;

/// Apply the corrective rotation to every trim-enabled gimbal group, or
/// reset it to neutral when no correction is possible.
///
/// Runs after [`aggregate_thrust_system`](super::aggregate_thrust_system)
/// in the same step. Every branch starts from the fixed neutral pose, so a
/// failed or skipped step self-heals on the next one. Telemetry is kept in
/// sync when the entity carries a [`TrimTelemetry`] component; spawning
/// through [`AutoTrimBundle`](crate::components::AutoTrimBundle) provides
/// the full set.
pub fn apply_trim_system(
    time: Res<Time>,
    cache: Res<ThrustInfoCache>,
    mut groups: Query<(
        &VehicleId,
        &mut EngineComponent,
        &GimbalComponent,
        &AutoTrimConfig,
        Option<&mut TrimTelemetry>,
    )>,
) {
    let stamp = time.elapsed_secs_f64();

    for (vehicle, mut engine, gimbal, config, mut telemetry) in groups.iter_mut() {
        if !config.enabled {
            gimbal.restore_neutral(&mut engine);
            if let Some(telemetry) = telemetry.as_deref_mut() {
                telemetry.clear();
            }
            continue;
        }

        let Some(info) = cache.get(&vehicle.0, stamp) else {
            // No snapshot this step (aggregation has not run); leave the
            // group at neutral rather than steering on stale geometry.
            gimbal.restore_neutral(&mut engine);
            if let Some(telemetry) = telemetry.as_deref_mut() {
                telemetry.clear();
            }
            continue;
        };

        match solve_trim(info, config.limit_degrees) {
            Ok(solution) => {
                gimbal.apply_correction(&mut engine, &solution);
                if let Some(telemetry) = telemetry.as_deref_mut() {
                    telemetry.record(&solution);
                }
                debug!(
                    "vehicle {}: trim {:.2} deg of {:.2} deg computed",
                    vehicle.0,
                    solution.applied_angle(),
                    solution.trim_angle
                );
            }
            Err(TrimError::DegenerateGeometry | TrimError::NoAlignedThrust) => {
                // Expected transient states, e.g. engines not yet throttled
                // up; not worth a diagnostic.
                gimbal.restore_neutral(&mut engine);
                if let Some(telemetry) = telemetry.as_deref_mut() {
                    telemetry.clear();
                }
            }
            Err(err) => {
                warn!("vehicle {}: skipping trim this step: {}", vehicle.0, err);
                gimbal.restore_neutral(&mut engine);
                if let Some(telemetry) = telemetry.as_deref_mut() {
                    telemetry.clear();
                }
            }
        }
    }
}
