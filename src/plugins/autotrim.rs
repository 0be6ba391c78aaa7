use bevy::prelude::*;

use crate::resources::ThrustInfoCache;
use crate::systems::{aggregate_thrust_system, apply_trim_system};

/// Auto-trim pipeline stages within one physics step
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum TrimSet {
    Aggregate,
    Apply,
}

pub struct AutoTrimPlugin {
    pub timestep: f64,
}

impl Default for AutoTrimPlugin {
    fn default() -> Self {
        Self {
            timestep: 0.02, // 50 Hz physics rate
        }
    }
}

impl Plugin for AutoTrimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ThrustInfoCache>();

        // Configure fixed timestep
        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        app.configure_sets(FixedUpdate, (TrimSet::Aggregate, TrimSet::Apply).chain());

        app.add_systems(
            FixedUpdate,
            (
                aggregate_thrust_system.in_set(TrimSet::Aggregate),
                apply_trim_system.in_set(TrimSet::Apply),
            ),
        );
    }
}
