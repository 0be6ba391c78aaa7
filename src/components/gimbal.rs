use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::trim::{AutoTrimConfig, TrimSolution};
use crate::components::EngineComponent;

/// Capability contract for anything that gimbals a set of thrust
/// transforms.
///
/// The aggregator depends only on this trait: it needs the neutral
/// (zero-correction) orientation of each steered transform and whether the
/// group is opted in to auto-trim. Concrete mount types are never inspected.
pub trait GimbalMount {
    /// Neutral orientation per steered transform, indexed parallel to the
    /// engine's thrust transforms.
    fn neutral_orientations(&self) -> &[UnitQuaternion<f64>];

    /// Whether this control loop is permitted to steer the group.
    fn trim_enabled(&self) -> bool;
}

/// Component for a gimbal mount attached to an engine entity.
///
/// Holds the neutral pose of each steered transform. Corrections are always
/// computed against these orientations and never accumulate; the neutral
/// list is written once at construction and never changes afterwards.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct GimbalComponent {
    neutral: Vec<UnitQuaternion<f64>>,
}

impl GimbalComponent {
    pub fn new(neutral: Vec<UnitQuaternion<f64>>) -> Self {
        Self { neutral }
    }

    /// Mount whose neutral pose is the engine's current orientation.
    pub fn from_engine(engine: &EngineComponent) -> Self {
        Self {
            neutral: engine.transforms.iter().map(|t| t.orientation).collect(),
        }
    }

    pub fn neutral(&self) -> &[UnitQuaternion<f64>] {
        &self.neutral
    }

    /// Put every steered transform back to its neutral orientation.
    pub fn restore_neutral(&self, engine: &mut EngineComponent) {
        for (transform, neutral) in engine.transforms.iter_mut().zip(&self.neutral) {
            transform.orientation = *neutral;
        }
    }

    /// Apply a solved correction: reset each steered transform to neutral,
    /// then rotate it by the capped corrective rotation. The neutral list
    /// itself is untouched.
    pub fn apply_correction(&self, engine: &mut EngineComponent, solution: &TrimSolution) {
        let delta = solution.applied_rotation();
        for (transform, neutral) in engine.transforms.iter_mut().zip(&self.neutral) {
            transform.orientation = delta * *neutral;
        }
    }
}

/// Borrowed view pairing a gimbal with its group's trim toggle.
///
/// This is the shape the aggregator sees: a plain steered mount reads as
/// trim-disabled, an auto-trim group reads as enabled when its toggle is on.
pub struct GimbalView<'a> {
    pub gimbal: &'a GimbalComponent,
    pub trim_enabled: bool,
}

impl GimbalMount for GimbalView<'_> {
    fn neutral_orientations(&self) -> &[UnitQuaternion<f64>] {
        &self.gimbal.neutral
    }

    fn trim_enabled(&self) -> bool {
        self.trim_enabled
    }
}

/// Everything an auto-trim group needs on an engine entity besides the
/// engine itself: the mount, the group settings, and the telemetry the
/// apply system keeps in sync.
#[derive(Bundle)]
pub struct AutoTrimBundle {
    pub gimbal: GimbalComponent,
    pub config: AutoTrimConfig,
    pub telemetry: TrimTelemetry,
}

impl AutoTrimBundle {
    /// Group whose neutral pose is the engine's current orientation.
    pub fn for_engine(engine: &EngineComponent, config: AutoTrimConfig) -> Self {
        Self {
            gimbal: GimbalComponent::from_engine(engine),
            config,
            telemetry: TrimTelemetry::default(),
        }
    }
}

/// Last-computed trim figures for one gimbal group, for display layers.
///
/// Informational only; never read back by the solver.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct TrimTelemetry {
    /// Perpendicular component of the aggregate thrust direction [N]
    pub correction: Vector3<f64>,

    /// Full computed trim angle [deg]
    pub trim_angle: f64,

    /// Angle actually applied after the deflection cap [deg]
    pub applied_angle: f64,
}

impl Default for TrimTelemetry {
    fn default() -> Self {
        Self {
            correction: Vector3::zeros(),
            trim_angle: 0.0,
            applied_angle: 0.0,
        }
    }
}

impl TrimTelemetry {
    pub fn record(&mut self, solution: &TrimSolution) {
        self.correction = solution.correction;
        self.trim_angle = solution.trim_angle;
        self.applied_angle = solution.applied_angle();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Display string for the applied deflection, e.g. `"12.3 deg"`.
    pub fn status(&self) -> String {
        format!("{:.1} deg", self.applied_angle)
    }
}
