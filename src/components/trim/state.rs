use nalgebra::{UnitQuaternion, Vector3};

/// Per-vehicle thrust geometry snapshot, rebuilt once per physics step.
///
/// "Aligned" refers to producers whose gimbal group is opted in to
/// auto-trim; "other" is everything else, including fixed nozzles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustInfo {
    /// Vehicle center of mass at evaluation time [m]
    pub center_of_mass: Vector3<f64>,

    /// Thrust-weighted average position of all thrust transforms [m]
    pub center_of_thrust: Vector3<f64>,

    /// Thrust-weighted summed direction of trim-disabled producers
    pub direction_other: Vector3<f64>,

    /// Thrust-weighted summed direction of trim-enabled producers
    pub direction_aligned: Vector3<f64>,

    /// Total thrust of trim-disabled producers [N]
    pub thrust_other: f64,

    /// Total thrust of trim-enabled producers [N]
    pub thrust_aligned: f64,
}

impl ThrustInfo {
    pub fn new(center_of_mass: Vector3<f64>) -> Self {
        Self {
            center_of_mass,
            center_of_thrust: Vector3::zeros(),
            direction_other: Vector3::zeros(),
            direction_aligned: Vector3::zeros(),
            thrust_other: 0.0,
            thrust_aligned: 0.0,
        }
    }

    pub fn total_thrust(&self) -> f64 {
        self.thrust_other + self.thrust_aligned
    }

    /// No producer is firing; the snapshot carries no usable geometry and
    /// the solver must skip the step.
    pub fn is_degenerate(&self) -> bool {
        self.total_thrust() <= 0.0
    }

    pub fn has_aligned_thrust(&self) -> bool {
        self.thrust_aligned > 0.0
    }
}

/// Solved corrective rotation for one step.
///
/// `rotation` is the full from-to rotation between the aligned thrust
/// direction and its target; `ratio` is the fraction of it the deflection
/// cap allows this step.
#[derive(Debug, Clone, Copy)]
pub struct TrimSolution {
    /// Full corrective rotation, before capping
    pub rotation: UnitQuaternion<f64>,

    /// Full computed trim angle [deg]
    pub trim_angle: f64,

    /// Applied fraction of the rotation, in [0, 1]
    pub ratio: f64,

    /// Perpendicular component of the aggregate thrust direction [N]
    pub correction: Vector3<f64>,

    /// Target aggregate direction for the trim-enabled producers [N]
    pub trimmed_direction: Vector3<f64>,
}

impl TrimSolution {
    /// Angle the capped rotation actually deflects by [deg].
    pub fn applied_angle(&self) -> f64 {
        self.trim_angle * self.ratio
    }

    /// Capped corrective rotation for this step.
    pub fn applied_rotation(&self) -> UnitQuaternion<f64> {
        self.rotation.powf(self.ratio)
    }
}
