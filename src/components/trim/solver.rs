use nalgebra::UnitQuaternion;

use crate::components::trim::{ThrustInfo, TrimSolution};
use crate::utils::{normalize_or_zero, rad_to_deg, reject, TrimError, DIRECTION_EPSILON};

/// Angle below which a correction is treated as already optimal [deg].
const ANGLE_EPSILON: f64 = 1e-9;

/// Compute the bounded corrective rotation for one step.
///
/// The construction happens in the 2D plane spanned by the ideal thrust
/// direction (center of thrust through center of mass) and the current
/// aggregate direction. The trim-enabled producers' contribution is
/// redistributed between the correction axis and the ideal axis so that its
/// magnitude is preserved and the net perpendicular error is minimized,
/// then capped to `limit_degrees`.
///
/// Errors are per-step conditions: the caller leaves the group at neutral
/// and tries again next step once the geometry has changed.
pub fn solve_trim(info: &ThrustInfo, limit_degrees: f64) -> Result<TrimSolution, TrimError> {
    if info.is_degenerate() {
        return Err(TrimError::DegenerateGeometry);
    }
    if !info.has_aligned_thrust() {
        return Err(TrimError::NoAlignedThrust);
    }

    // Direction the aggregate thrust vector should pass through, oriented
    // to the branch consistent with the current thrust direction.
    let mut optimal = info.center_of_thrust - info.center_of_mass;
    let current = info.direction_other + info.direction_aligned;
    if optimal.norm_squared() < DIRECTION_EPSILON {
        // Thrust already passes through the center of mass; there is no
        // correction plane to work in.
        return Err(TrimError::DegenerateGeometry);
    }
    if optimal.dot(&current) < 0.0 {
        optimal = -optimal;
    }

    // The part of the aggregate direction that needs to be cancelled, and
    // how much of the aligned thrust already lies along that axis.
    let correction = reject(&current, &optimal);
    let aligned_perp = reject(&info.direction_aligned, &optimal).norm();

    // New aligned contribution of unchanged magnitude, decomposed into a
    // perpendicular part x and a parallel part y. The clamp keeps y real;
    // when the required cancellation exceeds the available authority the
    // whole aligned thrust ends up on the correction axis.
    let authority = info.thrust_aligned;
    let x = (aligned_perp - correction.norm()).clamp(-authority, authority);
    let y = (authority * authority - x * x).sqrt();
    let trimmed_direction = normalize_or_zero(&correction) * x + normalize_or_zero(&optimal) * y;

    let trim_angle = rad_to_deg(info.direction_aligned.angle(&trimmed_direction));
    if !trim_angle.is_finite() {
        return Err(TrimError::UnreachableCorrection { angle: trim_angle });
    }

    let rotation = UnitQuaternion::rotation_between(&info.direction_aligned, &trimmed_direction)
        .ok_or(TrimError::UnreachableCorrection { angle: trim_angle })?;

    // Proportional cap, re-evaluated fresh every step from the neutral
    // pose; there is no iterative convergence.
    let ratio = if trim_angle <= ANGLE_EPSILON {
        0.0
    } else {
        (limit_degrees / trim_angle).min(1.0)
    };

    Ok(TrimSolution {
        rotation,
        trim_angle,
        ratio,
        correction,
        trimmed_direction,
    })
}
