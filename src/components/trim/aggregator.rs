use nalgebra::Vector3;

use crate::components::gimbal::GimbalMount;
use crate::components::trim::ThrustInfo;
use crate::components::ThrustTransform;
use crate::utils::forward_at;

/// One thrust producer as seen by the aggregator: its firing thrust, its
/// thrust transforms, and the gimbal mount steering them, if any.
pub struct ProducerSample<'a> {
    pub thrust: f64,
    pub transforms: &'a [ThrustTransform],
    pub mount: Option<&'a dyn GimbalMount>,
}

/// Aggregate the thrust geometry of one vehicle into a [`ThrustInfo`]
/// snapshot.
///
/// Per producer: arithmetic-mean transform position and summed forward
/// direction, both weighted by the producer's thrust. Directions of
/// gimbaled producers are sampled at their *neutral* orientation so the
/// snapshot is independent of any correction already applied this session.
/// The center of thrust is left at the origin when no producer is firing;
/// callers detect that through [`ThrustInfo::is_degenerate`].
pub fn aggregate_thrust<'a>(
    producers: impl IntoIterator<Item = ProducerSample<'a>>,
    center_of_mass: Vector3<f64>,
) -> ThrustInfo {
    let mut info = ThrustInfo::new(center_of_mass);

    for producer in producers {
        if producer.transforms.is_empty() {
            continue;
        }

        let mut cot = Vector3::zeros();
        let mut dot = Vector3::zeros();
        let neutral = producer.mount.map(GimbalMount::neutral_orientations);

        for (i, transform) in producer.transforms.iter().enumerate() {
            cot += transform.position;
            dot += match neutral.and_then(|n| n.get(i)) {
                Some(orientation) => forward_at(orientation),
                None => transform.forward(),
            };
        }
        cot /= producer.transforms.len() as f64;

        if producer.mount.is_some_and(|m| m.trim_enabled()) {
            info.direction_aligned += dot * producer.thrust;
            info.thrust_aligned += producer.thrust;
        } else {
            info.direction_other += dot * producer.thrust;
            info.thrust_other += producer.thrust;
        }
        info.center_of_thrust += cot * producer.thrust;
    }

    let total = info.total_thrust();
    if total > 0.0 {
        info.center_of_thrust /= total;
    }

    info
}
