use bevy::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::components::ThrustInfo;

/// Per-step thrust geometry cache, keyed by vehicle identity.
///
/// Every actuator on a vehicle queries the snapshot during the same physics
/// step; only the first query pays for the O(parts) aggregation. Entries
/// are valid for exactly one step: the stamp recorded at fill time is
/// compared against the current physics time and the whole cache is
/// dropped when the step advances. Single-threaded step execution makes
/// the stamp guard sufficient; no locking is involved.
#[derive(Resource, Debug, Default)]
pub struct ThrustInfoCache {
    stamp: f64,
    entries: HashMap<Uuid, ThrustInfo>,
    aggregations: u64,
}

impl ThrustInfoCache {
    /// Snapshot for `vehicle` at physics time `stamp`, computing and
    /// caching it if this is the first query of the step.
    pub fn fetch_or_compute(
        &mut self,
        vehicle: Uuid,
        stamp: f64,
        compute: impl FnOnce() -> ThrustInfo,
    ) -> ThrustInfo {
        self.roll_over(stamp);
        if let Some(info) = self.entries.get(&vehicle) {
            return *info;
        }
        let info = compute();
        self.aggregations += 1;
        self.entries.insert(vehicle, info);
        info
    }

    /// Cached snapshot for `vehicle`, if one was built for this step.
    pub fn get(&self, vehicle: &Uuid, stamp: f64) -> Option<&ThrustInfo> {
        if stamp != self.stamp {
            return None;
        }
        self.entries.get(vehicle)
    }

    /// Number of aggregations performed since startup. Diagnostic; lets
    /// callers verify the once-per-vehicle-per-step policy.
    pub fn aggregations(&self) -> u64 {
        self.aggregations
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn roll_over(&mut self, stamp: f64) {
        if stamp != self.stamp {
            self.entries.clear();
            self.stamp = stamp;
        }
    }
}
