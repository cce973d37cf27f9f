//! Derived snapshot: the full output of one derivation pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::vehicle::Vehicle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnapshotMeta {
    pub total_vehicles: usize,
    pub total_records: usize,
}

/// The fully derived vehicle collection for one reference date.
///
/// A snapshot is a pure value: rebuilding it from the same raw tables and
/// reference date yields an identical result, so it can be serialized to a
/// cache and compared bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Reference date used for all day/month/year diffs.
    pub current_date: NaiveDate,
    /// Sorted ascending by (city, license) in Ukrainian alphabetical order.
    pub vehicles: Vec<Vehicle>,
    pub meta: SnapshotMeta,
}

impl Snapshot {
    /// An empty roster is an expected operating condition, not an error;
    /// callers branch on this instead of catching anything.
    pub fn has_data(&self) -> bool {
        !self.vehicles.is_empty()
    }

    pub fn find_vehicle(&self, license: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.license == license)
    }
}
