//! Fleet-level aggregation.

use fleet_model::collate;
use fleet_model::{Condition, Vehicle};
use serde::Serialize;

/// City sentinel shown as the first choice of the city selector.
pub const ALL_CITIES: &str = "Всі міста";

/// Headline counters over a (possibly filtered) vehicle set.
///
/// A vehicle counts once per condition it exhibits, so the three condition
/// counters may sum to more than `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FleetStats {
    pub total: usize,
    pub with_good: usize,
    pub with_warning: usize,
    pub with_critical: usize,
}

pub fn aggregate<'a, I>(vehicles: I) -> FleetStats
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    let mut stats = FleetStats::default();
    for vehicle in vehicles {
        stats.total += 1;
        if vehicle.has_condition(Condition::Good) {
            stats.with_good += 1;
        }
        if vehicle.has_condition(Condition::Warning) {
            stats.with_warning += 1;
        }
        if vehicle.has_condition(Condition::Critical) {
            stats.with_critical += 1;
        }
    }
    stats
}

/// The city selector contents: the sentinel, then every distinct city in
/// Ukrainian alphabetical order. Empty city names are skipped.
pub fn distinct_cities(vehicles: &[Vehicle]) -> Vec<String> {
    let mut cities: Vec<&str> = vehicles
        .iter()
        .map(|vehicle| vehicle.city.as_str())
        .filter(|city| !city.is_empty())
        .collect();
    cities.sort_by(|a, b| collate::compare(a, b));
    cities.dedup();
    std::iter::once(ALL_CITIES.to_string())
        .chain(cities.into_iter().map(str::to_string))
        .collect()
}
