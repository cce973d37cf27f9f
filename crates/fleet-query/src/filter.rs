//! Vehicle and history filtering.

use fleet_derive::classify::matches_category;
use fleet_model::{HistoryRecord, PartCategory, Vehicle};

use crate::criteria::{CityFilter, ConditionFilter, VehicleQuery};

/// Vehicles matching every active criterion, in snapshot order.
pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], query: &VehicleQuery) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| matches_query(vehicle, query))
        .collect()
}

fn matches_query(vehicle: &Vehicle, query: &VehicleQuery) -> bool {
    matches_search(vehicle, &query.search)
        && matches_city(vehicle, &query.city)
        && matches_condition(vehicle, query.condition)
        && matches_part(vehicle, query)
}

/// Case-insensitive substring over license, model and city. An empty
/// needle matches everything.
fn matches_search(vehicle: &Vehicle, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    vehicle.license.to_lowercase().contains(&needle)
        || vehicle.model.to_lowercase().contains(&needle)
        || vehicle.city.to_lowercase().contains(&needle)
}

fn matches_city(vehicle: &Vehicle, city: &CityFilter) -> bool {
    match city {
        CityFilter::All => true,
        CityFilter::Named(name) => vehicle.city == *name,
    }
}

fn matches_condition(vehicle: &Vehicle, condition: ConditionFilter) -> bool {
    match condition {
        ConditionFilter::All => true,
        ConditionFilter::Only(wanted) => vehicle.has_condition(wanted),
    }
}

/// The part criterion needs a recorded service: a `None` slot fails even
/// under `ConditionFilter::All`.
fn matches_part(vehicle: &Vehicle, query: &VehicleQuery) -> bool {
    let Some(filter) = &query.part else {
        return true;
    };
    match vehicle.parts.get(&filter.part) {
        Some(Some(status)) => filter.condition.matches(status.condition),
        _ => false,
    }
}

/// History records matching a free-text search and an optional part
/// category, preserving the stored (newest-first) order.
///
/// The search needle is tested against every visible column of the history
/// table, mileage rendered back as plain digits.
pub fn filter_history<'a>(
    history: &'a [HistoryRecord],
    search: &str,
    category: Option<&PartCategory>,
) -> Vec<&'a HistoryRecord> {
    let needle = search.trim().to_lowercase();
    history
        .iter()
        .filter(|record| {
            category.is_none_or(|category| matches_category(&record.description, category))
        })
        .filter(|record| needle.is_empty() || record_matches(record, &needle))
        .collect()
}

fn record_matches(record: &HistoryRecord, needle: &str) -> bool {
    record.description.to_lowercase().contains(needle)
        || record.date.to_lowercase().contains(needle)
        || record.mileage.to_string().contains(needle)
        || record.part_code.to_lowercase().contains(needle)
        || record.unit.to_lowercase().contains(needle)
        || record.status.to_lowercase().contains(needle)
}
