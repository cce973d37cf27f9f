//! Tests for fleet aggregation.

use std::collections::BTreeMap;

use fleet_model::{Condition, PartStatus, Vehicle};
use fleet_query::{ALL_CITIES, FleetStats, aggregate, distinct_cities};

fn status(condition: Condition) -> PartStatus {
    PartStatus {
        date: "2024-01-10".to_string(),
        mileage: 90_000,
        mileage_diff: 5_000,
        days_diff: 31,
        time_diff: "1міс".to_string(),
        condition,
    }
}

fn vehicle(license: &str, city: &str, conditions: &[Condition]) -> Vehicle {
    let parts: BTreeMap<String, Option<PartStatus>> = conditions
        .iter()
        .enumerate()
        .map(|(index, condition)| (format!("Вузол {index}"), Some(status(*condition))))
        .collect();
    Vehicle {
        city: city.to_string(),
        license: license.to_string(),
        model: "VW Caddy".to_string(),
        year: "2015".to_string(),
        current_mileage: 95_000,
        parts,
        history: Vec::new(),
    }
}

#[test]
fn vehicles_count_once_per_exhibited_condition() {
    let fleet = vec![
        vehicle("AA1111AA", "Київ", &[Condition::Good, Condition::Critical]),
        vehicle("BB2222BB", "Львів", &[Condition::Warning, Condition::Warning]),
        vehicle("CC3333CC", "Київ", &[Condition::Good]),
    ];
    let stats = aggregate(&fleet);
    assert_eq!(
        stats,
        FleetStats {
            total: 3,
            with_good: 2,
            with_warning: 1,
            with_critical: 1,
        }
    );
}

#[test]
fn vehicles_without_records_only_raise_the_total() {
    let mut empty = vehicle("AA1111AA", "Київ", &[]);
    empty.parts.insert("Помпа".to_string(), None);
    let stats = aggregate(&[empty]);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.with_good, 0);
    assert_eq!(stats.with_warning, 0);
    assert_eq!(stats.with_critical, 0);
}

#[test]
fn empty_fleet_aggregates_to_zero() {
    assert_eq!(aggregate(&[]), FleetStats::default());
}

#[test]
fn cities_are_deduplicated_and_sorted_behind_the_sentinel() {
    let fleet = vec![
        vehicle("AA1111AA", "Львів", &[]),
        vehicle("BB2222BB", "Київ", &[]),
        vehicle("CC3333CC", "Львів", &[]),
        vehicle("DD4444DD", "", &[]),
    ];
    let cities = distinct_cities(&fleet);
    assert_eq!(cities, [ALL_CITIES, "Київ", "Львів"]);
}

#[test]
fn cities_follow_the_ukrainian_alphabet() {
    let fleet = vec![
        vehicle("AA1111AA", "Івано-Франківськ", &[]),
        vehicle("BB2222BB", "Вінниця", &[]),
        vehicle("CC3333CC", "Ялта", &[]),
    ];
    assert_eq!(
        distinct_cities(&fleet),
        [ALL_CITIES, "Вінниця", "Івано-Франківськ", "Ялта"]
    );
}

#[test]
fn empty_fleet_still_lists_the_sentinel() {
    assert_eq!(distinct_cities(&[]), [ALL_CITIES]);
}
