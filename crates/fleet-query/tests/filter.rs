//! Tests for vehicle and history filtering.

use std::collections::BTreeMap;

use fleet_model::catalog::names;
use fleet_model::{Condition, HistoryRecord, PartCatalog, PartStatus, Vehicle};
use fleet_query::{
    CityFilter, ConditionFilter, PartFilter, VehicleQuery, filter_history, filter_vehicles,
};

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

fn vehicle(license: &str, city: &str, model: &str, parts: &[(&str, Option<Condition>)]) -> Vehicle {
    let parts: BTreeMap<String, Option<PartStatus>> = parts
        .iter()
        .map(|(name, condition)| ((*name).to_string(), condition.map(status)))
        .collect();
    Vehicle {
        city: city.to_string(),
        license: license.to_string(),
        model: model.to_string(),
        year: "2015".to_string(),
        current_mileage: 95_000,
        parts,
        history: Vec::new(),
    }
}

fn fleet() -> Vec<Vehicle> {
    vec![
        vehicle(
            "AA1234BM",
            "Київ",
            "Toyota Camry",
            &[(names::WATER_PUMP, Some(Condition::Good)), (names::BATTERY, None)],
        ),
        vehicle(
            "BC5678KT",
            "Львів",
            "VW Caddy",
            &[
                (names::WATER_PUMP, Some(Condition::Critical)),
                (names::BATTERY, Some(Condition::Warning)),
            ],
        ),
        vehicle(
            "AX9012EP",
            "Київ",
            "Mercedes-Benz Sprinter",
            &[(names::WATER_PUMP, None), (names::BATTERY, Some(Condition::Good))],
        ),
    ]
}

fn licenses(matched: &[&Vehicle]) -> Vec<String> {
    matched.iter().map(|vehicle| vehicle.license.clone()).collect()
}

#[test]
fn empty_query_matches_everything_in_order() {
    let fleet = fleet();
    let matched = filter_vehicles(&fleet, &VehicleQuery::default());
    assert_eq!(licenses(&matched), ["AA1234BM", "BC5678KT", "AX9012EP"]);
}

#[test]
fn search_is_case_insensitive_over_license_model_and_city() {
    let fleet = fleet();
    let by_license = VehicleQuery {
        search: "aa1234".to_string(),
        ..VehicleQuery::default()
    };
    assert_eq!(licenses(&filter_vehicles(&fleet, &by_license)), ["AA1234BM"]);

    let by_model = VehicleQuery {
        search: "sprinter".to_string(),
        ..VehicleQuery::default()
    };
    assert_eq!(licenses(&filter_vehicles(&fleet, &by_model)), ["AX9012EP"]);

    let by_city = VehicleQuery {
        search: "львів".to_string(),
        ..VehicleQuery::default()
    };
    assert_eq!(licenses(&filter_vehicles(&fleet, &by_city)), ["BC5678KT"]);
}

#[test]
fn whitespace_only_search_matches_everything() {
    let fleet = fleet();
    let query = VehicleQuery {
        search: "   ".to_string(),
        ..VehicleQuery::default()
    };
    assert_eq!(filter_vehicles(&fleet, &query).len(), 3);
}

#[test]
fn city_filter_is_exact() {
    let fleet = fleet();
    let query = VehicleQuery {
        city: CityFilter::Named("Київ".to_string()),
        ..VehicleQuery::default()
    };
    assert_eq!(licenses(&filter_vehicles(&fleet, &query)), ["AA1234BM", "AX9012EP"]);

    let missing = VehicleQuery {
        city: CityFilter::Named("Одеса".to_string()),
        ..VehicleQuery::default()
    };
    assert!(filter_vehicles(&fleet, &missing).is_empty());
}

#[test]
fn condition_filter_needs_one_matching_part() {
    let fleet = fleet();
    let query = VehicleQuery {
        condition: ConditionFilter::Only(Condition::Critical),
        ..VehicleQuery::default()
    };
    assert_eq!(licenses(&filter_vehicles(&fleet, &query)), ["BC5678KT"]);
}

#[test]
fn part_filter_skips_vehicles_without_a_record() {
    let fleet = fleet();
    let any_pump = VehicleQuery {
        part: Some(PartFilter {
            part: names::WATER_PUMP.to_string(),
            condition: ConditionFilter::All,
        }),
        ..VehicleQuery::default()
    };
    // AX9012EP tracks the pump but has no record for it.
    assert_eq!(licenses(&filter_vehicles(&fleet, &any_pump)), ["AA1234BM", "BC5678KT"]);

    let critical_pump = VehicleQuery {
        part: Some(PartFilter {
            part: names::WATER_PUMP.to_string(),
            condition: ConditionFilter::Only(Condition::Critical),
        }),
        ..VehicleQuery::default()
    };
    assert_eq!(licenses(&filter_vehicles(&fleet, &critical_pump)), ["BC5678KT"]);
}

#[test]
fn criteria_combine_with_and() {
    let fleet = fleet();
    let query = VehicleQuery {
        search: "vw".to_string(),
        city: CityFilter::Named("Київ".to_string()),
        ..VehicleQuery::default()
    };
    assert!(filter_vehicles(&fleet, &query).is_empty());
}

fn record(date: &str, description: &str, mileage: i64, status: &str) -> HistoryRecord {
    HistoryRecord {
        date: date.to_string(),
        city: "Київ".to_string(),
        car: "AA1234BM".to_string(),
        mileage,
        description: description.to_string(),
        part_code: "FLT-100".to_string(),
        unit: "шт".to_string(),
        quantity: 1.0,
        price: 450.0,
        total_with_vat: 540.0,
        status: status.to_string(),
    }
}

fn history() -> Vec<HistoryRecord> {
    vec![
        record("2024-02-10", "Заміна масла та фільтрів", 95_000, "виконано"),
        record("2024-01-15", "Заміна помпи", 90_000, "виконано"),
        record("2023-11-02", "Ремонт ходової", 82_000, "очікує"),
    ]
}

#[test]
fn history_search_covers_every_column() {
    let history = history();
    let by_description = filter_history(&history, "помпи", None);
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].description, "Заміна помпи");

    let by_date = filter_history(&history, "2023-11", None);
    assert_eq!(by_date.len(), 1);

    let by_mileage = filter_history(&history, "90000", None);
    assert_eq!(by_mileage.len(), 1);

    let by_status = filter_history(&history, "очікує", None);
    assert_eq!(by_status.len(), 1);

    let by_part_code = filter_history(&history, "flt-100", None);
    assert_eq!(by_part_code.len(), 3);
}

#[test]
fn history_category_filter_uses_keywords() {
    let history = history();
    let catalog = PartCatalog::builtin();
    let pump = catalog.get(fleet_model::catalog::names::WATER_PUMP).expect("builtin category");
    let matched = filter_history(&history, "", Some(pump));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].description, "Заміна помпи");
}

#[test]
fn history_search_and_category_combine() {
    let history = history();
    let catalog = PartCatalog::builtin();
    let oil = catalog.get(fleet_model::catalog::names::OIL_SERVICE).expect("builtin category");
    assert_eq!(filter_history(&history, "95000", Some(oil)).len(), 1);
    assert!(filter_history(&history, "очікує", Some(oil)).is_empty());
}

#[test]
fn history_order_is_preserved() {
    let history = history();
    let matched = filter_history(&history, "виконано", None);
    let dates: Vec<_> = matched.iter().map(|record| record.date.as_str()).collect();
    assert_eq!(dates, ["2024-02-10", "2024-01-15"]);
}
