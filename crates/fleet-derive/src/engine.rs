//! The join & derivation pass: two raw tables in, one derived snapshot out.
//!
//! Derivation is deterministic and side-effect free: the same tables,
//! catalog, rules and reference date always produce an identical snapshot.
//! Data-quality problems degrade row-by-row (skipped with a debug log)
//! and never fail the pass; an empty roster yields an empty snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use fleet_model::collate;
use fleet_model::table::{cell, history, schedule};
use fleet_model::{
    HistoryRecord, PartCatalog, PartStatus, RawTable, RuleBook, Snapshot, SnapshotMeta, Vehicle,
};

use crate::classify::matches_keywords;
use crate::normalize::{
    NormalizeOptions, days_between, format_time_diff, normalize_date, normalize_mileage,
    parse_flexible_date, parse_loose_f64,
};
use crate::status::evaluate;

/// Engine configuration for one derivation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeriveOptions {
    pub normalize: NormalizeOptions,
}

/// Build the derived vehicle collection from the roster and history sheets.
pub fn derive(
    schedule_rows: &RawTable,
    history_rows: &RawTable,
    catalog: &PartCatalog,
    rules: &RuleBook,
    current_date: NaiveDate,
    options: &DeriveOptions,
) -> Snapshot {
    let mut registry = build_registry(schedule_rows, catalog);
    let total_records = attach_history(&mut registry, history_rows, options);
    derive_part_statuses(&mut registry, catalog, rules, current_date);

    let mut vehicles: Vec<Vehicle> = registry.into_values().collect();
    vehicles.sort_by(|a, b| {
        collate::compare(&a.city, &b.city).then_with(|| collate::compare(&a.license, &b.license))
    });
    for vehicle in &mut vehicles {
        sort_history_descending(&mut vehicle.history);
    }

    let meta = SnapshotMeta {
        total_vehicles: vehicles.len(),
        total_records,
    };
    Snapshot {
        current_date,
        vehicles,
        meta,
    }
}

/// Pass 1a: the vehicle registry, keyed by license. Roster rows that are
/// too short or carry no identifier are skipped; a duplicate license keeps
/// the last row, matching the source sheets' own convention.
fn build_registry(rows: &RawTable, catalog: &PartCatalog) -> BTreeMap<String, Vehicle> {
    let mut registry = BTreeMap::new();
    for (index, row) in rows.data_rows().enumerate() {
        if row.len() < schedule::MIN_COLUMNS {
            debug!(row = index + 1, columns = row.len(), "skipping short roster row");
            continue;
        }
        let license = cell(row, schedule::COL_LICENSE);
        if license.is_empty() {
            continue;
        }
        let parts = catalog.names().map(|name| (name.to_string(), None)).collect();
        registry.insert(
            license.to_string(),
            Vehicle {
                city: cell(row, schedule::COL_CITY).to_string(),
                license: license.to_string(),
                model: cell(row, schedule::COL_MODEL).to_string(),
                year: cell(row, schedule::COL_YEAR).to_string(),
                current_mileage: 0,
                parts,
                history: Vec::new(),
            },
        );
    }
    debug!(vehicles = registry.len(), "built vehicle registry");
    registry
}

/// Pass 1b: join history rows onto the registry, tracking the running
/// maximum mileage per vehicle. Orphaned rows (unknown vehicle), rows with
/// unparseable mileage and rows normalizing to zero-or-less are dropped.
fn attach_history(
    registry: &mut BTreeMap<String, Vehicle>,
    rows: &RawTable,
    options: &DeriveOptions,
) -> usize {
    let mut retained = 0usize;
    let mut orphaned = 0usize;
    let mut dropped = 0usize;
    for row in rows.data_rows() {
        if row.len() < history::MIN_COLUMNS {
            dropped += 1;
            continue;
        }
        let car = cell(row, history::COL_CAR);
        if car.is_empty() {
            dropped += 1;
            continue;
        }
        let Some(vehicle) = registry.get_mut(car) else {
            orphaned += 1;
            continue;
        };
        let Some(mileage) = normalize_mileage(cell(row, history::COL_MILEAGE), &options.normalize)
        else {
            dropped += 1;
            continue;
        };
        if mileage <= 0 {
            dropped += 1;
            continue;
        }

        let record = HistoryRecord {
            date: normalize_date(cell(row, history::COL_DATE)),
            city: vehicle.city.clone(),
            car: car.to_string(),
            mileage,
            description: cell(row, history::COL_DESCRIPTION).to_string(),
            part_code: cell(row, history::COL_PART_CODE).to_string(),
            unit: cell(row, history::COL_UNIT).to_string(),
            quantity: parse_loose_f64(cell(row, history::COL_QUANTITY)).unwrap_or(0.0),
            price: parse_loose_f64(cell(row, history::COL_PRICE)).unwrap_or(0.0),
            total_with_vat: parse_loose_f64(cell(row, history::COL_TOTAL_WITH_VAT))
                .unwrap_or(0.0),
            status: cell(row, history::COL_STATUS).to_string(),
        };
        if mileage > vehicle.current_mileage {
            vehicle.current_mileage = mileage;
        }
        vehicle.history.push(record);
        retained += 1;
    }
    if orphaned > 0 || dropped > 0 {
        debug!(retained, orphaned, dropped, "history rows filtered");
    }
    retained
}

/// Pass 2: per (vehicle, record, matching category), keep the occurrence
/// with the strictly highest mileage and classify it. Runs after pass 1 so
/// every diff is computed against the vehicle's final current mileage.
fn derive_part_statuses(
    registry: &mut BTreeMap<String, Vehicle>,
    catalog: &PartCatalog,
    rules: &RuleBook,
    current_date: NaiveDate,
) {
    for vehicle in registry.values_mut() {
        let model_year = vehicle.model_year();
        let current_mileage = vehicle.current_mileage;
        let Vehicle { parts, history, model, .. } = vehicle;
        for record in history.iter() {
            for category in &catalog.categories {
                if !matches_keywords(&record.description, &category.keywords) {
                    continue;
                }
                let Some(slot) = parts.get_mut(&category.name) else {
                    continue;
                };
                // Strictly greater: equal mileage keeps the stored occurrence.
                let replace = slot
                    .as_ref()
                    .is_none_or(|existing| record.mileage > existing.mileage);
                if !replace {
                    continue;
                }
                let mileage_diff = current_mileage - record.mileage;
                let days_diff = parse_flexible_date(&record.date)
                    .map(|date| days_between(current_date, date))
                    .unwrap_or(0);
                let condition = evaluate(
                    &category.name,
                    rules,
                    mileage_diff,
                    days_diff,
                    model_year,
                    model.as_str(),
                );
                *slot = Some(PartStatus {
                    date: record.date.clone(),
                    mileage: record.mileage,
                    mileage_diff,
                    days_diff,
                    time_diff: format_time_diff(days_diff),
                    condition,
                });
            }
        }
    }
}

/// Newest first; unparseable date strings order as oldest (last). The sort
/// is stable, so ties keep sheet order.
fn sort_history_descending(records: &mut [HistoryRecord]) {
    records.sort_by(|a, b| {
        let a_key = parse_flexible_date(&a.date);
        let b_key = parse_flexible_date(&b.date);
        b_key.cmp(&a_key)
    });
}
