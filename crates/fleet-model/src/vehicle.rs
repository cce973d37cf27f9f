//! Derived vehicle entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// One maintenance line item, joined to its owning vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// ISO `Y-m-d` when the raw cell parsed, otherwise the trimmed raw text.
    pub date: String,
    /// Inherited from the owning vehicle at join time.
    pub city: String,
    /// Vehicle identifier (license plate).
    pub car: String,
    /// Normalized odometer reading; always positive (zero rows are discarded).
    pub mileage: i64,
    pub description: String,
    pub part_code: String,
    pub unit: String,
    pub quantity: f64,
    pub price: f64,
    pub total_with_vat: f64,
    /// Free-text operational status label (fulfilled/pending/...).
    pub status: String,
}

/// Derived service state of one part category on one vehicle.
///
/// Sourced from the matching history record with the highest mileage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartStatus {
    pub date: String,
    pub mileage: i64,
    /// `current_mileage - mileage`; may be negative on inconsistent data.
    pub mileage_diff: i64,
    /// Whole days between the reference date and the record date; 0 when
    /// the record date did not parse.
    pub days_diff: i64,
    /// Human-readable elapsed time, e.g. `2р 3міс` or `15дн`.
    pub time_diff: String,
    pub condition: Condition,
}

/// One vehicle with its attached part statuses and full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub city: String,
    pub license: String,
    pub model: String,
    /// Kept as raw text; use [`Vehicle::model_year`] for comparisons.
    pub year: String,
    /// Maximum mileage observed across the vehicle's history; 0 if none.
    pub current_mileage: i64,
    /// Exactly one entry per catalog category, `None` until a matching
    /// history record is seen. Display order comes from the catalog.
    pub parts: BTreeMap<String, Option<PartStatus>>,
    /// Sorted descending by date.
    pub history: Vec<HistoryRecord>,
}

impl Vehicle {
    /// Model year parsed loosely from the raw text (leading digits), 0 when
    /// absent or unparseable.
    pub fn model_year(&self) -> i32 {
        parse_year(&self.year)
    }

    /// True if at least one part is in the given condition.
    pub fn has_condition(&self, condition: Condition) -> bool {
        self.parts
            .values()
            .flatten()
            .any(|part| part.condition == condition)
    }

    /// Number of parts currently in the given condition.
    pub fn condition_count(&self, condition: Condition) -> usize {
        self.parts
            .values()
            .flatten()
            .filter(|part| part.condition == condition)
            .count()
    }

    /// Worst condition across all tracked parts, `None` when no part has
    /// any recorded service yet.
    pub fn overall_condition(&self) -> Option<Condition> {
        self.parts.values().flatten().map(|part| part.condition).max()
    }
}

/// Loose year parse: leading ASCII digits of the trimmed text, 0 otherwise.
/// Tolerates suffixes like `"2015 р."`.
pub fn parse_year(raw: &str) -> i32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
