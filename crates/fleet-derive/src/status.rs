//! Pure status evaluation for one part occurrence.

use fleet_model::catalog::names;
use fleet_model::{Condition, RuleBook, ThresholdRule};

/// Classify one part occurrence given its scalar deltas and the owning
/// vehicle's metadata. Pure: no history access, no side effects.
///
/// Mercedes-Benz Sprinter vans carry factory intervals that differ from
/// the fleet-wide rules: the timing belt is chain-driven (never due) and
/// the water pump has a single warning threshold.
pub fn evaluate(
    part_name: &str,
    rules: &RuleBook,
    mileage_diff: i64,
    days_diff: i64,
    model_year: i32,
    model: &str,
) -> Condition {
    if is_mercedes_sprinter(model) {
        if part_name == names::TIMING_BELT {
            return Condition::Good;
        }
        if part_name == names::WATER_PUMP {
            return if mileage_diff >= 120_000 {
                Condition::Warning
            } else {
                Condition::Good
            };
        }
    }

    match rules.rule_for(part_name) {
        ThresholdRule::Distance { band } => band.classify(mileage_diff as f64),
        ThresholdRule::DistanceByModelYear {
            cutoff_year,
            at_or_after,
            before,
        } => {
            let band = if model_year >= cutoff_year {
                at_or_after
            } else {
                before
            };
            band.classify(mileage_diff as f64)
        }
        ThresholdRule::Months { band } => band.classify(days_diff as f64 / 30.0),
        ThresholdRule::Years { band } => band.classify(days_diff as f64 / 365.0),
    }
}

/// Model text contains both "mercedes" and "sprinter", case-insensitive.
pub fn is_mercedes_sprinter(model: &str) -> bool {
    let lowered = model.to_lowercase();
    lowered.contains("mercedes") && lowered.contains("sprinter")
}
