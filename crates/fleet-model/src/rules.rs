//! Service-interval threshold rules.
//!
//! The original implementation dispatched on category name through one
//! large switch; here the rule set is a data-driven lookup table so new
//! categories and revised intervals are configuration changes, and the
//! evaluator itself stays a pure function.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::names;
use crate::condition::Condition;

/// One threshold with an inclusive or exclusive bound.
///
/// The production intervals mix both styles (e.g. brake pads are critical
/// strictly above 80,000 but warn at 60,000 inclusive), so the bound kind
/// is part of the data rather than of the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub value: f64,
    pub inclusive: bool,
}

impl Limit {
    pub const fn at_least(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub const fn above(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }

    pub fn reached(&self, observed: f64) -> bool {
        if self.inclusive {
            observed >= self.value
        } else {
            observed > self.value
        }
    }
}

/// Critical/warning threshold pair, evaluated critical-first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub critical: Limit,
    pub warning: Limit,
}

impl Band {
    pub const fn new(critical: Limit, warning: Limit) -> Self {
        Self { critical, warning }
    }

    pub fn classify(&self, observed: f64) -> Condition {
        if self.critical.reached(observed) {
            Condition::Critical
        } else if self.warning.reached(observed) {
            Condition::Warning
        } else {
            Condition::Good
        }
    }
}

/// A category's service-interval rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "kebab-case")]
pub enum ThresholdRule {
    /// Distance since last service, in the vehicle's odometer unit.
    Distance { band: Band },
    /// Distance since last service with bands split by model year.
    DistanceByModelYear {
        cutoff_year: i32,
        at_or_after: Band,
        before: Band,
    },
    /// Whole months since last service, computed as days / 30.
    Months { band: Band },
    /// Years since last service, computed as days / 365.
    Years { band: Band },
}

/// Lookup table from category name to its rule, with a default for
/// categories that carry no explicit entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBook {
    rules: BTreeMap<String, ThresholdRule>,
    default: ThresholdRule,
}

impl RuleBook {
    pub fn new(default: ThresholdRule) -> Self {
        Self {
            rules: BTreeMap::new(),
            default,
        }
    }

    pub fn insert(&mut self, name: &str, rule: ThresholdRule) {
        self.rules.insert(name.to_string(), rule);
    }

    /// The rule for a category, falling back to the default rule.
    pub fn rule_for(&self, name: &str) -> ThresholdRule {
        self.rules.get(name).copied().unwrap_or(self.default)
    }

    /// True when the category has an explicit (non-default) rule.
    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// The production rule set.
    pub fn builtin() -> Self {
        let mut book = Self::new(ThresholdRule::Distance {
            band: Band::new(Limit::above(50_000.0), Limit::above(30_000.0)),
        });
        book.insert(
            names::OIL_SERVICE,
            ThresholdRule::DistanceByModelYear {
                cutoff_year: 2010,
                at_or_after: Band::new(Limit::at_least(15_500.0), Limit::at_least(14_000.0)),
                before: Band::new(Limit::at_least(10_500.0), Limit::at_least(9_000.0)),
            },
        );
        for name in [names::TIMING_BELT, names::SERPENTINE_BELT] {
            book.insert(
                name,
                ThresholdRule::Distance {
                    band: Band::new(Limit::at_least(60_500.0), Limit::at_least(58_000.0)),
                },
            );
        }
        for name in [
            names::WATER_PUMP,
            names::CLUTCH,
            names::STARTER,
            names::ALTERNATOR,
        ] {
            book.insert(
                name,
                ThresholdRule::Distance {
                    band: Band::new(Limit::at_least(120_000.0), Limit::at_least(80_000.0)),
                },
            );
        }
        book.insert(
            names::SUSPENSION_DIAGNOSTIC,
            ThresholdRule::Months {
                band: Band::new(Limit::above(3.0), Limit::at_least(2.0)),
            },
        );
        for name in [
            names::WHEEL_ALIGNMENT,
            names::CALIPER_SERVICE,
            names::COMPUTER_DIAGNOSTIC,
            names::SOOT_BURNOFF,
        ] {
            book.insert(
                name,
                ThresholdRule::Months {
                    band: Band::new(Limit::above(4.0), Limit::at_least(2.0)),
                },
            );
        }
        book.insert(
            names::BRAKE_PADS,
            ThresholdRule::Distance {
                band: Band::new(Limit::above(80_000.0), Limit::at_least(60_000.0)),
            },
        );
        for name in [names::BRAKE_DISCS, names::SHOCK_ABSORBERS] {
            book.insert(
                name,
                ThresholdRule::Distance {
                    band: Band::new(Limit::above(100_000.0), Limit::at_least(70_000.0)),
                },
            );
        }
        for name in [
            names::SHOCK_MOUNTS,
            names::BALL_JOINT,
            names::STEERING_ROD,
            names::TIE_ROD_END,
        ] {
            book.insert(
                name,
                ThresholdRule::Distance {
                    band: Band::new(Limit::above(60_000.0), Limit::at_least(50_000.0)),
                },
            );
        }
        book.insert(
            names::BATTERY,
            ThresholdRule::Years {
                band: Band::new(Limit::above(4.0), Limit::at_least(3.0)),
            },
        );
        book
    }
}
