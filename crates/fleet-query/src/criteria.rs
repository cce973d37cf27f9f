//! Filter criteria, passed explicitly into every query call.
//!
//! The dashboard this replaces kept the selected filters in shared mutable
//! UI state; here the criteria are a plain value so the query layer stays
//! a pure function of (snapshot, criteria).

use fleet_model::Condition;

/// City criterion; `All` is the "Всі міста" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CityFilter {
    #[default]
    All,
    Named(String),
}

/// Condition criterion with an explicit "all" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConditionFilter {
    #[default]
    All,
    Only(Condition),
}

impl ConditionFilter {
    pub fn matches(&self, condition: Condition) -> bool {
        match self {
            ConditionFilter::All => true,
            ConditionFilter::Only(wanted) => *wanted == condition,
        }
    }
}

/// Part-specific criterion: the vehicle must have a recorded service for
/// the named category; `ConditionFilter::All` means "any record".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartFilter {
    pub part: String,
    pub condition: ConditionFilter,
}

/// Combined vehicle criteria; all active criteria AND together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleQuery {
    /// Case-insensitive substring over license, city and model; empty
    /// matches everything.
    pub search: String,
    pub city: CityFilter,
    /// At least one part must be in this condition.
    pub condition: ConditionFilter,
    pub part: Option<PartFilter>,
}
