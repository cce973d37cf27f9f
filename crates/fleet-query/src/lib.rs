//! Query layer over a derived [`fleet_model::Snapshot`]: vehicle and
//! history filtering plus fleet-level statistics.
//!
//! Everything here is read-only over borrowed snapshot data; queries never
//! clone vehicles or re-run derivation.

pub mod criteria;
pub mod filter;
pub mod stats;

pub use criteria::{CityFilter, ConditionFilter, PartFilter, VehicleQuery};
pub use filter::{filter_history, filter_vehicles};
pub use stats::{ALL_CITIES, FleetStats, aggregate, distinct_cities};
