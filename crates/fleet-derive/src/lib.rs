//! Derivation engine for the fleet parts tracker.
//!
//! Consumes the two raw sheets (vehicle roster and maintenance history),
//! joins them, classifies free-text service descriptions into part
//! categories and derives a per-part condition for every vehicle.

pub mod classify;
pub mod engine;
pub mod normalize;
pub mod status;

pub use classify::{matches_category, matches_keywords, matching_categories};
pub use engine::{DeriveOptions, derive};
pub use normalize::{
    NormalizeOptions, format_time_diff, normalize_date, normalize_mileage, parse_flexible_date,
};
pub use status::{evaluate, is_mercedes_sprinter};
