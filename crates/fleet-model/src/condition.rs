//! Part condition severity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity classification of a part's current service state.
///
/// Ordered from best to worst so that `max` across parts yields the
/// vehicle's overall condition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Good,
    Warning,
    Critical,
}

impl Condition {
    /// Returns the canonical lowercase label used in snapshots and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Good => "good",
            Condition::Warning => "warning",
            Condition::Critical => "critical",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(Condition::Good),
            "warning" => Ok(Condition::Warning),
            "critical" => Ok(Condition::Critical),
            _ => Err(format!("unknown condition: {s}")),
        }
    }
}
