pub mod catalog;
pub mod collate;
pub mod condition;
pub mod error;
pub mod rules;
pub mod snapshot;
pub mod table;
pub mod vehicle;

pub use catalog::{PartCatalog, PartCategory};
pub use condition::Condition;
pub use error::{FleetError, Result};
pub use rules::{Band, Limit, RuleBook, ThresholdRule};
pub use snapshot::{Snapshot, SnapshotMeta};
pub use table::RawTable;
pub use vehicle::{HistoryRecord, PartStatus, Vehicle};
