//! Raw spreadsheet tables and their fixed column layout.
//!
//! Both input sheets are row-oriented: row 0 carries the header and every
//! data cell is addressed by a fixed, named column index. The exact index
//! mapping is configuration, not semantics, so the constants live here
//! rather than being scattered through the engine.

use serde::{Deserialize, Serialize};

/// Column layout of the vehicle roster ("schedule") sheet.
pub mod schedule {
    pub const COL_LICENSE: usize = 0;
    pub const COL_CITY: usize = 1;
    pub const COL_MODEL: usize = 2;
    pub const COL_YEAR: usize = 3;

    /// Data rows shorter than this are skipped by the engine.
    pub const MIN_COLUMNS: usize = 4;
}

/// Column layout of the maintenance history sheet.
pub mod history {
    pub const COL_CAR: usize = 0;
    pub const COL_DATE: usize = 1;
    pub const COL_DESCRIPTION: usize = 2;
    pub const COL_MILEAGE: usize = 3;
    pub const COL_PART_CODE: usize = 4;
    pub const COL_UNIT: usize = 5;
    pub const COL_QUANTITY: usize = 6;
    pub const COL_PRICE: usize = 7;
    pub const COL_TOTAL_WITH_VAT: usize = 8;
    pub const COL_STATUS: usize = 9;

    /// Data rows shorter than this are skipped by the engine.
    pub const MIN_COLUMNS: usize = 8;
}

/// A raw row-oriented table as fetched from the spreadsheet backend.
///
/// Row 0 is the header row; [`RawTable::data_rows`] skips it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Iterate over data rows, skipping the header row.
    pub fn data_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }

    /// True when the table holds at least one data row besides the header.
    pub fn has_data(&self) -> bool {
        self.rows.len() > 1
    }
}

/// Fetch a cell by index, treating missing cells as empty.
///
/// Cells are trimmed on access; short rows never panic.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_rows_skip_header() {
        let table = RawTable::new(vec![
            vec!["license".to_string(), "city".to_string()],
            vec!["AA1234BM".to_string(), "Kyiv".to_string()],
        ]);
        assert!(table.has_data());
        let rows: Vec<_> = table.data_rows().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(cell(rows[0], schedule::COL_LICENSE), "AA1234BM");
    }

    #[test]
    fn cell_tolerates_short_rows() {
        let row = vec![" AA1234BM ".to_string()];
        assert_eq!(cell(&row, 0), "AA1234BM");
        assert_eq!(cell(&row, history::COL_STATUS), "");
    }

    #[test]
    fn header_only_table_has_no_data() {
        let table = RawTable::new(vec![vec!["license".to_string()]]);
        assert!(!table.has_data());
        assert!(RawTable::default().data_rows().next().is_none());
    }
}
