//! In-memory table model backed by an uploaded workbook.
//!
//! The first worksheet's first row supplies column names; every following
//! row becomes one record. Cells are kept as JSON values so numeric and
//! text columns survive serialization into analysis output unchanged.

use std::io::Cursor;

use banyan_core::{Error, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde_json::Value;

/// An ordered set of named columns plus rows of JSON cells.
///
/// Invariant: every row has exactly `columns.len()` cells (short rows are
/// padded with null when read).
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Parse the first worksheet of an `.xlsx`/`.xls` byte buffer.
    pub fn from_workbook_bytes(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes.to_vec());
        let mut workbook = open_workbook_auto_from_rs(cursor)
            .map_err(|e| Error::Spreadsheet(e.to_string()))?;

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| Error::Spreadsheet(e.to_string()))?,
            None => return Ok(Self::default()),
        };

        let mut rows_iter = range.rows();
        let columns: Vec<String> = match rows_iter.next() {
            Some(header) => header
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let name = cell_to_header(cell);
                    if name.is_empty() {
                        format!("unnamed_{}", i)
                    } else {
                        name
                    }
                })
                .collect(),
            None => return Ok(Self::default()),
        };

        let rows = rows_iter
            .map(|row| {
                let mut cells: Vec<Value> = row.iter().map(cell_to_value).collect();
                cells.resize(columns.len(), Value::Null);
                cells.truncate(columns.len());
                cells
            })
            .collect();

        Ok(Self { columns, rows })
    }

    /// Index of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// One row as a `column name -> value` record.
    pub fn record(&self, row: usize) -> serde_json::Map<String, Value> {
        self.columns
            .iter()
            .cloned()
            .zip(self.rows[row].iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell_to_header(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        // Dates and durations carry through as their display form
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Table {
        Table {
            columns: vec!["partnum".into(), "classtype".into()],
            rows: vec![
                vec![json!("B10099368"), json!("BU")],
                vec![json!("B10099368"), json!("INC")],
            ],
        }
    }

    #[test]
    fn test_column_index() {
        let t = sample();
        assert_eq!(t.column_index("classtype"), Some(1));
        assert_eq!(t.column_index("missing"), None);
    }

    #[test]
    fn test_record_pairs_columns_with_cells() {
        let t = sample();
        let rec = t.record(0);
        assert_eq!(rec["partnum"], json!("B10099368"));
        assert_eq!(rec["classtype"], json!("BU"));
    }

    #[test]
    fn test_garbage_bytes_are_a_spreadsheet_error() {
        assert!(Table::from_workbook_bytes(b"not a workbook").is_err());
    }
}
