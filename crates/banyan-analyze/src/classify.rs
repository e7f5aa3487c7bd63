//! Heuristic column classification — BU/INC row partitioning.
//!
//! Column roles are resolved from column names by case-insensitive
//! substring rules, leftmost match first. Unresolved roles skip their
//! dependent statistics instead of failing.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::table::Table;

/// Category marker for business-unit rows.
pub const CATEGORY_MARKER_BU: &str = "BU";
/// Category marker for technical-specification rows.
pub const CATEGORY_MARKER_INC: &str = "INC";

/// Partition previews are capped at this many rows per bucket.
const PARTITION_PREVIEW_ROWS: usize = 10;
/// Leading rows included as sample data.
const SAMPLE_ROWS: usize = 5;

/// Column indices resolved for each semantic role. At most one column per
/// role; the leftmost matching column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub category: Option<usize>,
    pub identifier: Option<usize>,
    pub description: Option<usize>,
}

/// Resolve semantic roles from column names.
pub fn detect_roles(columns: &[String]) -> ColumnRoles {
    let lowered: Vec<String> = columns.iter().map(|c| c.to_lowercase()).collect();

    let category = lowered.iter().position(|c| {
        c.contains("classtype") || c.contains("class_type") || c.contains("type")
    });
    let identifier = lowered
        .iter()
        .position(|c| c.contains("part") && c.contains("num"));
    let description = lowered
        .iter()
        .position(|c| c.contains("escn") || c.contains("description"));

    ColumnRoles {
        category,
        identifier,
        description,
    }
}

/// Rollup of the resolved columns and their derived counts. Absent roles
/// leave their fields unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bu_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inc_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classtype_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_partnums: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnum_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_escns: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escn_column: Option<String>,
}

/// Per-column null counts and duplicate-row count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataQuality {
    pub null_counts: BTreeMap<String, usize>,
    pub duplicate_rows: usize,
}

/// Full analysis of one uploaded sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetAnalysis {
    pub total_rows: usize,
    pub columns: Vec<String>,
    pub column_count: usize,
    pub bu_items: Vec<serde_json::Map<String, Value>>,
    pub inc_items: Vec<serde_json::Map<String, Value>>,
    pub summary: SheetSummary,
    pub sample_data: Vec<serde_json::Map<String, Value>>,
    pub data_quality: DataQuality,
}

/// Analyze a table: resolve roles, partition rows by category marker,
/// and collect descriptive statistics. Pure function over the table.
pub fn analyze_table(table: &Table) -> SheetAnalysis {
    let roles = detect_roles(&table.columns);

    let sample_data: Vec<_> = (0..table.rows.len().min(SAMPLE_ROWS))
        .map(|i| table.record(i))
        .collect();

    let mut summary = SheetSummary::default();
    let mut bu_items = Vec::new();
    let mut inc_items = Vec::new();

    if let Some(cat) = roles.category {
        summary.classtype_column = Some(table.columns[cat].clone());

        let mut bu_count = 0usize;
        let mut inc_count = 0usize;
        for (i, row) in table.rows.iter().enumerate() {
            // Non-text cells are skipped from classification, not fatal
            let Some(marker) = row[cat].as_str() else {
                continue;
            };
            match marker.trim().to_uppercase().as_str() {
                CATEGORY_MARKER_BU => {
                    bu_count += 1;
                    if bu_items.len() < PARTITION_PREVIEW_ROWS {
                        bu_items.push(table.record(i));
                    }
                }
                CATEGORY_MARKER_INC => {
                    inc_count += 1;
                    if inc_items.len() < PARTITION_PREVIEW_ROWS {
                        inc_items.push(table.record(i));
                    }
                }
                _ => {}
            }
        }
        summary.bu_count = Some(bu_count);
        summary.inc_count = Some(inc_count);
    }

    if let Some(idx) = roles.identifier {
        summary.partnum_column = Some(table.columns[idx].clone());
        summary.unique_partnums = Some(unique_values(table, idx));
    }
    if let Some(idx) = roles.description {
        summary.escn_column = Some(table.columns[idx].clone());
        summary.unique_escns = Some(unique_values(table, idx));
    }

    SheetAnalysis {
        total_rows: table.rows.len(),
        columns: table.columns.clone(),
        column_count: table.columns.len(),
        bu_items,
        inc_items,
        summary,
        sample_data,
        data_quality: data_quality(table),
    }
}

fn unique_values(table: &Table, column: usize) -> usize {
    table
        .rows
        .iter()
        .filter(|row| !row[column].is_null())
        .map(|row| row[column].to_string())
        .collect::<HashSet<_>>()
        .len()
}

fn data_quality(table: &Table) -> DataQuality {
    let mut null_counts: BTreeMap<String, usize> = table
        .columns
        .iter()
        .map(|c| (c.clone(), 0usize))
        .collect();
    for row in &table.rows {
        for (col, cell) in table.columns.iter().zip(row) {
            if cell.is_null() {
                if let Some(count) = null_counts.get_mut(col) {
                    *count += 1;
                }
            }
        }
    }

    let mut seen = HashSet::new();
    let duplicate_rows = table
        .rows
        .iter()
        .filter(|row| !seen.insert(serde_json::to_string(row).unwrap_or_default()))
        .count();

    DataQuality {
        null_counts,
        duplicate_rows,
    }
}
