//! Banyan Analyze — spreadsheet classification and document text matching.

pub mod classify;
pub mod matcher;
pub mod pdf;
pub mod table;

pub use classify::{analyze_table, detect_roles, ColumnRoles, SheetAnalysis};
pub use matcher::{check_text_matches, MatchReport, MATCH_THRESHOLD};
pub use pdf::extract_pdf_text;
pub use table::Table;
