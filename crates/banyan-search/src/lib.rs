//! Banyan Search — deterministic mock result generators and the
//! part-catalog record model.

pub mod catalog;
pub mod mock;

pub use catalog::{parse_generated_records, sample_records, PartRecord, EXPECTED_PDF_TOKENS};
pub use mock::{document_results, general_results, trusted_site_results, SearchHit, TRUSTED_SITES};
