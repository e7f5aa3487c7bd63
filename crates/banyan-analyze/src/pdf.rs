//! PDF text extraction.

use banyan_core::{Error, Result};

/// Extract all text from a PDF byte buffer, concatenated across pages.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| Error::Pdf(e.to_string()))
}
