//! PDF verification route — expected-token matching over extracted text.

use std::sync::Arc;

use axum::extract::Multipart;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use banyan_analyze::{check_text_matches, extract_pdf_text, MatchReport};
use banyan_search::EXPECTED_PDF_TOKENS;

use crate::error::ApiError;
use crate::routes::read_upload;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/check-pdf", post(check_pdf))
}

#[derive(Debug, Serialize)]
pub struct PdfCheckResponse {
    pub filename: String,
    pub check_result: MatchReport,
    pub expected_data: Vec<String>,
    pub timestamp: String,
}

/// POST /check-pdf — verify the upload contains enough expected values.
/// Results are returned but not persisted.
async fn check_pdf(mut multipart: Multipart) -> Result<Json<PdfCheckResponse>, ApiError> {
    let (filename, bytes) = read_upload(&mut multipart).await?;

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(ApiError::bad_request("Please upload a PDF file"));
    }

    let text = extract_pdf_text(&bytes)
        .map_err(|e| ApiError::bad_request(format!("Error reading PDF file: {}", e)))?;

    let check_result = check_text_matches(&text, EXPECTED_PDF_TOKENS);

    Ok(Json(PdfCheckResponse {
        filename,
        check_result,
        expected_data: EXPECTED_PDF_TOKENS.iter().map(|s| s.to_string()).collect(),
        timestamp: AppState::timestamp(),
    }))
}
