//! Data extraction routes — sample catalog records plus AI-generated
//! additions.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use banyan_search::{parse_generated_records, sample_records, PartRecord};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/extract-data", post(extract_data))
        .route("/extraction-history", get(extraction_history))
}

#[derive(Debug, Deserialize)]
pub struct ExtractionRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub prompt: String,
    pub extracted_data: Vec<PartRecord>,
    pub total_records: usize,
    pub timestamp: String,
}

/// POST /extract-data — structured catalog records for table display.
async fn extract_data(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractionRequest>,
) -> Result<Json<ExtractionResponse>, ApiError> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::bad_request("Prompt cannot be empty"));
    }

    let mut records = sample_records();

    // AI additions are best effort; generation or parse failure leaves
    // the sample data untouched
    match state.summarizer.generate(&generation_prompt(&req.prompt)).await {
        Ok(text) => records.extend(parse_generated_records(&text)),
        Err(e) => warn!("AI record generation skipped: {}", e),
    }

    let response = ExtractionResponse {
        prompt: req.prompt,
        total_records: records.len(),
        extracted_data: records,
        timestamp: AppState::timestamp(),
    };

    state.extraction_log.append_or_log(&response);

    Ok(Json(response))
}

/// GET /extraction-history — replay the extraction log.
async fn extraction_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let history = state.extraction_log.load()?;
    Ok(Json(serde_json::json!({
        "history": history,
        "total_extractions": history.len(),
        "message": "Data extraction history retrieved successfully",
    })))
}

fn generation_prompt(prompt: &str) -> String {
    format!(
        "Based on this prompt: \"{}\"\n\n\
         Generate 5 additional industrial parts data entries following this exact format:\n\
         - partnum: Part number (format: B10XXXXXX where X are digits)\n\
         - escn: Equipment classification name (e.g., VALVE, MOTOR, SENSOR, etc.)\n\
         - classtype: Either \"BU\" (business unit info) or \"INC\" (technical specifications)\n\
         - property: Property name (for BU: MANUFACTURER NAME 1, MANUFACTURER NUMBER 1; \
         for INC: technical specs)\n\
         - value: Property value\n\
         - manufacturer: Manufacturer name\n\n\
         Return ONLY a valid JSON array with no additional text or formatting.",
        prompt
    )
}
