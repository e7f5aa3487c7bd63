//! Excel analysis routes — BU/INC classification of uploaded sheets.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use banyan_analyze::{analyze_table, SheetAnalysis, Table};

use crate::error::ApiError;
use crate::routes::read_upload;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze-excel", post(analyze_excel))
        .route("/excel-analysis-history", get(excel_history))
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub filename: String,
    pub analysis: SheetAnalysis,
    pub ai_insights: String,
    pub timestamp: String,
}

/// POST /analyze-excel — classify an uploaded spreadsheet.
async fn analyze_excel(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let (filename, bytes) = read_upload(&mut multipart).await?;

    let lower = filename.to_lowercase();
    if !lower.ends_with(".xlsx") && !lower.ends_with(".xls") {
        return Err(ApiError::bad_request(
            "Invalid file type. Please upload an Excel file (.xlsx or .xls)",
        ));
    }

    let table = Table::from_workbook_bytes(&bytes)
        .map_err(|e| ApiError::bad_request(format!("Error reading Excel file: {}", e)))?;
    if table.is_empty() {
        return Err(ApiError::bad_request("The Excel file appears to be empty"));
    }

    let analysis = analyze_table(&table);

    let prompt = insights_prompt(&filename, &analysis);
    let ai_insights = match state.summarizer.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("AI insights degraded to fallback: {}", e);
            format!(
                "AI analysis unavailable due to: {}. However, the data has been \
                 successfully processed and analyzed.",
                e
            )
        }
    };

    let response = AnalysisResponse {
        filename,
        analysis,
        ai_insights,
        timestamp: AppState::timestamp(),
    };

    state.excel_log.append_or_log(&response);

    Ok(Json(response))
}

/// GET /excel-analysis-history — replay the analysis log.
async fn excel_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let history = state.excel_log.load()?;
    Ok(Json(serde_json::json!({
        "history": history,
        "total_analyses": history.len(),
        "message": "Excel analysis history retrieved successfully",
    })))
}

fn insights_prompt(filename: &str, analysis: &SheetAnalysis) -> String {
    let columns: Vec<&str> = analysis.columns.iter().take(10).map(|s| s.as_str()).collect();
    let ellipsis = if analysis.columns.len() > 10 { "..." } else { "" };

    format!(
        "Analyze this Excel data structure and provide insights:\n\n\
         Filename: {}\n\
         Total rows: {}\n\
         Total columns: {}\n\
         Columns: {}{}\n\n\
         Summary data:\n\
         - BU items: {}\n\
         - INC items: {}\n\
         - Unique part numbers: {}\n\
         - Unique ESCNs: {}\n\n\
         Please provide insights about:\n\
         1. What this data structure represents\n\
         2. What BU and INC classifications might mean in this context\n\
         3. Data quality observations\n\
         4. Potential use cases for this data\n\
         5. Any recommendations for data processing or analysis",
        filename,
        analysis.total_rows,
        analysis.column_count,
        columns.join(", "),
        ellipsis,
        count_or_not_detected(analysis.summary.bu_count),
        count_or_not_detected(analysis.summary.inc_count),
        count_or_not_detected(analysis.summary.unique_partnums),
        count_or_not_detected(analysis.summary.unique_escns),
    )
}

fn count_or_not_detected(count: Option<usize>) -> String {
    count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "Not detected".to_string())
}
