//! Liveness and service-info routes.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// GET /health — liveness check.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": AppState::timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Search and Analysis API is running smoothly",
    }))
}

/// GET / — service banner with the endpoint index.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Search and Analysis API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "search": "/search (POST)",
            "extract_data": "/extract-data (POST)",
            "analyze_excel": "/analyze-excel (POST)",
            "check_pdf": "/check-pdf (POST)",
            "search_history": "/search-history (GET)",
            "excel_history": "/excel-analysis-history (GET)",
            "extraction_history": "/extraction-history (GET)",
        },
    }))
}
