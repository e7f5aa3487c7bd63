//! Search routes — mock search variants plus AI summary.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use banyan_search::{document_results, general_results, trusted_site_results, SearchHit};

use crate::error::ApiError;
use crate::state::AppState;

/// Hits included as context in the summary prompt.
const SUMMARY_CONTEXT_HITS: usize = 3;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", post(search))
        .route("/search-history", get(search_history))
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub prompt: String,
    pub search_type: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub search_type: String,
    pub results: Vec<SearchHit>,
    pub ai_summary: String,
    pub timestamp: String,
}

/// POST /search — run a search variant and summarize the results.
async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::bad_request("Search prompt cannot be empty"));
    }

    let results = match req.search_type.as_str() {
        "general" => general_results(&req.prompt),
        "trusted_site" => trusted_site_results(&req.prompt),
        "trusted_document" => document_results(&req.prompt),
        _ => {
            return Err(ApiError::bad_request(
                "Invalid search type. Must be 'general', 'trusted_site', or 'trusted_document'",
            ));
        }
    };

    let prompt = summary_prompt(&req.prompt, &results);
    let ai_summary = match state.summarizer.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("AI summary degraded to fallback: {}", e);
            format!(
                "AI summary unavailable: {}. However, the search results above provide \
                 relevant information about {}.",
                e, req.prompt
            )
        }
    };

    let response = SearchResponse {
        query: req.prompt,
        search_type: req.search_type,
        results,
        ai_summary,
        timestamp: AppState::timestamp(),
    };

    state.search_log.append_or_log(&response);

    Ok(Json(response))
}

/// GET /search-history — replay the search log.
async fn search_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let history = state.search_log.load()?;
    Ok(Json(serde_json::json!({
        "history": history,
        "total_searches": history.len(),
        "message": "Search history retrieved successfully",
    })))
}

/// Build the summary prompt from the query and the top hits.
fn summary_prompt(query: &str, results: &[SearchHit]) -> String {
    let mut context = format!("Query: {}\n\nSearch Results:\n", query);
    for (i, hit) in results.iter().take(SUMMARY_CONTEXT_HITS).enumerate() {
        context.push_str(&format!(
            "{}. Title: {}\n   Summary: {}\n   Source: {}\n\n",
            i + 1,
            hit.title,
            hit.snippet,
            hit.source
        ));
    }

    format!(
        "Based on the following search results, provide a comprehensive and informative \
         summary about the query: \"{}\"\n\n{}\n\
         Please provide a helpful summary that:\n\
         1. Synthesizes the key information from these sources\n\
         2. Highlights the most important points\n\
         3. Provides actionable insights if applicable\n\
         4. Maintains accuracy based on the source information\n\n\
         Keep the summary concise but comprehensive (2-3 paragraphs).",
        query, context
    )
}
