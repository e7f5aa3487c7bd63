//! HTTP route handlers.

pub mod excel;
pub mod extract;
pub mod meta;
pub mod pdf;
pub mod search;

use std::sync::Arc;

use axum::extract::Multipart;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(meta::routes())
        .merge(search::routes())
        .merge(extract::routes())
        .merge(excel::routes())
        .merge(pdf::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Pull the first file field out of a multipart upload.
pub(crate) async fn read_upload(
    multipart: &mut Multipart,
) -> Result<(String, axum::body::Bytes), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|n| n.to_string()) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;
        return Ok((filename, bytes));
    }
    Err(ApiError::bad_request("No file uploaded"))
}
