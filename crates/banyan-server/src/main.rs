//! Banyan — search and analysis API server.

use std::path::PathBuf;
use std::sync::Arc;

use banyan_ai::{GeminiSummarizer, Summarizer, Unconfigured};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("BANYAN_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = banyan_core::ApiConfig::from_env(&data_dir)?;
    let port = config.port;

    let summarizer: Arc<dyn Summarizer> = match &config.gemini_api_key {
        Some(key) => Arc::new(GeminiSummarizer::new(config.gemini_model.clone(), key.clone())),
        None => {
            info!("GEMINI_API_KEY not set; AI responses will use fallback text");
            Arc::new(Unconfigured)
        }
    };

    let state = Arc::new(AppState::new(config, summarizer));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Banyan server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
