//! Shared application state.

use std::sync::Arc;

use banyan_ai::Summarizer;
use banyan_core::ApiConfig;
use banyan_store::HistoryLog;

/// State shared by all route handlers.
pub struct AppState {
    pub config: ApiConfig,
    pub search_log: HistoryLog,
    pub excel_log: HistoryLog,
    pub extraction_log: HistoryLog,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    pub fn new(config: ApiConfig, summarizer: Arc<dyn Summarizer>) -> Self {
        let search_log = HistoryLog::open(&config.data_paths.search_results);
        let excel_log = HistoryLog::open(&config.data_paths.excel_results);
        let extraction_log = HistoryLog::open(&config.data_paths.extractions);
        Self {
            config,
            search_log,
            excel_log,
            extraction_log,
            summarizer,
        }
    }

    /// Server-generated timestamp attached to every produced result.
    pub fn timestamp() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}
