//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to the history log files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Search history (`data/search_results.json`).
    pub search_results: PathBuf,
    /// Excel analysis history (`data/excel_analysis_results.json`).
    pub excel_results: PathBuf,
    /// Data extraction history (`data/data_extractions.json`).
    pub extractions: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            search_results: root.join("search_results.json"),
            excel_results: root.join("excel_analysis_results.json"),
            extractions: root.join("data_extractions.json"),
            root,
        })
    }
}

/// Top-level Banyan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Gemini API key; `None` means every AI call takes the fallback path.
    pub gemini_api_key: Option<String>,
    /// Gemini model name used for `generateContent`.
    pub gemini_model: String,
}

impl ApiConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
        })
    }
}
