//! Gemini `generateContent` provider.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::{Summarizer, UnavailableError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Non-streaming Gemini text generation over HTTP.
pub struct GeminiSummarizer {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiSummarizer {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Point the provider at a different endpoint (local mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn generate(&self, prompt: &str) -> Result<String, UnavailableError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
        });

        debug!("Calling Gemini model {}", self.model);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| UnavailableError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(UnavailableError(format!("API error {}: {}", status, text)));
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| UnavailableError(format!("Malformed response: {}", e)))?;

        let parts = parsed
            .pointer("/candidates/0/content/parts")
            .and_then(|p| p.as_array())
            .ok_or_else(|| UnavailableError("Response has no candidates".to_string()))?;

        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            return Err(UnavailableError("Response contained no text".to_string()));
        }
        Ok(text)
    }
}
