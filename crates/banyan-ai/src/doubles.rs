//! Summarizer doubles for tests and offline runs.

use async_trait::async_trait;

use crate::{Summarizer, UnavailableError};

/// Returns the same canned reply for every prompt.
pub struct StaticSummarizer {
    pub reply: String,
}

impl StaticSummarizer {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Summarizer for StaticSummarizer {
    async fn generate(&self, _prompt: &str) -> Result<String, UnavailableError> {
        Ok(self.reply.clone())
    }
}

/// Fails every call with the given message.
pub struct FailingSummarizer {
    pub message: String,
}

impl FailingSummarizer {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn generate(&self, _prompt: &str) -> Result<String, UnavailableError> {
        Err(UnavailableError(self.message.clone()))
    }
}
