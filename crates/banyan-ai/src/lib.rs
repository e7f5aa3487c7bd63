//! Banyan AI — text generation behind a capability trait.
//!
//! Route handlers never call the external API directly; they hold an
//! `Arc<dyn Summarizer>` so deployments can swap the Gemini provider for
//! a canned double in tests.

pub mod doubles;
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use doubles::{FailingSummarizer, StaticSummarizer};
pub use gemini::GeminiSummarizer;

/// The external text-generation call failed or is not configured.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct UnavailableError(pub String);

/// Capability interface for external text generation.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Send one prompt and return the generated text verbatim.
    async fn generate(&self, prompt: &str) -> Result<String, UnavailableError>;
}

/// A summarizer with no credentials; every call is unavailable.
pub struct Unconfigured;

#[async_trait]
impl Summarizer for Unconfigured {
    async fn generate(&self, _prompt: &str) -> Result<String, UnavailableError> {
        Err(UnavailableError("no API key configured".to_string()))
    }
}
