// src/llm/provider.rs
// Answer provider trait

use async_trait::async_trait;

use crate::error::ProviderError;

/// Anything that turns a prompt into free text.
///
/// Implementations classify their own failures; callers never see
/// transport-specific error types.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Send a single prompt and return the reply text
    async fn ask(&self, prompt: &str) -> Result<String, ProviderError>;
}
