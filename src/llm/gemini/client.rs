// src/llm/gemini/client.rs
// Google Gemini API client (single prompt, non-streaming, no retries)
// Gemini authenticates via query-string key, not a Bearer header

use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::AiConfig;
use crate::error::ProviderError;
use crate::http::create_client;
use crate::llm::gemini::extraction::first_candidate_text;
use crate::llm::gemini::types::{GeminiRequest, GeminiResponse};
use crate::llm::provider::AnswerProvider;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Google Gemini API client
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    api_base: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Build a client with its own HTTP client bounded by the configured timeout
    pub fn from_config(config: &AiConfig) -> reqwest::Result<Self> {
        let http = create_client(config.timeout)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Build a client around an existing HTTP client
    pub fn with_http_client(config: &AiConfig, http: reqwest::Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        )
    }
}

/// Map a reqwest failure onto the provider error classes
fn classify(err: &reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else if err.is_decode() {
        ProviderError::NoAnswer
    } else {
        ProviderError::Transport
    }
}

#[async_trait]
impl AnswerProvider for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, prompt), fields(request_id, model = %self.model))]
    async fn ask(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingCredential)?;

        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();
        Span::current().record("request_id", &request_id);

        info!(request_id = %request_id, prompt_chars = prompt.chars().count(), "Starting Gemini request");

        let response = self
            .http
            .post(self.endpoint(api_key))
            .json(&GeminiRequest::single_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                let kind = classify(&e);
                // Log without the URL; it carries the key
                warn!(request_id = %request_id, error = %e.without_url(), "Gemini request failed");
                kind
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(request_id = %request_id, status = %status, body = %body, "Gemini returned an error status");
            return Err(ProviderError::UpstreamStatus(status.as_u16()));
        }

        let data: GeminiResponse = response.json().await.map_err(|e| {
            let kind = classify(&e);
            warn!(request_id = %request_id, error = %e.without_url(), "Failed to read Gemini response");
            kind
        })?;

        let finish_reason = data
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        let text = first_candidate_text(&data).ok_or_else(|| {
            warn!(request_id = %request_id, finish_reason = ?finish_reason, "Gemini returned no answer");
            ProviderError::NoAnswer
        })?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        debug!(
            request_id = %request_id,
            duration_ms,
            finish_reason = ?finish_reason,
            response_chars = text.len(),
            "Gemini request complete"
        );

        Ok(text)
    }
}
