// src/operations/ai.rs
// One-word answers from the answer provider

use serde_json::Value;
use tracing::warn;

use crate::error::{OperationError, ProviderError, Result};
use crate::llm::AnswerProvider;

/// Maximum question length in characters
pub const MAX_QUESTION_CHARS: usize = 500;

/// Characters stripped from the end of the answer token
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Check the raw input; the untrimmed question is returned on success.
pub fn validate(value: &Value) -> Result<&str> {
    let question = value
        .as_str()
        .ok_or_else(|| OperationError::validation("Question must be a string"))?;

    if question.trim().is_empty() {
        return Err(OperationError::validation("Question cannot be empty"));
    }
    if question.chars().count() > MAX_QUESTION_CHARS {
        return Err(OperationError::validation("Question too long"));
    }

    Ok(question)
}

/// Prompt sent to the provider for a question
pub fn prompt_for(question: &str) -> String {
    format!("Answer this question with just one word: {}", question)
}

/// First whitespace-delimited token with trailing punctuation removed.
///
/// Returns `None` when nothing is left.
pub fn normalize_answer(text: &str) -> Option<String> {
    let token = text
        .split_whitespace()
        .next()?
        .trim_end_matches(TRAILING_PUNCTUATION);
    (!token.is_empty()).then(|| token.to_string())
}

pub async fn handle(value: &Value, provider: &dyn AnswerProvider) -> Result<String> {
    let question = validate(value)?;

    let reply = provider.ask(&prompt_for(question)).await.map_err(|e| {
        warn!(provider = provider.name(), error = %e, "Answer provider call failed");
        OperationError::from(e)
    })?;

    normalize_answer(&reply).ok_or_else(|| {
        warn!(provider = provider.name(), "Answer provider reply had no usable token");
        ProviderError::NoAnswer.into()
    })
}
