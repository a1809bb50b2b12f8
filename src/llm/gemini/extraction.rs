// src/llm/gemini/extraction.rs
// Response extraction helpers for Gemini API responses

use crate::llm::gemini::types::{GeminiContent, GeminiResponse};

/// Text of the first candidate, if it has any
pub fn first_candidate_text(response: &GeminiResponse) -> Option<String> {
    response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()
        .and_then(extract_content)
}

/// Concatenated text parts of a content block. A word may be split across
/// parts, so the first token is only taken after joining.
pub fn extract_content(content: &GeminiContent) -> Option<String> {
    let text_parts: Vec<&str> = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join(""))
    }
}
