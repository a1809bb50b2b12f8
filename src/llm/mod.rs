// src/llm/mod.rs
// Answer provider abstraction and the Gemini implementation

pub mod gemini;
pub mod provider;

pub use gemini::GeminiClient;
pub use provider::AnswerProvider;
