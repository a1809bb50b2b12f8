// src/web/state.rs
// Web server state management

use std::sync::Arc;

use crate::config::AppConfig;
use crate::dispatch::Dispatcher;
use crate::llm::AnswerProvider;

/// Shared application state; everything in it is read-only
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, provider: Arc<dyn AnswerProvider>) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(provider),
        }
    }

    pub fn official_email(&self) -> &str {
        &self.config.official_email
    }
}
