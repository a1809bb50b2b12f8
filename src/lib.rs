// src/lib.rs
// bfhl - single-endpoint operation dispatcher

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod http;
pub mod llm;
pub mod operations;
pub mod web;

pub use dispatch::Dispatcher;
pub use envelope::ResponseEnvelope;
pub use error::{OperationError, ProviderError, Result};
