// src/error.rs
// Error taxonomy for dispatch and answer-provider failures

use thiserror::Error;

/// Every way a dispatched operation can fail.
///
/// The `Display` output is the exact message placed in the response
/// envelope's `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Zero or several operations named in one payload
    #[error("{0}")]
    InvalidRequest(String),

    /// Operation input failed a shape, type or range rule
    #[error("{0}")]
    Validation(String),

    /// The answer provider is misconfigured, unreachable or erroring
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Anything unexpected; never carries internal detail
    #[error("Something went wrong")]
    Internal,
}

impl OperationError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True for failures caused by the caller's payload (HTTP 400 class)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::Validation(_))
    }
}

/// Classified failures of an answer provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("API key not configured")]
    MissingCredential,

    #[error("API error: {0}")]
    UpstreamStatus(u16),

    #[error("Service error: request timed out")]
    Timeout,

    #[error("Service error: provider unreachable")]
    Transport,

    #[error("Service error: no answer returned")]
    NoAnswer,
}

impl From<ProviderError> for OperationError {
    fn from(err: ProviderError) -> Self {
        OperationError::ServiceUnavailable(err.to_string())
    }
}

/// Convenience type alias for Result using OperationError
pub type Result<T> = std::result::Result<T, OperationError>;
