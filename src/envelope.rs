// src/envelope.rs
// Uniform success/error response body

use serde::Serialize;

use crate::error::{OperationError, Result};
use crate::operations::OperationResult;

/// `{ is_success, official_email, data?, error? }`
///
/// `data` and `error` are never both present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<OperationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(official_email: impl Into<String>, data: OperationResult) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(official_email: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: official_email.into(),
            data: None,
            error: Some(error.into()),
        }
    }

    /// Bare acknowledgement with neither data nor error (health checks)
    pub fn ok(official_email: impl Into<String>) -> Self {
        Self {
            is_success: true,
            official_email: official_email.into(),
            data: None,
            error: None,
        }
    }

    /// Wrap a dispatch outcome
    pub fn from_outcome(official_email: impl Into<String>, outcome: Result<OperationResult>) -> Self {
        match outcome {
            Ok(data) => Self::success(official_email, data),
            Err(err) => Self::from_error(official_email, &err),
        }
    }

    pub fn from_error(official_email: impl Into<String>, err: &OperationError) -> Self {
        Self::failure(official_email, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn to_value(envelope: &ResponseEnvelope) -> Value {
        serde_json::from_str(&serde_json::to_string(envelope).unwrap()).unwrap()
    }

    #[test]
    fn test_success_shape() {
        let envelope = ResponseEnvelope::from_outcome("a@b.c", Ok(OperationResult::Hcf(6)));
        assert_eq!(
            to_value(&envelope),
            json!({"is_success": true, "official_email": "a@b.c", "data": 6})
        );
    }

    #[test]
    fn test_failure_shape() {
        let outcome = Err(OperationError::validation("Input too large"));
        let envelope = ResponseEnvelope::from_outcome("a@b.c", outcome);
        assert_eq!(
            to_value(&envelope),
            json!({"is_success": false, "official_email": "a@b.c", "error": "Input too large"})
        );
    }

    #[test]
    fn test_ok_shape() {
        assert_eq!(
            to_value(&ResponseEnvelope::ok("a@b.c")),
            json!({"is_success": true, "official_email": "a@b.c"})
        );
    }

    #[test]
    fn test_empty_sequence_is_still_data() {
        let envelope = ResponseEnvelope::success("a@b.c", OperationResult::Primes(vec![]));
        assert_eq!(to_value(&envelope)["data"], json!([]));
    }
}
