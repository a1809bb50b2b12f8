// src/web/api.rs
// REST API handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::any::Any;
use std::sync::Arc;
use tracing::{error, info};

use crate::envelope::ResponseEnvelope;
use crate::error::OperationError;
use crate::web::state::AppState;

/// HTTP status for a failed dispatch
pub fn status_for(err: &OperationError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn respond(status: StatusCode, envelope: ResponseEnvelope) -> Response {
    (status, Json(envelope)).into_response()
}

// ═══════════════════════════════════════
// DISPATCH
// ═══════════════════════════════════════

pub async fn bfhl(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        // Form-encoded or bodiless requests carry no operation keys
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
        Err(rejection) => {
            info!(error = %rejection.body_text(), "Rejected request body");
            return respond(
                StatusCode::BAD_REQUEST,
                ResponseEnvelope::failure(state.official_email(), "Invalid JSON payload"),
            );
        }
    };

    match state.dispatcher.dispatch(&payload).await {
        Ok(data) => respond(
            StatusCode::OK,
            ResponseEnvelope::success(state.official_email(), data),
        ),
        Err(err) => respond(
            status_for(&err),
            ResponseEnvelope::from_error(state.official_email(), &err),
        ),
    }
}

// ═══════════════════════════════════════
// HEALTH & FALLBACKS
// ═══════════════════════════════════════

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(ResponseEnvelope::ok(state.official_email()))
}

pub async fn not_found(State(state): State<AppState>) -> Response {
    respond(
        StatusCode::NOT_FOUND,
        ResponseEnvelope::failure(state.official_email(), "Not found"),
    )
}

/// Panic handler for `CatchPanicLayer`: a 500 envelope with no detail
pub fn panic_response(
    official_email: Arc<str>,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |panic: Box<dyn Any + Send + 'static>| -> Response {
        let detail = panic
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| panic.downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        error!(panic = detail, "Request handler panicked");

        respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            ResponseEnvelope::from_error(official_email.as_ref(), &OperationError::Internal),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for() {
        assert_eq!(
            status_for(&OperationError::invalid_request("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&OperationError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&OperationError::ServiceUnavailable("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&OperationError::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_panic_response_is_generic() {
        let handler = panic_response(Arc::from("a@b.c"));
        let response = handler(Box::new("secret detail".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
