// src/web/mod.rs
// Web server layer

pub mod api;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let official_email: Arc<str> = Arc::from(state.official_email());

    Router::new()
        // Unsupported methods on known paths get the same 404 envelope
        .route("/bfhl", post(api::bfhl).fallback(api::not_found))
        .route("/health", get(api::health).fallback(api::not_found))
        .fallback(api::not_found)
        .layer(CatchPanicLayer::custom(api::panic_response(official_email)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
