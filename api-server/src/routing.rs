//! Axum router configuration for all endpoints

use crate::handlers;
use crate::AppState;
use axum::body::Body;
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

/// Create the application router with tracing and permissive CORS applied.
pub fn create_router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        info_span!(
            "request",
            id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    Router::new()
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/test-sentiment", post(handlers::test_sentiment))
        .route("/api/health", get(handlers::health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(trace)
                .layer(CorsLayer::permissive()),
        )
}
