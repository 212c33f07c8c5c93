//! Mock GitHub server library.
//!
//! An in-memory stand-in for the slice of the GitHub REST API that issue
//! clients use: list/create/read/update issues, list/create comments and
//! fetch the current user. Responses are shaped like the real service's;
//! state lives in process memory and is gone when the process exits.
//!
//! The router is exposed here so tests can drive it in-process or bind it
//! to an ephemeral port.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use std::any::Any;
use std::time::Duration;

use axum::{
    Router,
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::error::AppError;
use crate::state::AppState;

/// Build the full application router with tracing and request ids.
pub fn app(state: AppState) -> Router {
    with_layers(
        Router::new()
            .route("/health", get(health))
            .merge(routes::routes()),
    )
    .with_state(state)
}

/// Wrap `router` in the panic guard, request id and trace layers.
fn with_layers(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
}

/// Turn a handler panic into a 500 so the connection gets an answer.
#[allow(clippy::needless_pass_by_value)]
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "handler panicked".to_string());
    AppError::Internal(message).into_response()
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
