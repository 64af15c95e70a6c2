//! HTTP API module
//!
//! Builds the Axum router. Handlers stay thin: they parse the request,
//! call into storage and map domain errors to HTTP responses.

pub mod contact;
pub mod error;
pub mod events;
pub mod health;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use crate::middleware;

/// Build the complete Axum router.
///
/// `POST /api/events` is only mounted when
/// `features.event_creation_api` is enabled.
pub fn build_router(state: AppState) -> Router {
    let events_root = if state.settings.features.event_creation_api {
        get(events::list_events).post(events::create_event)
    } else {
        get(events::list_events)
    };

    let api_routes = Router::new()
        .route("/events", events_root.fallback(method_not_allowed))
        .route("/events/:id", get(events::get_event).fallback(method_not_allowed))
        .route(
            "/events/:id/register",
            post(events::register_for_event).fallback(method_not_allowed),
        )
        .route(
            "/contact",
            post(contact::submit_contact_message).fallback(method_not_allowed),
        );

    let router = Router::new()
        .route("/health", get(health::health_check).fallback(method_not_allowed))
        .route("/ready", get(health::readiness_check).fallback(method_not_allowed))
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.settings.server.max_body_bytes));

    middleware::logging::with_request_tracing(router).with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
