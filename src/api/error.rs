//! Error responses for HTTP handlers.
//!
//! Bridges [`GamesConnectError`] and HTTP, implementing Axum's
//! `IntoResponse` so handlers can use `?` on domain results.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::utils::errors::{ErrorSeverity, GamesConnectError};

/// Message returned for an unknown event id
pub const EVENT_NOT_FOUND: &str = "Event not found";
/// Message returned when registering for a past event
pub const PAST_EVENT: &str = "Cannot register for past events";
/// Message returned when the request body exceeds the configured limit
pub const BODY_TOO_LARGE: &str = "Request body too large";

/// HTTP error with a client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<GamesConnectError> for ApiError {
    fn from(err: GamesConnectError) -> Self {
        match err.severity() {
            ErrorSeverity::Info => debug!(error = %err, "Request rejected"),
            ErrorSeverity::Warning => warn!(error = %err, "Request rejected"),
            ErrorSeverity::Error | ErrorSeverity::Critical => error!(error = %err, "Request failed"),
        }

        match err {
            GamesConnectError::EventNotFound { .. } | GamesConnectError::InvalidEventId(_) => {
                Self::not_found(EVENT_NOT_FOUND)
            }
            GamesConnectError::PastEventRegistration { .. } => Self::bad_request(PAST_EVENT),
            GamesConnectError::PayloadTooLarge { .. } => Self::new(StatusCode::PAYLOAD_TOO_LARGE, BODY_TOO_LARGE),
            GamesConnectError::InvalidInput { payload, .. } => Self::bad_request(payload.rejection_message()),
            GamesConnectError::Config(_)
            | GamesConnectError::ConfigLoad(_)
            | GamesConnectError::Logging(_)
            | GamesConnectError::Io(_) => Self::internal(),
        }
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { message: self.message };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::PayloadKind;
    use crate::validation::ValidationErrors;

    #[test]
    fn test_not_found_mapping() {
        let err = ApiError::from(GamesConnectError::EventNotFound { event_id: 999 });
        assert_eq!(err, ApiError::not_found("Event not found"));

        let err = ApiError::from(GamesConnectError::InvalidEventId("abc".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_client_error_mapping() {
        let err = ApiError::from(GamesConnectError::PastEventRegistration { event_id: 3 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Cannot register for past events");

        let err = ApiError::from(GamesConnectError::invalid_input(
            PayloadKind::ContactForm,
            ValidationErrors::new(),
        ));
        assert_eq!(err.to_string(), "[400] Invalid contact form data");

        let err = ApiError::from(GamesConnectError::PayloadTooLarge { limit: 64 });
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.message(), "Request body too large");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = ApiError::from(GamesConnectError::Config("secret detail".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }
}
