//! Error handling for games-connect
//!
//! This module defines the main error type used throughout the application
//! and the severity classification that drives how errors are logged.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Kind of client payload that failed validation.
///
/// Each kind has its own client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Registration,
    ContactForm,
    Event,
}

impl PayloadKind {
    /// Message returned to the client when a payload of this kind is rejected
    pub fn rejection_message(&self) -> &'static str {
        match self {
            PayloadKind::Registration => "Invalid registration data",
            PayloadKind::ContactForm => "Invalid contact form data",
            PayloadKind::Event => "Invalid event data",
        }
    }
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadKind::Registration => write!(f, "registration"),
            PayloadKind::ContactForm => write!(f, "contact form"),
            PayloadKind::Event => write!(f, "event"),
        }
    }
}

/// Main error type for the games-connect application
#[derive(Error, Debug)]
pub enum GamesConnectError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Invalid event id: {0:?}")]
    InvalidEventId(String),

    #[error("Cannot register for past event {event_id}")]
    PastEventRegistration { event_id: i64 },

    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Invalid {payload} payload: {errors}")]
    InvalidInput {
        payload: PayloadKind,
        errors: ValidationErrors,
    },
}

/// Result type alias for games-connect operations
pub type Result<T> = std::result::Result<T, GamesConnectError>;

impl GamesConnectError {
    /// Build an invalid input error for the given payload kind
    pub fn invalid_input(payload: PayloadKind, errors: ValidationErrors) -> Self {
        GamesConnectError::InvalidInput { payload, errors }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GamesConnectError::Config(_) => ErrorSeverity::Critical,
            GamesConnectError::ConfigLoad(_) => ErrorSeverity::Critical,
            GamesConnectError::Logging(_) => ErrorSeverity::Critical,
            GamesConnectError::Io(_) => ErrorSeverity::Error,
            GamesConnectError::PastEventRegistration { .. } => ErrorSeverity::Warning,
            GamesConnectError::EventNotFound { .. }
            | GamesConnectError::InvalidEventId(_)
            | GamesConnectError::PayloadTooLarge { .. }
            | GamesConnectError::InvalidInput { .. } => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldError, FieldIssue};

    #[test]
    fn test_client_errors_are_not_critical() {
        let errors = ValidationErrors::from(vec![FieldError::new("email", FieldIssue::InvalidEmail)]);
        let invalid = GamesConnectError::invalid_input(PayloadKind::Registration, errors);

        assert_eq!(invalid.severity(), ErrorSeverity::Info);
        assert_eq!(
            GamesConnectError::PastEventRegistration { event_id: 3 }.severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(GamesConnectError::PayloadTooLarge { limit: 64 }.severity(), ErrorSeverity::Info);
    }

    #[test]
    fn test_startup_errors_are_critical() {
        let err = GamesConnectError::Config("Server host is required".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Configuration error: Server host is required");
    }

    #[test]
    fn test_invalid_input_display_lists_fields() {
        let errors = ValidationErrors::from(vec![
            FieldError::new("name", FieldIssue::Empty),
            FieldError::new("phone", FieldIssue::TooShort { min: 10 }),
        ]);
        let err = GamesConnectError::invalid_input(PayloadKind::Registration, errors);

        assert_eq!(
            err.to_string(),
            "Invalid registration payload: name: must not be empty; phone: must be at least 10 characters"
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(PayloadKind::Registration.rejection_message(), "Invalid registration data");
        assert_eq!(PayloadKind::ContactForm.rejection_message(), "Invalid contact form data");
        assert_eq!(PayloadKind::Event.rejection_message(), "Invalid event data");
    }
}
