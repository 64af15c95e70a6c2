//! Event API endpoints.
//!
//! - GET /api/events - List events
//! - GET /api/events/:id - Get event details
//! - POST /api/events/:id/register - Register for an upcoming event
//! - POST /api/events - Create an event (only when enabled in configuration)

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::debug;

use super::error::ApiResult;
use super::AppState;
use crate::models::{Event, EventRegistration, NewEvent, NewEventRegistration};
use crate::storage::StorageService;
use crate::utils::errors::{GamesConnectError, PayloadKind, Result};
use crate::utils::logging;
use crate::validation::{FieldIssue, Insertable, ValidationErrors};

/// Parse the event id path segment
pub fn parse_event_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| GamesConnectError::InvalidEventId(raw.to_string()))
}

/// Take the raw id segment, treating an undecodable segment as an invalid id
pub fn event_id_segment(path: std::result::Result<Path<String>, PathRejection>) -> Result<String> {
    path.map(|Path(id)| id)
        .map_err(|rejection| GamesConnectError::InvalidEventId(rejection.body_text()))
}

/// Turn a body extraction failure into a domain error.
///
/// Bodies over the configured limit become `PayloadTooLarge`; any other
/// read failure is an invalid payload of the given kind.
pub fn read_body(body: std::result::Result<Bytes, BytesRejection>, payload: PayloadKind, limit: usize) -> Result<Bytes> {
    body.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Request body rejected");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            GamesConnectError::PayloadTooLarge { limit }
        } else {
            let mut errors = ValidationErrors::new();
            errors.push("body", FieldIssue::WrongType { expected: "a readable request body" });
            GamesConnectError::invalid_input(payload, errors)
        }
    })
}

/// Parse a request body as JSON.
///
/// An empty or malformed body becomes `null`, which every schema rejects
/// as a validation failure rather than a transport error.
pub fn parse_json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Look up an event, failing with `EventNotFound`
pub async fn find_event(storage: &StorageService, event_id: i64) -> Result<Event> {
    storage
        .get_event(event_id)
        .await
        .ok_or(GamesConnectError::EventNotFound { event_id })
}

/// Register for an event.
///
/// The event must exist and must not be past; only then is the body
/// read and validated, with the event id injected from the path.
pub async fn register(storage: &StorageService, raw_event_id: &str, body: Result<Bytes>) -> Result<EventRegistration> {
    let event_id = parse_event_id(raw_event_id)?;
    let event = find_event(storage, event_id).await?;

    if event.is_past_event {
        logging::log_past_event_attempt(event_id);
        return Err(GamesConnectError::PastEventRegistration { event_id });
    }

    let mut payload = parse_json_body(&body?);
    if let Value::Object(fields) = &mut payload {
        fields.insert("eventId".to_string(), Value::from(event_id));
    }
    let request = NewEventRegistration::parse(&payload)?;

    let registration = storage.create_event_registration(request).await;
    logging::log_registration(event_id, registration.id);

    Ok(registration)
}

/// List all events.
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.storage.list_events().await)
}

/// Get a single event.
pub async fn get_event(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Event>> {
    let event_id = parse_event_id(&event_id_segment(path)?)?;
    let event = find_event(&state.storage, event_id).await?;
    Ok(Json(event))
}

/// Register for an event.
pub async fn register_for_event(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult<Json<EventRegistration>> {
    let id = event_id_segment(path)?;
    let body = read_body(body, PayloadKind::Registration, state.settings.server.max_body_bytes);
    let registration = register(&state.storage, &id, body).await?;
    Ok(Json(registration))
}

/// Create an event.
pub async fn create_event(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Event>> {
    let body = read_body(body, PayloadKind::Event, state.settings.server.max_body_bytes)?;
    let request = NewEvent::parse(&parse_json_body(&body))?;
    let event = state.storage.create_event(request).await;
    logging::log_event_created(event.id, &event.title);
    Ok(Json(event))
}
