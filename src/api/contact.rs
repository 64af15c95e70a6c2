//! Contact form endpoint.
//!
//! - POST /api/contact - Submit a contact message

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};

use super::error::ApiResult;
use super::events::{parse_json_body, read_body};
use super::AppState;
use crate::models::{ContactMessage, NewContactMessage};
use crate::utils::errors::PayloadKind;
use crate::utils::logging;
use crate::validation::Insertable;

/// Submit a contact message.
pub async fn submit_contact_message(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ContactMessage>> {
    let body = read_body(body, PayloadKind::ContactForm, state.settings.server.max_body_bytes)?;
    let request = NewContactMessage::parse(&parse_json_body(&body))?;
    let message = state.storage.create_contact_message(request).await;
    logging::log_contact_message(message.id);
    Ok(Json(message))
}
