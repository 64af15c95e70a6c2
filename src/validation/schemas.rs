//! Validation rules for each insertable model

use serde_json::Value;

use super::{FieldReader, Insertable, ValidationErrors};
use crate::models::{NewContactMessage, NewEvent, NewEventRegistration};
use crate::utils::errors::PayloadKind;

/// Minimum number of characters in a registrant's phone number
pub const MIN_PHONE_LENGTH: usize = 10;

impl Insertable for NewEventRegistration {
    const KIND: PayloadKind = PayloadKind::Registration;

    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload)?;
        let event_id = reader.integer("eventId");
        let name = reader.non_empty_string("name");
        let email = reader.email("email");
        let phone = reader.string_with_min_length("phone", MIN_PHONE_LENGTH);

        match (event_id, name, email, phone) {
            (Some(event_id), Some(name), Some(email), Some(phone)) => Ok(NewEventRegistration {
                event_id,
                name,
                email,
                phone,
            }),
            _ => Err(reader.into_errors()),
        }
    }
}

impl Insertable for NewContactMessage {
    const KIND: PayloadKind = PayloadKind::ContactForm;

    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload)?;
        let name = reader.non_empty_string("name");
        let email = reader.email("email");
        let message = reader.non_empty_string("message");

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(NewContactMessage { name, email, message }),
            _ => Err(reader.into_errors()),
        }
    }
}

impl Insertable for NewEvent {
    const KIND: PayloadKind = PayloadKind::Event;

    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload)?;
        let title = reader.non_empty_string("title");
        let description = reader.non_empty_string("description");
        let date = reader.datetime("date");
        let location = reader.non_empty_string("location");
        let image_url = reader.non_empty_string("imageUrl");
        let is_past_event = reader.bool_or("isPastEvent", false);
        let registration_link = reader.optional_string("registrationLink");

        match (title, description, date, location, image_url, is_past_event, registration_link) {
            (
                Some(title),
                Some(description),
                Some(date),
                Some(location),
                Some(image_url),
                Some(is_past_event),
                Some(registration_link),
            ) => Ok(NewEvent {
                title,
                description,
                date,
                location,
                image_url,
                is_past_event,
                registration_link,
            }),
            _ => Err(reader.into_errors()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::GamesConnectError;
    use crate::validation::FieldIssue;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_valid_registration() {
        let payload = json!({
            "eventId": 1,
            "name": "Ama",
            "email": "ama@example.com",
            "phone": "0551234567"
        });

        let registration = NewEventRegistration::from_payload(&payload).unwrap();
        assert_eq!(registration.event_id, 1);
        assert_eq!(registration.name, "Ama");
        assert_eq!(registration.phone, "0551234567");
    }

    #[test]
    fn test_registration_collects_all_field_errors() {
        let payload = json!({
            "eventId": 1,
            "name": "",
            "email": "not-an-email",
            "phone": "12345"
        });

        let errors = NewEventRegistration::from_payload(&payload).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.issue_for("name"), Some(&FieldIssue::Empty));
        assert_eq!(errors.issue_for("email"), Some(&FieldIssue::InvalidEmail));
        assert_eq!(errors.issue_for("phone"), Some(&FieldIssue::TooShort { min: MIN_PHONE_LENGTH }));
    }

    #[test]
    fn test_registration_requires_event_id() {
        let payload = json!({ "name": "Ama", "email": "ama@example.com", "phone": "0551234567" });
        let errors = NewEventRegistration::from_payload(&payload).unwrap_err();
        assert_eq!(errors.issue_for("eventId"), Some(&FieldIssue::Missing));
    }

    #[test]
    fn test_parse_wraps_errors_with_payload_kind() {
        let result = NewEventRegistration::parse(&json!("just a string"));
        assert_matches!(
            result,
            Err(GamesConnectError::InvalidInput { payload: PayloadKind::Registration, .. })
        );
    }

    #[test]
    fn test_contact_message_rejects_empty_name() {
        let payload = json!({ "name": "", "email": "kofi@example.com", "message": "Hello!" });
        let errors = NewContactMessage::from_payload(&payload).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.issue_for("name"), Some(&FieldIssue::Empty));
    }

    #[test]
    fn test_contact_message_ignores_server_fields() {
        let payload = json!({
            "id": 99,
            "createdAt": "2001-01-01T00:00:00Z",
            "name": "Kofi",
            "email": "kofi@example.com",
            "message": "When is the next games day?"
        });

        let message = NewContactMessage::from_payload(&payload).unwrap();
        assert_eq!(
            message,
            NewContactMessage {
                name: "Kofi".to_string(),
                email: "kofi@example.com".to_string(),
                message: "When is the next games day?".to_string(),
            }
        );
    }

    #[test]
    fn test_event_defaults_past_flag_and_link() {
        let payload = json!({
            "title": "Board Game Brunch",
            "description": "Brunch and board games",
            "date": "2024-05-04",
            "location": "Osu, Accra",
            "imageUrl": "https://images.example.com/brunch.jpg"
        });

        let event = NewEvent::from_payload(&payload).unwrap();
        assert!(!event.is_past_event);
        assert_eq!(event.registration_link, None);
    }

    #[test]
    fn test_event_rejects_bad_date_and_flag() {
        let payload = json!({
            "title": "Board Game Brunch",
            "description": "Brunch and board games",
            "date": "next saturday",
            "location": "Osu, Accra",
            "imageUrl": "https://images.example.com/brunch.jpg",
            "isPastEvent": "no",
            "registrationLink": 5
        });

        let errors = NewEvent::from_payload(&payload).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.issue_for("date"), Some(&FieldIssue::InvalidDate));
        assert_eq!(errors.issue_for("isPastEvent"), Some(&FieldIssue::WrongType { expected: "a boolean" }));
        assert_eq!(errors.issue_for("registrationLink"), Some(&FieldIssue::WrongType { expected: "a string" }));
    }
}
