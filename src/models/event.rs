//! Event and event registration models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub image_url: String,
    pub is_past_event: bool,
    pub registration_link: Option<String>,
}

/// Event fields supplied at creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub image_url: String,
    #[serde(default)]
    pub is_past_event: bool,
    pub registration_link: Option<String>,
}

impl NewEvent {
    pub fn into_event(self, id: i64) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            image_url: self.image_url,
            is_past_event: self.is_past_event,
            registration_link: self.registration_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Registration fields supplied at creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventRegistration {
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewEventRegistration {
    pub fn into_registration(self, id: i64, created_at: DateTime<Utc>) -> EventRegistration {
        EventRegistration {
            id,
            event_id: self.event_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            created_at,
        }
    }
}
