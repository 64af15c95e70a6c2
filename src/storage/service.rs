//! Storage service layer
//!
//! This module provides the single entry point the HTTP layer uses to read
//! and create entities. Cloning the service shares the underlying tables.

use serde::Serialize;
use tracing::debug;

use crate::models::*;
use crate::storage::{ContactRepository, EventRepository, RegistrationRepository};

#[derive(Clone, Default)]
pub struct StorageService {
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
    pub contacts: ContactRepository,
}

/// Row counts for each collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub events: usize,
    pub registrations: usize,
    pub contact_messages: usize,
}

impl StorageService {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, in creation order
    pub async fn list_events(&self) -> Vec<Event> {
        self.events.list().await
    }

    pub async fn get_event(&self, id: i64) -> Option<Event> {
        self.events.find_by_id(id).await
    }

    pub async fn create_event(&self, event: NewEvent) -> Event {
        let event = self.events.create(event).await;
        debug!(event_id = event.id, title = %event.title, "Event stored");
        event
    }

    pub async fn create_contact_message(&self, message: NewContactMessage) -> ContactMessage {
        let message = self.contacts.create(message).await;
        debug!(message_id = message.id, "Contact message stored");
        message
    }

    /// Store a registration without checking the referenced event
    pub async fn create_event_registration(&self, registration: NewEventRegistration) -> EventRegistration {
        let registration = self.registrations.create(registration).await;
        debug!(
            registration_id = registration.id,
            event_id = registration.event_id,
            "Event registration stored"
        );
        registration
    }

    pub async fn get_event_registrations(&self, event_id: i64) -> Vec<EventRegistration> {
        self.registrations.list_for_event(event_id).await
    }

    pub async fn stats(&self) -> StorageStats {
        StorageStats {
            events: self.events.count().await,
            registrations: self.registrations.count().await,
            contact_messages: self.contacts.count().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::load_sample_events;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let storage = StorageService::new();
        assert!(storage.list_events().await.is_empty());
        assert_eq!(
            storage.stats().await,
            StorageStats { events: 0, registrations: 0, contact_messages: 0 }
        );
    }

    #[tokio::test]
    async fn test_get_event_registrations() {
        let storage = StorageService::new();
        load_sample_events(&storage).await;

        for (event_id, name) in [(1, "Ama"), (2, "Kofi"), (1, "Esi")] {
            storage
                .create_event_registration(NewEventRegistration {
                    event_id,
                    name: name.to_string(),
                    email: "guest@example.com".to_string(),
                    phone: "0551234567".to_string(),
                })
                .await;
        }

        let first_event: Vec<i64> = storage
            .get_event_registrations(1)
            .await
            .iter()
            .map(|registration| registration.id)
            .collect();
        assert_eq!(first_event, vec![1, 3]);
        assert!(storage.get_event_registrations(3).await.is_empty());
        assert_eq!(storage.stats().await.registrations, 3);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let storage = StorageService::new();
        let handle = storage.clone();
        handle
            .create_contact_message(NewContactMessage {
                name: "Kofi".to_string(),
                email: "kofi@example.com".to_string(),
                message: "Hi".to_string(),
            })
            .await;

        assert_eq!(storage.stats().await.contact_messages, 1);
    }
}
