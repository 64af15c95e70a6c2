//! Event registration repository implementation

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::event::{EventRegistration, NewEventRegistration};
use crate::storage::Table;

/// Registrations are stored as given; event existence and past-event checks
/// belong to the caller.
#[derive(Clone, Default)]
pub struct RegistrationRepository {
    table: Arc<RwLock<Table<EventRegistration>>>,
}

impl RegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register participant for event
    pub async fn create(&self, request: NewEventRegistration) -> EventRegistration {
        self.table
            .write()
            .await
            .insert_with(|id| request.into_registration(id, Utc::now()))
    }

    /// Get registrations for an event
    pub async fn list_for_event(&self, event_id: i64) -> Vec<EventRegistration> {
        self.table
            .read()
            .await
            .filter(|registration| registration.event_id == event_id)
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.len()
    }
}
