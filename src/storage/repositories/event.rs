//! Event repository implementation

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::event::{Event, NewEvent};
use crate::storage::Table;

#[derive(Clone, Default)]
pub struct EventRepository {
    table: Arc<RwLock<Table<Event>>>,
}

impl EventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new event
    pub async fn create(&self, request: NewEvent) -> Event {
        self.table.write().await.insert_with(|id| request.into_event(id))
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Option<Event> {
        self.table.read().await.get(id)
    }

    /// List all events in creation order
    pub async fn list(&self) -> Vec<Event> {
        self.table.read().await.all()
    }

    /// Count total events
    pub async fn count(&self) -> usize {
        self.table.read().await.len()
    }
}
