//! Contact message repository implementation

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::contact::{ContactMessage, NewContactMessage};
use crate::storage::Table;

#[derive(Clone, Default)]
pub struct ContactRepository {
    table: Arc<RwLock<Table<ContactMessage>>>,
}

impl ContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a contact message
    pub async fn create(&self, request: NewContactMessage) -> ContactMessage {
        self.table
            .write()
            .await
            .insert_with(|id| request.into_message(id, Utc::now()))
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.len()
    }
}
