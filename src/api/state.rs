//! Application state for Axum handlers.

use std::sync::Arc;

use crate::config::Settings;
use crate::storage::StorageService;

/// State shared across all HTTP handlers.
///
/// Cloning is cheap: the storage tables and settings are shared.
#[derive(Clone)]
pub struct AppState {
    pub storage: StorageService,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(storage: StorageService, settings: Settings) -> Self {
        Self {
            storage,
            settings: Arc::new(settings),
        }
    }
}
