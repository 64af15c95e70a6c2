//! Storage module
//!
//! In-memory repositories for every entity, plus the service that owns them.
//! Nothing here survives a restart.

pub mod repositories;
pub mod seed;
pub mod service;
pub mod table;

// Re-export commonly used storage components
pub use repositories::{ContactRepository, EventRepository, RegistrationRepository};
pub use seed::{load_sample_events, sample_events};
pub use service::{StorageService, StorageStats};
pub use table::Table;
