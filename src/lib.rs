//! Games & Connect API
//!
//! HTTP JSON API behind the Games & Connect community website: event
//! listings, event registration and contact-form submission, all held in
//! an in-memory store that is seeded at startup.

pub mod api;
pub mod config;
pub mod middleware;
pub mod models;
pub mod server;
pub mod storage;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{GamesConnectError, Result};

// Re-export main components for easy access
pub use api::{build_router, AppState};
pub use storage::StorageService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
