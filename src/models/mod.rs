//! Data models module
//!
//! This module contains the entities owned by storage and the insertable
//! subsets clients may submit.

pub mod contact;
pub mod event;

// Re-export commonly used models
pub use contact::{ContactMessage, NewContactMessage};
pub use event::{Event, EventRegistration, NewEvent, NewEventRegistration};
