//! Storage repositories module
//!
//! This module contains the in-memory repository for each entity

pub mod contact;
pub mod event;
pub mod registration;

// Re-export repositories
pub use contact::ContactRepository;
pub use event::EventRepository;
pub use registration::RegistrationRepository;
