//! Test data helpers for request payloads

use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

/// The registration from the reference scenario
pub fn ama_registration() -> Value {
    json!({
        "name": "Ama",
        "email": "ama@example.com",
        "phone": "0551234567"
    })
}

/// A valid registration with a generated registrant name
pub fn random_registration(index: usize) -> Value {
    let name: String = Name().fake();
    json!({
        "name": name,
        "email": format!("guest{}@example.com", index),
        "phone": format!("055{:07}", index)
    })
}

pub fn contact_message(name: &str) -> Value {
    json!({
        "name": name,
        "email": "kofi@example.com",
        "message": "Will there be another games day this year?"
    })
}

pub fn new_event(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Card games, board games and good company.",
        "date": "2024-06-01T15:00:00Z",
        "location": "Osu, Accra",
        "imageUrl": "https://images.example.com/board-games.jpg",
        "registrationLink": "https://forms.gle/example3"
    })
}
