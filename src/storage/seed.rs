//! Sample events loaded at startup

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::models::NewEvent;
use crate::storage::StorageService;

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The fixed sample events, in the order they are created
pub fn sample_events() -> Vec<NewEvent> {
    vec![
        NewEvent {
            title: "Games Day at Akosombo".to_string(),
            description: "Join us for a fun-filled day of outdoor games and activities at the beautiful Akosombo!"
                .to_string(),
            date: midnight(2024, 4, 15),
            location: "Akosombo, Ghana".to_string(),
            image_url: "https://images.unsplash.com/photo-1489493887464-892be6d1daae".to_string(),
            is_past_event: false,
            registration_link: Some("https://forms.gle/example1".to_string()),
        },
        NewEvent {
            title: "Night Games and Party at the Beach".to_string(),
            description: "Experience the thrill of night games followed by a beach party under the stars!"
                .to_string(),
            date: midnight(2024, 4, 28),
            location: "Labadi Beach, Accra".to_string(),
            image_url: "https://images.unsplash.com/photo-1481889617387-82a8f2413b6b".to_string(),
            is_past_event: false,
            registration_link: Some("https://forms.gle/example2".to_string()),
        },
        NewEvent {
            title: "Community Game Night".to_string(),
            description: "Indoor games, trivia, and networking with the Games & Connect community!".to_string(),
            date: midnight(2024, 3, 10),
            location: "Community Center, East Legon".to_string(),
            image_url: "https://images.unsplash.com/photo-1522543558187-768b6df7c25c".to_string(),
            is_past_event: true,
            registration_link: None,
        },
    ]
}

/// Create the sample events through the regular event creation path
pub async fn load_sample_events(storage: &StorageService) {
    let events = sample_events();
    let count = events.len();
    for event in events {
        storage.create_event(event).await;
    }
    info!(count = count, "Loaded sample events");
}
