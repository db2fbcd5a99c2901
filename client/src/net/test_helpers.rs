//! Fixture builders shared by unit tests.

use super::types::{Event, Registration, Signup};

#[must_use]
pub fn dummy_event(id: &str) -> Event {
    Event {
        id: id.to_owned(),
        object_id: None,
        event_name: format!("Event {id}"),
        event_description: "Talks and pizza".to_owned(),
        event_location: "Hall B".to_owned(),
        event_date: "2024-08-17T10:00:00.000Z".to_owned(),
        event_capacity: 40,
        prefix_seat_number: "A".to_owned(),
        begin_seat_number: 1,
        signup_count: 0,
        available_capacity: 40,
        created_at: "2024-08-01T00:00:00.000Z".to_owned(),
        updated_at: "2024-08-01T00:00:00.000Z".to_owned(),
        signups: Vec::new(),
    }
}

#[must_use]
pub fn dummy_signup(id: &str, first: &str, last: &str, created_at: &str) -> Signup {
    Signup {
        id: String::new(),
        object_id: Some(id.to_owned()),
        event_id: "e-1".to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        phone_number: "1234567890".to_owned(),
        seat_number: format!("A{id}"),
        is_active: true,
        created_at: created_at.to_owned(),
        updated_at: created_at.to_owned(),
    }
}

#[must_use]
pub fn dummy_registration(id: &str, active: bool) -> Registration {
    Registration {
        id: id.to_owned(),
        object_id: None,
        event_id: "e-1".to_owned(),
        event: None,
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        phone_number: "123-456-7890".to_owned(),
        seat_number: "A1".to_owned(),
        is_active: active,
        created_at: "2024-08-17T10:00:00.000Z".to_owned(),
        updated_at: "2024-08-17T10:00:00.000Z".to_owned(),
    }
}
