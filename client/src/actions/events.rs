//! Public listing and registration workflows.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Identified, SignupPayload};
use crate::state::events::EventsState;
use crate::state::notification::NotificationState;

use super::{notify_error, notify_success, spawn};

pub const FETCH_EVENTS_FAILED: &str = "Failed to fetch events";
pub const FETCH_EVENT_FAILED: &str = "Failed to fetch event";
pub const REGISTERED: &str = "Registered successfully!";
pub const REGISTER_FAILED: &str = "Registration failed";

/// Fetch the current page of public events.
pub fn load_events(events: RwSignal<EventsState>) {
    let Some((ticket, params)) = events.try_update(|s| (s.list.begin_fetch(), s.list.params.clone())) else {
        return;
    };
    spawn(async move {
        let result = api::fetch_events(&params).await;
        if let Err(e) = &result {
            log::warn!("event list fetch failed: {e}");
        }
        events.try_update(|s| s.list.settle(ticket, result, FETCH_EVENTS_FAILED));
    });
}

pub fn search_events(events: RwSignal<EventsState>, search: String) {
    if events.try_update(|s| s.list.params.set_search(&search)).unwrap_or(false) {
        load_events(events);
    }
}

pub fn go_to_page(events: RwSignal<EventsState>, page: u32) {
    if events.try_update(|s| s.list.params.set_page(page)).unwrap_or(false) {
        load_events(events);
    }
}

pub fn set_page_size(events: RwSignal<EventsState>, limit: u32) {
    if events.try_update(|s| s.list.params.set_limit(limit)).unwrap_or(false) {
        load_events(events);
    }
}

/// Fetch one event for `/events/:id`.
pub fn load_event(events: RwSignal<EventsState>, id: String) {
    let Some(ticket) = events.try_update(|s| s.detail.begin_fetch()) else {
        return;
    };
    spawn(async move {
        let result = api::fetch_event(&id).await;
        events.try_update(|s| s.detail.settle(ticket, result, FETCH_EVENT_FAILED));
    });
}

/// Submit a signup. `on_done` receives `true` on success so the modal can
/// close; the listing and any open detail are then re-fetched.
pub fn register<F>(
    events: RwSignal<EventsState>,
    notification: RwSignal<NotificationState>,
    payload: SignupPayload,
    on_done: F,
) where
    F: FnOnce(bool) + 'static,
{
    spawn(async move {
        let event_id = payload.event_id.clone();
        match api::register_signup(&payload).await {
            Ok(()) => {
                notify_success(notification, REGISTERED);
                on_done(true);
                load_events(events);
                let viewing = events
                    .try_with_untracked(|s| s.detail.item.as_ref().is_some_and(|e| e.key() == event_id))
                    .unwrap_or(false);
                if viewing {
                    load_event(events, event_id);
                }
            }
            Err(e) => {
                notify_error(notification, e.user_message(REGISTER_FAILED));
                on_done(false);
            }
        }
    });
}
