//! Admin event workflows: list, detail, create, update, delete.
//!
//! Mutations wait for the backend's answer before touching the store, then
//! re-fetch the current page so totals and pagination follow the server.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{EventPayload, Identified};
use crate::state::dashboard::{DashboardEventsState, EditorMode};
use crate::state::notification::NotificationState;

use super::{notify_error, notify_success, spawn};

pub const FETCH_EVENTS_FAILED: &str = "Failed to fetch events";
pub const FETCH_EVENT_FAILED: &str = "Failed to fetch event";
pub const EVENT_ADDED: &str = "Event added successfully!";
pub const EVENT_UPDATED: &str = "Event updated successfully!";
pub const SAVE_FAILED: &str = "Failed to process event";
pub const EVENT_DELETED: &str = "Event deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete event";

pub fn load_events(dashboard: RwSignal<DashboardEventsState>) {
    let Some((ticket, params)) = dashboard.try_update(|s| (s.list.begin_fetch(), s.list.params.clone())) else {
        return;
    };
    spawn(async move {
        let result = api::fetch_events(&params).await;
        if let Err(e) = &result {
            log::warn!("dashboard event fetch failed: {e}");
        }
        dashboard.try_update(|s| s.list.settle(ticket, result, FETCH_EVENTS_FAILED));
    });
}

pub fn search_events(dashboard: RwSignal<DashboardEventsState>, search: String) {
    if dashboard.try_update(|s| s.list.params.set_search(&search)).unwrap_or(false) {
        load_events(dashboard);
    }
}

pub fn go_to_page(dashboard: RwSignal<DashboardEventsState>, page: u32) {
    if dashboard.try_update(|s| s.list.params.set_page(page)).unwrap_or(false) {
        load_events(dashboard);
    }
}

pub fn set_page_size(dashboard: RwSignal<DashboardEventsState>, limit: u32) {
    if dashboard.try_update(|s| s.list.params.set_limit(limit)).unwrap_or(false) {
        load_events(dashboard);
    }
}

/// Column-header click on the events table.
pub fn sort_by(dashboard: RwSignal<DashboardEventsState>, field: &'static str) {
    dashboard.update(|s| s.list.params.toggle_sort(field));
    load_events(dashboard);
}

pub fn load_event(dashboard: RwSignal<DashboardEventsState>, id: String) {
    let Some(ticket) = dashboard.try_update(|s| s.detail.begin_fetch()) else {
        return;
    };
    spawn(async move {
        let result = api::fetch_event(&id).await;
        dashboard.try_update(|s| s.detail.settle(ticket, result, FETCH_EVENT_FAILED));
    });
}

pub fn open_create(dashboard: RwSignal<DashboardEventsState>) {
    dashboard.update(|s| s.editor = EditorMode::Creating);
}

pub fn close_editor(dashboard: RwSignal<DashboardEventsState>) {
    dashboard.update(|s| s.editor = EditorMode::Closed);
}

/// Create or update depending on the editor mode. The dialog closes only on
/// success so the admin can correct a rejected submission.
pub fn save_event(
    dashboard: RwSignal<DashboardEventsState>,
    notification: RwSignal<NotificationState>,
    payload: EventPayload,
) {
    let Some(Some(mode)) = dashboard.try_update(|s| {
        if s.submitting || !s.editor.is_open() {
            return None;
        }
        s.submitting = true;
        Some(s.editor.clone())
    }) else {
        return;
    };
    spawn(async move {
        let result = match &mode {
            EditorMode::Editing(event) => api::update_event(event.key(), &payload).await,
            _ => api::create_event(&payload).await,
        };
        match result {
            Ok(saved) => {
                let message = if mode.is_editing() { EVENT_UPDATED } else { EVENT_ADDED };
                dashboard.try_update(|s| {
                    if mode.is_editing() {
                        s.apply_updated(saved);
                    } else {
                        s.apply_created(saved);
                    }
                    s.submitting = false;
                    s.editor = EditorMode::Closed;
                });
                notify_success(notification, message);
                load_events(dashboard);
            }
            Err(e) => {
                log::warn!("event save failed: {e}");
                dashboard.try_update(|s| s.submitting = false);
                notify_error(notification, e.user_message(SAVE_FAILED));
            }
        }
    });
}

pub fn request_delete(dashboard: RwSignal<DashboardEventsState>, id: &str) {
    dashboard.update(|s| s.request_delete(id));
}

pub fn dismiss_delete(dashboard: RwSignal<DashboardEventsState>) {
    dashboard.update(|s| {
        s.take_pending_delete();
    });
}

/// Delete the event awaiting confirmation. `on_deleted` runs after the store
/// has dropped it (the detail page uses it to navigate back).
pub fn confirm_delete<F>(
    dashboard: RwSignal<DashboardEventsState>,
    notification: RwSignal<NotificationState>,
    on_deleted: F,
) where
    F: FnOnce() + 'static,
{
    let Some(Some(id)) = dashboard.try_update(|s| {
        let id = s.take_pending_delete()?;
        s.submitting = true;
        Some(id)
    }) else {
        return;
    };
    spawn(async move {
        match api::delete_event(&id).await {
            Ok(()) => {
                dashboard.try_update(|s| {
                    s.apply_deleted(&id);
                    s.submitting = false;
                });
                notify_success(notification, EVENT_DELETED);
                on_deleted();
                load_events(dashboard);
            }
            Err(e) => {
                log::warn!("event delete failed: {e}");
                dashboard.try_update(|s| s.submitting = false);
                notify_error(notification, e.user_message(DELETE_FAILED));
            }
        }
    });
}
