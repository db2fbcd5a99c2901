//! Registration table workflows.

use leptos::prelude::*;

use crate::net::api;
use crate::state::notification::NotificationState;
use crate::state::registrations::RegistrationsState;

use super::{notify_error, notify_success, spawn};

pub const FETCH_FAILED: &str = "Failed to fetch registrations";
pub const CANCELLED: &str = "Registration cancelled successfully!";
pub const CANCEL_FAILED: &str = "Failed to cancel registration";

pub fn load_registrations(registrations: RwSignal<RegistrationsState>) {
    let Some((ticket, params)) = registrations.try_update(|s| (s.list.begin_fetch(), s.list.params.clone())) else {
        return;
    };
    spawn(async move {
        let result = api::fetch_registrations(&params).await;
        if let Err(e) = &result {
            log::warn!("registration fetch failed: {e}");
        }
        registrations.try_update(|s| s.list.settle(ticket, result, FETCH_FAILED));
    });
}

pub fn search_registrations(registrations: RwSignal<RegistrationsState>, search: String) {
    if registrations.try_update(|s| s.list.params.set_search(&search)).unwrap_or(false) {
        load_registrations(registrations);
    }
}

pub fn go_to_page(registrations: RwSignal<RegistrationsState>, page: u32) {
    if registrations.try_update(|s| s.list.params.set_page(page)).unwrap_or(false) {
        load_registrations(registrations);
    }
}

pub fn set_page_size(registrations: RwSignal<RegistrationsState>, limit: u32) {
    if registrations.try_update(|s| s.list.params.set_limit(limit)).unwrap_or(false) {
        load_registrations(registrations);
    }
}

pub fn sort_by(registrations: RwSignal<RegistrationsState>, field: &'static str) {
    registrations.update(|s| s.list.params.toggle_sort(field));
    load_registrations(registrations);
}

pub fn request_cancel(registrations: RwSignal<RegistrationsState>, id: &str) {
    registrations.update(|s| {
        s.request_cancel(id);
    });
}

pub fn dismiss_cancel(registrations: RwSignal<RegistrationsState>) {
    registrations.update(RegistrationsState::dismiss_cancel);
}

/// Cancel the confirmed row. The row flips to inactive only after the
/// backend accepts.
pub fn confirm_cancel(registrations: RwSignal<RegistrationsState>, notification: RwSignal<NotificationState>) {
    let Some(Some(id)) = registrations.try_update(RegistrationsState::confirm_cancel) else {
        return;
    };
    spawn(async move {
        match api::cancel_registration(&id).await {
            Ok(confirmed) => {
                registrations.try_update(|s| s.apply_cancelled(&id, confirmed));
                notify_success(notification, CANCELLED);
            }
            Err(e) => {
                log::warn!("registration cancel failed: {e}");
                registrations.try_update(|s| s.cancel_failed(&id));
                notify_error(notification, e.user_message(CANCEL_FAILED));
            }
        }
    });
}
