//! Async workflows that tie REST calls to the reactive stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call into these instead of talking to `net::api` directly. Each
//! action updates its store synchronously (loading flags, tickets), spawns the
//! request, and settles the store when the response lands. Requests only run
//! in the hydrated browser; during SSR the spawned future is dropped and the
//! store stays in its loading state until hydration re-runs the action.

pub mod auth;
pub mod dashboard;
pub mod events;
pub mod registrations;

use std::future::Future;

use leptos::prelude::*;

use crate::state::notification::{NotificationState, Severity};

/// Run `fut` on the browser task queue.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Show a snackbar and schedule its auto-hide.
pub fn notify(notification: RwSignal<NotificationState>, severity: Severity, message: impl Into<String>) {
    let message = message.into();
    let Some(seq) = notification.try_update(|n| n.show(severity, message)) else {
        return;
    };
    spawn(async move {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::TimeoutFuture::new(crate::state::notification::AUTO_HIDE_MS).await;
        notification.try_update(|n| n.hide(seq));
    });
}

pub fn notify_success(notification: RwSignal<NotificationState>, message: impl Into<String>) {
    notify(notification, Severity::Success, message);
}

pub fn notify_error(notification: RwSignal<NotificationState>, message: impl Into<String>) {
    notify(notification, Severity::Error, message);
}
