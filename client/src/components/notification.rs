//! Snackbar for mutation outcomes.

use leptos::prelude::*;

use crate::state::notification::NotificationState;

/// Renders the current notification, if visible. Auto-hide is scheduled by
/// `actions::notify`; the close button hides it early.
#[component]
pub fn Notification() -> impl IntoView {
    let notification = expect_context::<RwSignal<NotificationState>>();

    view! {
        <Show when=move || notification.with(|n| n.visible)>
            <div
                class=move || format!("notification {}", notification.with(|n| n.severity.css_modifier()))
                role="status"
                aria-live="polite"
            >
                <span class="notification__message">{move || notification.with(|n| n.message.clone())}</span>
                <button
                    class="notification__close"
                    aria-label="Close notification"
                    on:click=move |_| notification.update(NotificationState::dismiss)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
