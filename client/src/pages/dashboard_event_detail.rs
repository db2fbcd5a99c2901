//! Admin view of one event with its signups.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::actions::dashboard as act;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::event_form::EventFormDialog;
use crate::components::signup_table::SignupTable;
use crate::net::types::{Event, Identified};
use crate::state::dashboard::{DashboardEventsState, EditorMode};
use crate::state::list::FetchStatus;
use crate::state::notification::NotificationState;
use crate::util::dates;

const EVENTS_PATH: &str = "/dashboard/events";

#[component]
pub fn DashboardEventDetailPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardEventsState>>();
    let notification = expect_context::<RwSignal<NotificationState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    Effect::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        if !id.is_empty() {
            act::load_event(dashboard, id);
        }
    });

    let deleted = RwSignal::new(false);
    Effect::new(move || {
        if deleted.get() {
            navigate(EVENTS_PATH, NavigateOptions::default());
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        act::confirm_delete(dashboard, notification, move || {
            deleted.try_set(true);
        });
    });
    let on_delete_cancel = Callback::new(move |()| act::dismiss_delete(dashboard));

    view! {
        <section class="admin-event">
            <a class="admin-event__back" href=EVENTS_PATH>
                "← Back to events"
            </a>
            {move || match dashboard.with(|s| s.detail.status) {
                FetchStatus::Idle | FetchStatus::Loading => view! { <p>"Loading..."</p> }.into_any(),
                FetchStatus::Failed => {
                    view! {
                        <p class="admin-event__error">
                            "Error: " {dashboard.with(|s| s.detail.error.clone().unwrap_or_default())}
                        </p>
                    }
                        .into_any()
                }
                FetchStatus::Succeeded => match dashboard.with(|s| s.detail.item.clone()) {
                    Some(event) => view! { <AdminEventSummary event=event /> }.into_any(),
                    None => view! { <p>"Event not found"</p> }.into_any(),
                },
            }}
            <SignupTable signups=Signal::derive(move || {
                dashboard.with(|s| s.detail.item.as_ref().map(|e| e.signups.clone()).unwrap_or_default())
            }) />
            <Show when=move || dashboard.with(|s| s.editor.is_open())>
                <EventFormDialog />
            </Show>
            <Show when=move || dashboard.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete Event"
                    message="Are you sure you want to delete this event? This action cannot be undone."
                    confirm_label="Delete"
                    busy=Signal::derive(move || dashboard.with(|s| s.submitting))
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}

#[component]
fn AdminEventSummary(event: Event) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardEventsState>>();
    let id = event.key().to_owned();
    let editable = event.clone();

    view! {
        <article class="admin-event__card">
            <header class="admin-event__header">
                <h1>{event.event_name.clone()}</h1>
                <div class="admin-event__actions">
                    <button
                        class="btn"
                        on:click=move |_| dashboard.update(|s| s.editor = EditorMode::Editing(editable.clone()))
                    >
                        "Edit"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| act::request_delete(dashboard, &id)>
                        "Delete"
                    </button>
                </div>
            </header>
            <p class="admin-event__description">{event.event_description.clone()}</p>
            <dl class="admin-event__facts">
                <dt>"Date"</dt>
                <dd>{dates::display_date(&event.event_date)}</dd>
                <dt>"Location"</dt>
                <dd>{event.event_location.clone()}</dd>
                <dt>"Capacity"</dt>
                <dd>{event.event_capacity}</dd>
                <dt>"Signups"</dt>
                <dd>{event.signup_count}</dd>
                <dt>"Available"</dt>
                <dd>{event.available_capacity}</dd>
                <dt>"Seat numbering"</dt>
                <dd>{format!("{}{}", event.prefix_seat_number, event.begin_seat_number)}</dd>
                <dt>"Created"</dt>
                <dd>{dates::display_timestamp(&event.created_at)}</dd>
                <dt>"Updated"</dt>
                <dd>{dates::display_timestamp(&event.updated_at)}</dd>
            </dl>
        </article>
    }
}
