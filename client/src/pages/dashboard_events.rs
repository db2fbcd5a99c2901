//! Admin event manager at `/dashboard` and `/dashboard/events`.

use leptos::prelude::*;

use crate::actions::dashboard as act;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::event_form::EventFormDialog;
use crate::components::event_list_item::EventListItem;
use crate::components::pagination::{PageSizeSelect, Pagination};
use crate::components::search_field::SearchField;
use crate::net::types::Event;
use crate::state::dashboard::{DashboardEventsState, EditorMode};
use crate::state::list::FetchStatus;
use crate::state::notification::NotificationState;

/// Sortable table columns: `(sortField, label)`.
const COLUMNS: [(&str, &str); 3] = [("eventName", "Name"), ("eventDate", "Date"), ("eventLocation", "Location")];

#[component]
pub fn DashboardEventsPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardEventsState>>();
    let notification = expect_context::<RwSignal<NotificationState>>();

    Effect::new(move || act::load_events(dashboard));

    let on_search = Callback::new(move |term: String| act::search_events(dashboard, term));
    let on_page = Callback::new(move |page| act::go_to_page(dashboard, page));
    let on_limit = Callback::new(move |limit| act::set_page_size(dashboard, limit));
    let on_edit = Callback::new(move |event: Event| dashboard.update(|s| s.editor = EditorMode::Editing(event)));
    let on_delete = Callback::new(move |id: String| act::request_delete(dashboard, &id));
    let on_delete_confirm = Callback::new(move |()| act::confirm_delete(dashboard, notification, || {}));
    let on_delete_cancel = Callback::new(move |()| act::dismiss_delete(dashboard));

    let sort_indicator = move |field: &str| {
        dashboard.with(|s| {
            if s.list.params.sort_field == field { s.list.params.sort_order.as_str() } else { "" }
        })
    };

    view! {
        <section class="admin-events">
            <header class="admin-events__header">
                <h1>"Events"</h1>
                <button class="btn btn--primary" on:click=move |_| act::open_create(dashboard)>
                    "Add New Event"
                </button>
            </header>
            <SearchField
                value=Signal::derive(move || dashboard.with(|s| s.list.params.search.clone()))
                on_search=on_search
                placeholder="Search events..."
            />
            {move || match dashboard.with(|s| s.list.status) {
                FetchStatus::Idle | FetchStatus::Loading => view! { <p>"Loading..."</p> }.into_any(),
                FetchStatus::Failed => {
                    view! {
                        <p class="admin-events__error">
                            "Error: " {dashboard.with(|s| s.list.error.clone().unwrap_or_default())}
                        </p>
                    }
                        .into_any()
                }
                FetchStatus::Succeeded => {
                    let items = dashboard.with(|s| s.list.items.clone());
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    {COLUMNS
                                        .into_iter()
                                        .map(|(field, label)| {
                                            view! {
                                                <th>
                                                    <button class="table__sort" on:click=move |_| act::sort_by(dashboard, field)>
                                                        {label}
                                                        " "
                                                        <span class="table__sort-dir">{move || sort_indicator(field)}</span>
                                                    </button>
                                                </th>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                    <th>"Filled"</th>
                                    <th>"Available"</th>
                                    <th>"Created"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .is_empty()
                                    .then(|| {
                                        view! {
                                            <tr>
                                                <td colspan="7" class="table__empty">"No events found"</td>
                                            </tr>
                                        }
                                    })}
                                {items
                                    .into_iter()
                                    .map(|event| view! { <EventListItem event=event on_edit=on_edit on_delete=on_delete /> })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            <footer class="admin-events__footer">
                <Pagination
                    page=Signal::derive(move || dashboard.with(|s| s.list.params.page))
                    total_pages=Signal::derive(move || dashboard.with(|s| s.list.total_pages()))
                    on_page=on_page
                />
                <PageSizeSelect limit=Signal::derive(move || dashboard.with(|s| s.list.params.limit)) on_change=on_limit />
            </footer>
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
