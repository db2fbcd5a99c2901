//! Registration table at `/dashboard/registrations`.

use leptos::prelude::*;

use crate::actions::registrations as act;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::{PageSizeSelect, Pagination};
use crate::components::search_field::SearchField;
use crate::net::types::{Identified, Registration};
use crate::state::list::FetchStatus;
use crate::state::notification::NotificationState;
use crate::state::registrations::RegistrationsState;
use crate::util::dates;

const COLUMNS: [(&str, &str); 3] = [("firstName", "Name"), ("seatNumber", "Seat"), ("createdAt", "Registered")];

#[component]
pub fn RegistrationsPage() -> impl IntoView {
    let registrations = expect_context::<RwSignal<RegistrationsState>>();
    let notification = expect_context::<RwSignal<NotificationState>>();

    Effect::new(move || act::load_registrations(registrations));

    let on_search = Callback::new(move |term: String| act::search_registrations(registrations, term));
    let on_page = Callback::new(move |page| act::go_to_page(registrations, page));
    let on_limit = Callback::new(move |limit| act::set_page_size(registrations, limit));
    let on_confirm = Callback::new(move |()| act::confirm_cancel(registrations, notification));
    let on_dismiss = Callback::new(move |()| act::dismiss_cancel(registrations));

    let sort_indicator = move |field: &str| {
        registrations.with(|s| {
            if s.list.params.sort_field == field { s.list.params.sort_order.as_str() } else { "" }
        })
    };

    view! {
        <section class="registrations">
            <header class="registrations__header">
                <h1>"Registrations"</h1>
            </header>
            <SearchField
                value=Signal::derive(move || registrations.with(|s| s.list.params.search.clone()))
                on_search=on_search
                placeholder="Search registrations..."
            />
            {move || match registrations.with(|s| s.list.status) {
                FetchStatus::Idle | FetchStatus::Loading => view! { <p>"Loading..."</p> }.into_any(),
                FetchStatus::Failed => {
                    view! {
                        <p class="registrations__error">
                            "Error: " {registrations.with(|s| s.list.error.clone().unwrap_or_default())}
                        </p>
                    }
                        .into_any()
                }
                FetchStatus::Succeeded => {
                    let rows = registrations.with(|s| s.list.items.clone());
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    {COLUMNS
                                        .into_iter()
                                        .map(|(field, label)| {
                                            view! {
                                                <th>
                                                    <button class="table__sort" on:click=move |_| act::sort_by(registrations, field)>
                                                        {label}
                                                        " "
                                                        <span class="table__sort-dir">{move || sort_indicator(field)}</span>
                                                    </button>
                                                </th>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                    <th>"Event"</th>
                                    <th>"Phone"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .is_empty()
                                    .then(|| {
                                        view! {
                                            <tr>
                                                <td colspan="7" class="table__empty">"No registrations found"</td>
                                            </tr>
                                        }
                                    })}
                                {rows
                                    .into_iter()
                                    .map(|row| view! { <RegistrationRow row=row /> })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            <footer class="registrations__footer">
                <Pagination
                    page=Signal::derive(move || registrations.with(|s| s.list.params.page))
                    total_pages=Signal::derive(move || registrations.with(|s| s.list.total_pages()))
                    on_page=on_page
                />
                <PageSizeSelect
                    limit=Signal::derive(move || registrations.with(|s| s.list.params.limit))
                    on_change=on_limit
                />
            </footer>
            <Show when=move || registrations.with(|s| s.pending_cancel.is_some())>
                <ConfirmDialog
                    title="Cancel Registration"
                    message="Are you sure you want to cancel this registration?"
                    confirm_label="Cancel Registration"
                    busy=Signal::derive(move || registrations.with(|s| s.cancelling.is_some()))
                    on_confirm=on_confirm
                    on_cancel=on_dismiss
                />
            </Show>
        </section>
    }
}

#[component]
fn RegistrationRow(row: Registration) -> impl IntoView {
    let registrations = expect_context::<RwSignal<RegistrationsState>>();
    let id = row.key().to_owned();
    let can_cancel = {
        let id = id.clone();
        move || registrations.with(|s| s.can_cancel(&id))
    };
    let event_name = row.event_name().unwrap_or("—").to_owned();

    view! {
        <tr class:table__row--inactive=!row.is_active>
            <td>{row.full_name()}</td>
            <td>{row.seat_number.clone()}</td>
            <td>{dates::display_timestamp(&row.created_at)}</td>
            <td>{event_name}</td>
            <td>{row.phone_number.clone()}</td>
            <td>{if row.is_active { "Active" } else { "Cancelled" }}</td>
            <td>
                <button
                    class="btn btn--small btn--danger"
                    disabled=move || !can_cancel()
                    on:click=move |_| act::request_cancel(registrations, &id)
                >
                    "Cancel"
                </button>
            </td>
        </tr>
    }
}
