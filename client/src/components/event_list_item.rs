//! Admin table row for one event.

use leptos::prelude::*;

use crate::net::types::{Event, Identified};
use crate::util::dates;

#[component]
pub fn EventListItem(event: Event, on_edit: Callback<Event>, on_delete: Callback<String>) -> impl IntoView {
    let id = event.key().to_owned();
    let href = format!("/dashboard/events/{id}");
    let date = dates::display_date(&event.event_date);
    let seats = format!("{}/{}", event.signup_count, event.event_capacity);
    let available = event.available_capacity;
    let name = event.event_name.clone();
    let location = event.event_location.clone();
    let created = dates::display_timestamp(&event.created_at);

    view! {
        <tr class="event-row" class:event-row--full=available <= 0>
            <td>
                <a class="event-row__name" href=href>
                    {name}
                </a>
            </td>
            <td>{date}</td>
            <td>{location}</td>
            <td class="event-row__seats">{seats}</td>
            <td class="event-row__available">{available}</td>
            <td class="event-row__created">{created}</td>
            <td class="event-row__actions">
                <button class="btn btn--small" on:click=move |_| on_edit.run(event.clone())>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
