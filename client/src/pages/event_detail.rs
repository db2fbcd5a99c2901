//! Public event detail at `/events/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::actions;
use crate::components::registration_modal::RegistrationModal;
use crate::net::types::Event;
use crate::state::events::EventsState;
use crate::state::list::FetchStatus;
use crate::util::dates;

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let params = use_params_map();
    let registering = RwSignal::new(false);

    Effect::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        if !id.is_empty() {
            actions::events::load_event(events, id);
        }
    });

    let on_close = Callback::new(move |()| registering.set(false));

    view! {
        <main class="event-detail">
            <a class="event-detail__back" href="/">
                "← All events"
            </a>
            {move || match events.with(|s| s.detail.status) {
                FetchStatus::Idle | FetchStatus::Loading => view! { <p>"Loading..."</p> }.into_any(),
                FetchStatus::Failed => {
                    view! {
                        <p class="event-detail__error">
                            {events.with(|s| s.detail.error.clone().unwrap_or_default())}
                        </p>
                    }
                        .into_any()
                }
                FetchStatus::Succeeded => match events.with(|s| s.detail.item.clone()) {
                    Some(event) => view! { <EventSummary event=event registering=registering /> }.into_any(),
                    None => view! { <p>"Event not found"</p> }.into_any(),
                },
            }}
            {move || {
                if !registering.get() {
                    return None;
                }
                events
                    .with(|s| s.detail.item.clone())
                    .map(|event| view! { <RegistrationModal event=event on_close=on_close /> })
            }}
        </main>
    }
}

#[component]
fn EventSummary(event: Event, registering: RwSignal<bool>) -> impl IntoView {
    let open = event.has_open_seats();
    view! {
        <article class="event-detail__card">
            <h1>{event.event_name.clone()}</h1>
            <p class="event-detail__meta">
                <span>{dates::display_date(&event.event_date)}</span>
                <span>{event.event_location.clone()}</span>
            </p>
            <p class="event-detail__description">{event.event_description.clone()}</p>
            <dl class="event-detail__facts">
                <dt>"Capacity"</dt>
                <dd>{event.event_capacity}</dd>
                <dt>"Available"</dt>
                <dd>{event.available_capacity}</dd>
                <dt>"Seats"</dt>
                <dd>{format!("{}{} onward", event.prefix_seat_number, event.begin_seat_number)}</dd>
            </dl>
            <p class="event-detail__spots">{event.spots_label()}</p>
            <button class="btn btn--primary" disabled=!open on:click=move |_| registering.set(true)>
                {if open { "Register" } else { "Event Full" }}
            </button>
        </article>
    }
}
