//! Public event summary card.
//!
//! DESIGN
//! ======
//! Capacity figures come straight from the backend (`signupCount`,
//! `availableCapacity`); the card never recomputes them.

use leptos::prelude::*;

use crate::net::types::{Event, Identified};
use crate::util::dates;

#[component]
pub fn EventCard(event: Event, on_register: Callback<Event>) -> impl IntoView {
    let href = format!("/events/{}", event.key());
    let date = dates::display_date(&event.event_date);
    let spots = event.spots_label();
    let fill = format!("width: {}%", event.fill_percent());
    let open = event.has_open_seats();
    let name = event.event_name.clone();
    let location = event.event_location.clone();
    let description = event.event_description.clone();

    view! {
        <article class="event-card" class:event-card--full=!open>
            <a class="event-card__title" href=href>
                {name}
            </a>
            <p class="event-card__meta">
                <span class="event-card__date">{date}</span>
                <span class="event-card__location">{location}</span>
            </p>
            <p class="event-card__description">{description}</p>
            <div class="event-card__capacity">
                <div class="capacity-bar" aria-hidden="true">
                    <span class="capacity-bar__fill" style=fill></span>
                </div>
                <span class="event-card__spots">{spots}</span>
            </div>
            <button
                class="btn btn--primary event-card__register"
                disabled=!open
                on:click=move |_| on_register.run(event.clone())
            >
                {if open { "Register" } else { "Event Full" }}
            </button>
        </article>
    }
}
