//! Public landing page: searchable, paginated event cards.

use leptos::prelude::*;

use crate::actions;
use crate::components::event_card::EventCard;
use crate::components::pagination::{PageSizeSelect, Pagination};
use crate::components::registration_modal::RegistrationModal;
use crate::components::search_field::SearchField;
use crate::net::types::Event;
use crate::state::events::EventsState;
use crate::state::list::FetchStatus;

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let registering = RwSignal::new(None::<Event>);

    Effect::new(move || actions::events::load_events(events));

    let on_search = Callback::new(move |term: String| actions::events::search_events(events, term));
    let on_page = Callback::new(move |page| actions::events::go_to_page(events, page));
    let on_limit = Callback::new(move |limit| actions::events::set_page_size(events, limit));
    let on_register = Callback::new(move |event: Event| registering.set(Some(event)));
    let on_close = Callback::new(move |()| registering.set(None));

    view! {
        <main class="events-page">
            <header class="events-page__header">
                <h1>"Upcoming Events"</h1>
                <a class="events-page__admin" href="/login">
                    "Admin"
                </a>
            </header>
            <SearchField
                value=Signal::derive(move || events.with(|s| s.list.params.search.clone()))
                on_search=on_search
                placeholder="Search events..."
            />
            {move || match events.with(|s| s.list.status) {
                FetchStatus::Idle | FetchStatus::Loading => view! { <p class="events-page__status">"Loading..."</p> }.into_any(),
                FetchStatus::Failed => {
                    view! {
                        <p class="events-page__status events-page__status--error">
                            "Error: " {events.with(|s| s.list.error.clone().unwrap_or_default())}
                        </p>
                    }
                        .into_any()
                }
                FetchStatus::Succeeded => {
                    let items = events.with(|s| s.list.items.clone());
                    if items.is_empty() {
                        return view! { <p class="events-page__status">"No events found"</p> }.into_any();
                    }
                    view! {
                        <div class="events-page__grid">
                            {items
                                .into_iter()
                                .map(|event| view! { <EventCard event=event on_register=on_register /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <footer class="events-page__footer">
                <Pagination
                    page=Signal::derive(move || events.with(|s| s.list.params.page))
                    total_pages=Signal::derive(move || events.with(|s| s.list.total_pages()))
                    on_page=on_page
                />
                <PageSizeSelect limit=Signal::derive(move || events.with(|s| s.list.params.limit)) on_change=on_limit />
            </footer>
            {move || {
                registering
                    .get()
                    .map(|event| view! { <RegistrationModal event=event on_close=on_close /> })
            }}
        </main>
    }
}

