//! Signups embedded in an event, with local name filter and date sort.

use leptos::prelude::*;

use crate::net::types::Signup;
use crate::state::params::SortOrder;
use crate::util::dates;
use crate::util::signups::filter_and_sort_signups;

#[component]
pub fn SignupTable(#[prop(into)] signups: Signal<Vec<Signup>>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let order = RwSignal::new(SortOrder::Desc);

    let rows = move || signups.with(|all| filter_and_sort_signups(all, &search.get(), order.get()));
    let arrow = move || if order.get() == SortOrder::Asc { "▲" } else { "▼" };

    view! {
        <section class="signup-table">
            <header class="signup-table__header">
                <h3>"Signups"</h3>
                <input
                    class="search-field__input"
                    type="search"
                    placeholder="Filter by name"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Seat"</th>
                        <th>"Status"</th>
                        <th>
                            <button class="table__sort" on:click=move |_| order.update(|o| *o = o.toggled())>
                                "Registered " {arrow}
                            </button>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="5" class="table__empty">"No signups found"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        rows.into_iter()
                            .map(|s| {
                                view! {
                                    <tr class:table__row--inactive=!s.is_active>
                                        <td>{format!("{} {}", s.first_name, s.last_name)}</td>
                                        <td>{s.phone_number}</td>
                                        <td>{s.seat_number}</td>
                                        <td>{if s.is_active { "Active" } else { "Cancelled" }}</td>
                                        <td>{dates::display_timestamp(&s.created_at)}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>
        </section>
    }
}
