//! Create/edit dialog for admin events.

use leptos::prelude::*;

use crate::actions;
use crate::state::dashboard::{DashboardEventsState, EditorMode};
use crate::state::notification::NotificationState;
use crate::util::validation::{EventField, EventForm, FieldErrors};

const FIELDS: [(EventField, &str, &str); 7] = [
    (EventField::Name, "Event Name", "text"),
    (EventField::Description, "Event Description", "textarea"),
    (EventField::Location, "Event Location", "text"),
    (EventField::Date, "Event Date", "date"),
    (EventField::Capacity, "Event Capacity", "number"),
    (EventField::PrefixSeatNumber, "Prefix Seat Number", "text"),
    (EventField::BeginSeatNumber, "Begin Seat Number", "number"),
];

fn field_value(form: &EventForm, field: EventField) -> String {
    match field {
        EventField::Name => form.event_name.clone(),
        EventField::Description => form.event_description.clone(),
        EventField::Location => form.event_location.clone(),
        EventField::Date => form.event_date.clone(),
        EventField::Capacity => form.event_capacity.clone(),
        EventField::PrefixSeatNumber => form.prefix_seat_number.clone(),
        EventField::BeginSeatNumber => form.begin_seat_number.clone(),
    }
}

/// Rendered while the dashboard editor is open. Pre-filled when editing.
#[component]
pub fn EventFormDialog() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardEventsState>>();
    let notification = expect_context::<RwSignal<NotificationState>>();

    let initial = dashboard.with_untracked(|s| match &s.editor {
        EditorMode::Editing(event) => EventForm::from_event(event),
        _ => EventForm::default(),
    });
    let editing = dashboard.with_untracked(|s| s.editor.is_editing());
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::<EventField>::default());
    let submitting = move || dashboard.with(|s| s.submitting);
    let on_close = move || actions::dashboard::close_editor(dashboard);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(EventForm::to_payload) {
            Ok(payload) => {
                errors.set(FieldErrors::default());
                actions::dashboard::save_event(dashboard, notification, payload);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let inputs = FIELDS
        .into_iter()
        .map(|(field, label, kind)| {
            let value = move || form.with(|f| field_value(f, field));
            let on_input = move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                form.update(|f| f.set(field, value));
            };
            let control = if kind == "textarea" {
                view! { <textarea class="dialog__input" rows="3" prop:value=value on:input=on_input></textarea> }
                    .into_any()
            } else {
                view! { <input class="dialog__input" type=kind min="1" prop:value=value on:input=on_input /> }
                    .into_any()
            };
            view! {
                <label class="dialog__label" class:dialog__label--invalid=move || errors.with(|e| e.get(field).is_some())>
                    {label}
                    {control}
                    <span class="dialog__error">{move || errors.with(|e| e.get(field).unwrap_or_default())}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing { "Edit Event" } else { "Add Event" }}</h2>
                <form class="dialog__form" on:submit=on_submit novalidate=true>
                    {inputs}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=submitting>
                            {move || match (submitting(), editing) {
                                (true, _) => "Saving...",
                                (false, true) => "Update Event",
                                (false, false) => "Add Event",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
