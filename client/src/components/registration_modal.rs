//! Signup dialog for a public event.
//!
//! Fields are checked on blur and again on submit; an invalid form never
//! reaches the network.

use leptos::prelude::*;

use crate::actions;
use crate::net::types::{Event, Identified};
use crate::state::events::EventsState;
use crate::state::notification::NotificationState;
use crate::util::validation::{FieldErrors, RegistrationField, RegistrationForm};

#[component]
pub fn RegistrationModal(event: Event, on_close: Callback<()>) -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let notification = expect_context::<RwSignal<NotificationState>>();

    let event_id = event.key().to_owned();
    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FieldErrors::<RegistrationField>::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let payload = match form.get_untracked().into_payload(&event_id) {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        submitting.set(true);
        actions::events::register(events, notification, payload, move |ok| {
            submitting.try_set(false);
            if ok {
                on_close.run(());
            }
        });
    };

    let field = move |field: RegistrationField, label: &'static str, kind: &'static str| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    class:dialog__input--invalid=move || errors.with(|e| e.get(field).is_some())
                    type=kind
                    prop:value=move || form.with(|f| f.value(field).to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| match field {
                            RegistrationField::FirstName => f.first_name = value,
                            RegistrationField::LastName => f.last_name = value,
                            RegistrationField::PhoneNumber => f.phone_number = value,
                        });
                    }
                    on:blur=move |_| {
                        let message = form.with_untracked(|f| RegistrationForm::check_field(field, f.value(field)));
                        errors.update(|e| e.set(field, message));
                    }
                />
                <span class="dialog__error">{move || errors.with(|e| e.get(field).unwrap_or_default())}</span>
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Register for " {event.event_name.clone()}</h2>
                <form class="dialog__form" on:submit=on_submit novalidate=true>
                    {field(RegistrationField::FirstName, "First Name", "text")}
                    {field(RegistrationField::LastName, "Last Name", "text")}
                    {field(RegistrationField::PhoneNumber, "Phone Number", "tel")}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
