//! Administrator login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::state::auth::AuthState;
use crate::util::validation::{FieldErrors, LoginField, LoginForm};

pub const DASHBOARD_PATH: &str = "/dashboard";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::<LoginField>::default());
    let busy = move || auth.with(|s| s.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|s| s.loading) {
            return;
        }
        let request = match form.with_untracked(LoginForm::to_request) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        let navigate = navigate.clone();
        actions::auth::login(auth, request, move || {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Login"</h1>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <span class="login-form__error">
                        {move || errors.with(|e| e.get(LoginField::Email).unwrap_or_default())}
                    </span>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <span class="login-form__error">
                        {move || errors.with(|e| e.get(LoginField::Password).unwrap_or_default())}
                    </span>
                    <button class="btn btn--primary login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || auth.with(|s| s.error.is_some() && !s.loading)>
                    <p class="login-message login-message--error">
                        {move || auth.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <a class="login-card__back" href="/">
                    "Back to events"
                </a>
            </div>
        </div>
    }
}
