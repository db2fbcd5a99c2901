//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server guard already turns away anonymous requests for `/dashboard*`.
//! This covers the hydrated side: a session that expires while the dashboard
//! is open, or a logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// Redirect to `/login` once a session check has finished without a user.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(AuthState::should_redirect_to_login) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
