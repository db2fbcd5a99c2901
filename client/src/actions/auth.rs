//! Session workflows: profile check, login, logout.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::cookie;

use super::spawn;

pub const LOGIN_FAILED: &str = "Invalid email or password. Please try again.";

/// Validate the stored token against the profile endpoint. A rejected token
/// is cleared so the next navigation is turned away by the server guard too.
pub fn check_session(auth: RwSignal<AuthState>) {
    if auth.try_update(AuthState::begin).is_none() {
        return;
    }
    spawn(async move {
        match api::fetch_profile().await {
            Ok(profile) => {
                auth.try_update(|s| s.signed_in(profile));
            }
            Err(e) => {
                log::info!("session check failed: {e}");
                if e.is_unauthorized() {
                    cookie::clear_access_token();
                }
                auth.try_update(AuthState::signed_out);
            }
        }
    });
}

/// Log in and load the profile. `on_success` runs once the user is known.
pub fn login<F>(auth: RwSignal<AuthState>, request: LoginRequest, on_success: F)
where
    F: FnOnce() + 'static,
{
    if auth.try_update(AuthState::begin).is_none() {
        return;
    }
    spawn(async move {
        let response = match api::login(&request).await {
            Ok(response) => response,
            Err(e) => {
                log::info!("login rejected: {e}");
                auth.try_update(|s| s.failed(LOGIN_FAILED.to_owned()));
                return;
            }
        };
        if let Some(token) = response.access_token.as_deref() {
            cookie::store_access_token(token);
        }
        let profile = match response.user {
            Some(user) => Ok(user),
            None => api::fetch_profile().await,
        };
        match profile {
            Ok(profile) => {
                auth.try_update(|s| s.signed_in(profile));
                on_success();
            }
            Err(e) => {
                log::warn!("profile fetch after login failed: {e}");
                auth.try_update(|s| s.failed(LOGIN_FAILED.to_owned()));
            }
        }
    });
}

/// End the session. The local cookie is cleared even if the backend call
/// fails.
pub fn logout<F>(auth: RwSignal<AuthState>, on_done: F)
where
    F: FnOnce() + 'static,
{
    spawn(async move {
        if let Err(e) = api::logout().await {
            log::warn!("logout request failed: {e}");
        }
        cookie::clear_access_token();
        auth.try_update(AuthState::signed_out);
        on_done();
    });
}
