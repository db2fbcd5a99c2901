//! Authenticated shell for every `/dashboard*` route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server guard has already validated the token before this renders. The
//! layout re-checks the profile in the browser so an expired session or a
//! logout in another tab still ends up at `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::actions;
use crate::state::auth::AuthState;
use crate::util::auth::{LOGIN_PATH, install_unauth_redirect};

/// Sidebar entries: `(href, label)`.
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("/dashboard", "Overview"),
    ("/dashboard/events", "Events"),
    ("/dashboard/registrations", "Registrations"),
];

/// `/dashboard` is only active on an exact match; deeper entries also cover
/// their children (`/dashboard/events/42` highlights "Events").
#[must_use]
pub fn is_nav_active(path: &str, href: &str) -> bool {
    let path = path.trim_end_matches('/');
    if href == "/dashboard" {
        return path == href;
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || actions::auth::check_session(auth));
    install_unauth_redirect(auth, navigate.clone());

    let on_logout = move |_| {
        let navigate = navigate.clone();
        actions::auth::logout(auth, move || {
            navigate(LOGIN_PATH, NavigateOptions::default());
        });
    };

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar">
                <h2 class="dashboard__brand">"Event Admin"</h2>
                <nav class="dashboard__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    class="dashboard__nav-link"
                                    class:dashboard__nav-link--active=move || {
                                        location.pathname.with(|path| is_nav_active(path, href))
                                    }
                                    href=href
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <div class="dashboard__main">
                <header class="dashboard__header toolbar">
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">
                        {move || auth.with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default())}
                    </span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <Outlet />
            </div>
        </div>
    }
}
