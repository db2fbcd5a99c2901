//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::notification::Notification;
use crate::pages::{
    dashboard::DashboardLayout, dashboard_event_detail::DashboardEventDetailPage,
    dashboard_events::DashboardEventsPage, event_detail::EventDetailPage, events::EventsPage, login::LoginPage,
    registrations::RegistrationsPage,
};
use crate::state::{
    auth::AuthState, dashboard::DashboardEventsState, events::EventsState, notification::NotificationState,
    registrations::RegistrationsState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::default()));
    provide_context(RwSignal::new(EventsState::default()));
    provide_context(RwSignal::new(DashboardEventsState::default()));
    provide_context(RwSignal::new(RegistrationsState::default()));
    provide_context(RwSignal::new(NotificationState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/event-console.css"/>
        <Title text="Event Registration"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=EventsPage/>
                <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardEventsPage/>
                    <Route path=StaticSegment("events") view=DashboardEventsPage/>
                    <Route path=(StaticSegment("events"), ParamSegment("id")) view=DashboardEventDetailPage/>
                    <Route path=StaticSegment("registrations") view=RegistrationsPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <Notification/>
    }
}
