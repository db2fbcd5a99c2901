//! REST API helpers for the events backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport returns `ApiError::Unavailable` since
//! these endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! into a failed status or a notification without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AdminProfile, Event, EventListResponse, EventPayload, LoginRequest, LoginResponse, Page, Registration,
    RegistrationListResponse, SignupPayload,
};
use crate::state::params::FetchParams;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Backend base URL, fixed at build time from `PUBLIC_API_URL`.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("PUBLIC_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Whether a request carries the session (cookie credentials + bearer token).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    Session,
}

fn resource_url(base: &str, segments: &[&str], query: Option<&str>) -> Result<String, ApiError> {
    let mut url = url::Url::parse(base).map_err(|e| ApiError::Network(format!("invalid API URL {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::Network(format!("API URL cannot be a base: {base}")))?
        .pop_if_empty()
        .extend(segments);
    url.set_query(query);
    Ok(url.into())
}

fn endpoint(segments: &[&str]) -> Result<String, ApiError> {
    resource_url(api_base_url(), segments, None)
}

fn list_endpoint(resource: &str, params: &FetchParams) -> Result<String, ApiError> {
    resource_url(api_base_url(), &[resource], Some(&params.to_query()))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /events` with paging/sort/search parameters.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an unreadable body.
pub async fn fetch_events(params: &FetchParams) -> Result<Page<Event>, ApiError> {
    let url = list_endpoint("events", params)?;
    let body = transport::send(Method::Get, &url, None, Access::Public).await?;
    decode::<EventListResponse>(&body).map(Page::from)
}

/// `GET /events/:id`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an unreadable body.
pub async fn fetch_event(id: &str) -> Result<Event, ApiError> {
    let url = endpoint(&["events", id])?;
    let body = transport::send(Method::Get, &url, None, Access::Public).await?;
    decode(&body)
}

/// `POST /events`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an unreadable body.
pub async fn create_event(payload: &EventPayload) -> Result<Event, ApiError> {
    let url = endpoint(&["events"])?;
    let body = transport::send(Method::Post, &url, Some(encode(payload)?), Access::Session).await?;
    decode(&body)
}

/// `PATCH /events/:id`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an unreadable body.
pub async fn update_event(id: &str, payload: &EventPayload) -> Result<Event, ApiError> {
    let url = endpoint(&["events", id])?;
    let body = transport::send(Method::Patch, &url, Some(encode(payload)?), Access::Session).await?;
    decode(&body)
}

/// `DELETE /events/:id`. The response body is ignored.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn delete_event(id: &str) -> Result<(), ApiError> {
    let url = endpoint(&["events", id])?;
    transport::send(Method::Delete, &url, None, Access::Session).await?;
    Ok(())
}

/// `POST /user-signup`: public registration for an event.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn register_signup(payload: &SignupPayload) -> Result<(), ApiError> {
    let url = endpoint(&["user-signup"])?;
    transport::send(Method::Post, &url, Some(encode(payload)?), Access::Public).await?;
    Ok(())
}

/// `GET /user-signup` with paging/sort/search parameters.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an unreadable body.
pub async fn fetch_registrations(params: &FetchParams) -> Result<Page<Registration>, ApiError> {
    let url = list_endpoint("user-signup", params)?;
    let body = transport::send(Method::Get, &url, None, Access::Session).await?;
    decode::<RegistrationListResponse>(&body).map(Page::from)
}

/// `PATCH /user-signup/:id/cancel`. Returns the backend's copy of the row
/// when the body carries one.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn cancel_registration(id: &str) -> Result<Option<Registration>, ApiError> {
    let url = endpoint(&["user-signup", id, "cancel"])?;
    let body = transport::send(Method::Patch, &url, None, Access::Session).await?;
    Ok(decode::<Registration>(&body).ok())
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an unreadable body.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let url = endpoint(&["auth", "login"])?;
    let body = transport::send(Method::Post, &url, Some(encode(request)?), Access::Session).await?;
    if body.trim().is_empty() {
        return Ok(LoginResponse::default());
    }
    decode(&body)
}

/// `POST /auth/logout`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn logout() -> Result<(), ApiError> {
    let url = endpoint(&["auth", "logout"])?;
    transport::send(Method::Post, &url, None, Access::Session).await?;
    Ok(())
}

/// `GET /auth/profile`: validates the current session.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an unreadable body.
pub async fn fetch_profile() -> Result<AdminProfile, ApiError> {
    let url = endpoint(&["auth", "profile"])?;
    let body = transport::send(Method::Get, &url, None, Access::Session).await?;
    decode(&body)
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::Request;

    use super::{Access, ApiError, Method, bearer_header};

    pub(super) async fn send(
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        access: Access,
    ) -> Result<String, ApiError> {
        let mut builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        if access == Access::Session {
            builder = builder.credentials(web_sys::RequestCredentials::Include);
            if let Some(token) = crate::util::cookie::access_token() {
                builder = builder.header("Authorization", &bearer_header(&token));
            }
        }
        let request = match body {
            Some(json) => builder.json(&json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            log::warn!("{method:?} {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            log::warn!("{method:?} {url} returned {}", resp.status());
            return Err(ApiError::from_status(resp.status(), &text));
        }
        Ok(text)
    }
}

#[cfg(not(feature = "hydrate"))]
mod transport {
    use super::{Access, ApiError, Method};

    pub(super) async fn send(
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        access: Access,
    ) -> Result<String, ApiError> {
        let _ = (method, url, body, access);
        Err(ApiError::Unavailable)
    }
}
