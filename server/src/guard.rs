//! Access guard for administrative routes.
//!
//! DESIGN
//! ======
//! Every request under `/dashboard` must carry the access-token cookie, and
//! the token must be accepted by the backend's profile endpoint. Anything
//! else (missing cookie, non-2xx, transport error, timeout) redirects to
//! `/login`. Nothing is cached: each request is validated on its own.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use client::util::cookie::ACCESS_TOKEN_COOKIE;

use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";
const PROTECTED_PREFIX: &str = "/dashboard";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("access token cookie missing")]
    MissingToken,
    #[error("profile endpoint rejected token: {status}")]
    Rejected { status: u16 },
    #[error("profile request failed: {0}")]
    Transport(String),
    #[error("http client setup failed: {0}")]
    Client(String),
}

// =============================================================================
// VALIDATOR
// =============================================================================

/// Decides whether a bearer token belongs to a live admin session. Enables
/// stubbing the backend in tests.
#[async_trait::async_trait]
pub trait ProfileValidator: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`GuardError`] when the token is not accepted.
    async fn validate(&self, token: &str) -> Result<(), GuardError>;
}

/// Validates against `GET {API_URL}/auth/profile` with a bearer header.
pub struct HttpProfileValidator {
    http: reqwest::Client,
    profile_url: String,
}

impl HttpProfileValidator {
    /// # Errors
    ///
    /// Returns [`GuardError::Client`] if the HTTP client cannot be built.
    pub fn new(profile_url: String, timeout: Duration) -> Result<Self, GuardError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GuardError::Client(e.to_string()))?;
        Ok(Self { http, profile_url })
    }
}

#[async_trait::async_trait]
impl ProfileValidator for HttpProfileValidator {
    async fn validate(&self, token: &str) -> Result<(), GuardError> {
        let resp = self
            .http
            .get(&self.profile_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| GuardError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GuardError::Rejected { status: status.as_u16() });
        }
        Ok(())
    }
}

// =============================================================================
// DECISION
// =============================================================================

/// `/dashboard` and everything below it.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    path.strip_prefix(PROTECTED_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Allow or refuse a request for `path` carrying `token`.
///
/// # Errors
///
/// Returns the reason the request must be redirected.
pub async fn check_access(
    validator: &dyn ProfileValidator,
    path: &str,
    token: Option<&str>,
) -> Result<(), GuardError> {
    if !is_protected(path) {
        return Ok(());
    }
    let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(GuardError::MissingToken)?;
    validator.validate(token).await
}

/// Redirect to the login page. A token that was presented and refused is
/// expired on the way out.
#[must_use]
pub fn login_redirect(jar: CookieJar, reason: &GuardError, secure: bool) -> Response {
    if *reason == GuardError::MissingToken {
        return Redirect::temporary(LOGIN_PATH).into_response();
    }
    let expired = Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::ZERO);
    (jar.add(expired), Redirect::temporary(LOGIN_PATH)).into_response()
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// Axum middleware applied to the page router.
pub async fn require_admin(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let token = jar.get(ACCESS_TOKEN_COOKIE).map(Cookie::value);

    match check_access(state.validator.as_ref(), &path, token).await {
        Ok(()) => next.run(request).await,
        Err(reason) => {
            match &reason {
                GuardError::Transport(_) | GuardError::Client(_) => {
                    tracing::warn!(%path, error = %reason, "profile validation failed");
                }
                _ => tracing::debug!(%path, error = %reason, "redirecting to login"),
            }
            login_redirect(jar, &reason, state.config.cookie_secure)
        }
    }
}
