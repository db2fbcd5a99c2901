//! Auth-session state for the current administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard layout and the client-side redirect to coordinate
//! login redirects and identity-dependent rendering. The access token itself
//! lives in a cookie (`util::cookie`), not here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AdminProfile;

/// Authentication state tracking the current administrator and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AdminProfile>,
    pub loading: bool,
    pub error: Option<String>,
    /// At least one profile check or login attempt has completed.
    pub checked: bool,
}

impl AuthState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn signed_in(&mut self, profile: AdminProfile) {
        self.user = Some(profile);
        self.loading = false;
        self.checked = true;
    }

    pub fn failed(&mut self, message: String) {
        self.user = None;
        self.loading = false;
        self.checked = true;
        self.error = Some(message);
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.error = None;
        self.checked = true;
    }

    /// Redirect only once a check has finished without a user.
    #[must_use]
    pub fn should_redirect_to_login(&self) -> bool {
        self.checked && !self.loading && self.user.is_none()
    }
}
