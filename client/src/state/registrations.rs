//! Registration table state for `/dashboard/registrations`.
//!
//! Cancellation is one-way: once a row is inactive nothing on the client
//! turns it back on, even if a later payload claims otherwise.

#[cfg(test)]
#[path = "registrations_test.rs"]
mod registrations_test;

use crate::net::types::Registration;

use super::list::ListState;
use super::params::{DEFAULT_LIMIT, FetchParams, SortOrder};

pub const REGISTRATIONS_SORT_FIELD: &str = "createdAt";

#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationsState {
    pub list: ListState<Registration>,
    /// Row awaiting cancel confirmation.
    pub pending_cancel: Option<String>,
    /// Row whose cancel request is in flight.
    pub cancelling: Option<String>,
}

impl Default for RegistrationsState {
    fn default() -> Self {
        Self {
            list: ListState::new(FetchParams::new(DEFAULT_LIMIT, REGISTRATIONS_SORT_FIELD, SortOrder::Desc)),
            pending_cancel: None,
            cancelling: None,
        }
    }
}

impl RegistrationsState {
    /// Whether the cancel button for `id` should be enabled.
    #[must_use]
    pub fn can_cancel(&self, id: &str) -> bool {
        self.cancelling.as_deref() != Some(id) && self.list.find(id).is_some_and(|r| r.is_active)
    }

    /// Open the confirmation dialog. Ignored for rows that cannot be cancelled.
    pub fn request_cancel(&mut self, id: &str) -> bool {
        if !self.can_cancel(id) {
            return false;
        }
        self.pending_cancel = Some(id.to_owned());
        true
    }

    pub fn dismiss_cancel(&mut self) {
        self.pending_cancel = None;
    }

    /// Confirm the pending cancel and mark it in flight.
    pub fn confirm_cancel(&mut self) -> Option<String> {
        let id = self.pending_cancel.take()?;
        if !self.can_cancel(&id) {
            return None;
        }
        self.cancelling = Some(id.clone());
        Some(id)
    }

    /// Apply a confirmed cancellation, taking the backend's copy of the row
    /// when provided.
    pub fn apply_cancelled(&mut self, id: &str, confirmed: Option<Registration>) {
        if self.cancelling.as_deref() == Some(id) {
            self.cancelling = None;
        }
        self.list.update_where(id, |row| {
            if let Some(server_row) = confirmed {
                *row = server_row;
            }
            row.is_active = false;
        });
    }

    /// A cancel request failed; the row stays as it was.
    pub fn cancel_failed(&mut self, id: &str) {
        if self.cancelling.as_deref() == Some(id) {
            self.cancelling = None;
        }
    }
}
