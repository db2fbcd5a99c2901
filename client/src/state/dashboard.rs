//! Admin event state for `/dashboard` and `/dashboard/events`.
//!
//! DESIGN
//! ======
//! Kept separate from the public `EventsState` so admin paging/sorting never
//! leaks into the visitor listing. Mutations land here only after the backend
//! confirms them; the page then re-fetches to refresh totals.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Event, Identified};

use super::detail::DetailState;
use super::list::ListState;
use super::params::{DEFAULT_LIMIT, FetchParams, SortOrder};

pub const DASHBOARD_SORT_FIELD: &str = "createdAt";

/// What the event form dialog is doing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditorMode {
    #[default]
    Closed,
    Creating,
    Editing(Event),
}

impl EditorMode {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardEventsState {
    pub list: ListState<Event>,
    pub detail: DetailState<Event>,
    pub editor: EditorMode,
    /// Event id awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// A create/update/delete request is in flight.
    pub submitting: bool,
}

impl Default for DashboardEventsState {
    fn default() -> Self {
        Self {
            list: ListState::new(FetchParams::new(DEFAULT_LIMIT, DASHBOARD_SORT_FIELD, SortOrder::Desc)),
            detail: DetailState::default(),
            editor: EditorMode::Closed,
            pending_delete: None,
            submitting: false,
        }
    }
}

impl DashboardEventsState {
    pub fn apply_created(&mut self, event: Event) {
        self.list.push(event);
    }

    pub fn apply_updated(&mut self, event: Event) {
        if let Some(detail) = self.detail.item.as_mut()
            && detail.key() == event.key()
        {
            *detail = event.clone();
        }
        self.list.replace(event);
    }

    /// Remove a deleted event and pull the page back if it is now empty.
    /// Returns whether the current page changed.
    pub fn apply_deleted(&mut self, id: &str) -> bool {
        self.list.remove(id);
        if self.detail.item.as_ref().is_some_and(|e| e.key() == id) {
            self.detail.item = None;
        }
        self.list.params.clamp_page(self.list.total)
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    /// Close the confirmation dialog, yielding the id if one was pending.
    pub fn take_pending_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }
}
