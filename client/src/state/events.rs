//! Public event listing state for `/` and `/events/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors only read. Registration goes through the signup endpoint and then
//! reloads the current page so capacity figures refresh.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::types::Event;

use super::detail::DetailState;
use super::list::ListState;
use super::params::{DEFAULT_LIMIT, FetchParams, SortOrder};

pub const PUBLIC_SORT_FIELD: &str = "eventDate";

#[derive(Clone, Debug, PartialEq)]
pub struct EventsState {
    pub list: ListState<Event>,
    pub detail: DetailState<Event>,
}

impl Default for EventsState {
    fn default() -> Self {
        Self {
            list: ListState::new(FetchParams::new(DEFAULT_LIMIT, PUBLIC_SORT_FIELD, SortOrder::Desc)),
            detail: DetailState::default(),
        }
    }
}
