//! Generic list container behind every paginated view.
//!
//! DESIGN
//! ======
//! A container holds exactly the last page the backend returned. Fetches are
//! ticketed: `begin_fetch` hands out a monotonically increasing ticket and only
//! the newest ticket may settle, so a slow stale response can never overwrite
//! fresher data. Mutations are applied only after the backend confirms them.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::net::error::ApiError;
use crate::net::types::{Identified, Page};

use super::params::FetchParams;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Handle for one in-flight fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub status: FetchStatus,
    pub error: Option<String>,
    pub params: FetchParams,
    latest: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(FetchParams::default())
    }
}

impl<T> ListState<T> {
    #[must_use]
    pub fn new(params: FetchParams) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            status: FetchStatus::Idle,
            error: None,
            params,
            latest: 0,
        }
    }

    /// Enter the loading state and issue a ticket for the new request.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        self.status = FetchStatus::Loading;
        self.error = None;
        FetchTicket(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Settle a fetch. Returns `false` when the ticket is stale and the
    /// result was dropped.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Page<T>, ApiError>, fallback: &str) -> bool {
        match result {
            Ok(page) => self.apply_page(ticket, page),
            Err(err) => self.fail(ticket, err.user_message(fallback)),
        }
    }

    pub fn apply_page(&mut self, ticket: FetchTicket, page: Page<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let mut items = page.items;
        items.truncate(self.limit());
        self.items = items;
        self.total = page.total;
        self.status = FetchStatus::Succeeded;
        self.error = None;
        true
    }

    pub fn fail(&mut self, ticket: FetchTicket, message: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = FetchStatus::Failed;
        self.error = Some(message);
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.params.total_pages(self.total)
    }

    fn limit(&self) -> usize {
        usize::try_from(self.params.limit).unwrap_or(usize::MAX)
    }
}

impl<T: Identified> ListState<T> {
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    /// Record a confirmed create. The item is shown only while the page has
    /// room; the follow-up fetch places it correctly otherwise.
    pub fn push(&mut self, item: T) {
        self.total += 1;
        if self.items.len() < self.limit() {
            self.items.push(item);
        }
    }

    /// Replace the held item with the same id. Returns whether one matched.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|held| held.key() == item.key()) {
            Some(held) => {
                *held = item;
                true
            }
            None => false,
        }
    }

    /// Drop the held item with `id`, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == id)?;
        self.total = self.total.saturating_sub(1);
        Some(self.items.remove(index))
    }

    pub fn update_where<F>(&mut self, id: &str, apply: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.items.iter_mut().find(|item| item.key() == id) {
            Some(item) => {
                apply(item);
                true
            }
            None => false,
        }
    }
}
