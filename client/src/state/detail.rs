//! Single-record container for detail routes (`/events/:id`).

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::error::ApiError;

use super::list::{FetchStatus, FetchTicket};

#[derive(Clone, Debug, PartialEq)]
pub struct DetailState<T> {
    pub item: Option<T>,
    pub status: FetchStatus,
    pub error: Option<String>,
    latest: u64,
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        Self { item: None, status: FetchStatus::Idle, error: None, latest: 0 }
    }
}

impl<T> DetailState<T> {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        self.status = FetchStatus::Loading;
        self.error = None;
        FetchTicket::from_raw(self.latest)
    }

    /// Settle a fetch; stale tickets are ignored and return `false`.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<T, ApiError>, fallback: &str) -> bool {
        if ticket != FetchTicket::from_raw(self.latest) {
            return false;
        }
        match result {
            Ok(item) => {
                self.item = Some(item);
                self.status = FetchStatus::Succeeded;
            }
            Err(err) => {
                self.item = None;
                self.status = FetchStatus::Failed;
                self.error = Some(err.user_message(fallback));
            }
        }
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}
