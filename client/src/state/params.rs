//! Pagination/sort/search parameters shared by every list container.
//!
//! Each setter reports whether the value changed so callers only re-fetch on
//! a real change. Search, sort and page-size changes all return to page 1;
//! every list page follows that one rule.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Coerce a loose string (`"ASC"`, `"descending"`, ...) into an order.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().to_ascii_lowercase().starts_with("asc") { Self::Asc } else { Self::Desc }
    }
}

/// Parameters for a list request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchParams {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub search: String,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, "createdAt", SortOrder::Desc)
    }
}

pub const DEFAULT_LIMIT: u32 = 10;

impl FetchParams {
    #[must_use]
    pub fn new(limit: u32, sort_field: &str, sort_order: SortOrder) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            sort_field: sort_field.to_owned(),
            sort_order,
            search: String::new(),
        }
    }

    /// Encode as the list endpoints' query string (without the leading `?`).
    #[must_use]
    pub fn to_query(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string())
            .append_pair("sortField", &self.sort_field)
            .append_pair("sortOrder", self.sort_order.as_str())
            .append_pair("search", &self.search)
            .finish()
    }

    pub fn set_search(&mut self, term: &str) -> bool {
        if self.search == term {
            return false;
        }
        term.clone_into(&mut self.search);
        self.page = 1;
        true
    }

    pub fn set_sort_field(&mut self, field: &str) -> bool {
        if self.sort_field == field {
            return false;
        }
        field.clone_into(&mut self.sort_field);
        self.page = 1;
        true
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        if self.sort_order == order {
            return false;
        }
        self.sort_order = order;
        self.page = 1;
        true
    }

    /// Column-header click: the active ascending column flips to descending,
    /// anything else becomes ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        let next = if self.sort_field == field && self.sort_order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        field.clone_into(&mut self.sort_field);
        self.sort_order = next;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn set_limit(&mut self, limit: u32) -> bool {
        let limit = limit.max(1);
        if self.limit == limit {
            return false;
        }
        self.limit = limit;
        self.page = 1;
        true
    }

    /// Number of pages for `total` items; never less than 1.
    #[must_use]
    pub fn total_pages(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.limit)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Pull the page back inside range after the total shrank (e.g. after a
    /// delete emptied the last page). Returns whether the page moved.
    pub fn clamp_page(&mut self, total: u64) -> bool {
        let last = self.total_pages(total);
        if self.page > last {
            self.page = last;
            return true;
        }
        false
    }
}
