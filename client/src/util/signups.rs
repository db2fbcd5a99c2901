//! Local filtering and ordering for the signup table on the event detail page.
//!
//! Signups arrive embedded in the event, so the table works on the held copy
//! without another request.

#[cfg(test)]
#[path = "signups_test.rs"]
mod signups_test;

use crate::net::types::Signup;
use crate::state::params::SortOrder;

use super::dates;

/// Case-insensitive match on first or last name.
#[must_use]
pub fn matches_name(signup: &Signup, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    signup.first_name.to_lowercase().contains(&needle) || signup.last_name.to_lowercase().contains(&needle)
}

/// Filter by name, then order by `createdAt`. Rows with unparseable timestamps
/// sort as the oldest; ties keep input order.
#[must_use]
pub fn filter_and_sort_signups(signups: &[Signup], search: &str, order: SortOrder) -> Vec<Signup> {
    let mut rows: Vec<Signup> = signups.iter().filter(|s| matches_name(s, search)).cloned().collect();
    let key = |s: &Signup| dates::timestamp_millis(&s.created_at).unwrap_or(i128::MIN);
    match order {
        SortOrder::Asc => rows.sort_by(|a, b| key(a).cmp(&key(b))),
        SortOrder::Desc => rows.sort_by(|a, b| key(b).cmp(&key(a))),
    }
    rows
}
