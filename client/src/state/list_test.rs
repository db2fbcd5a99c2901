use super::*;
use crate::state::params::SortOrder;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: String,
    label: String,
}

impl Identified for Row {
    fn key(&self) -> &str {
        &self.id
    }
}

fn row(id: &str) -> Row {
    Row { id: id.to_owned(), label: format!("row {id}") }
}

fn rows(n: usize) -> Vec<Row> {
    (0..n).map(|i| row(&i.to_string())).collect()
}

fn list(limit: u32) -> ListState<Row> {
    ListState::new(FetchParams::new(limit, "createdAt", SortOrder::Desc))
}

#[test]
fn default_list_is_idle_and_empty() {
    let state: ListState<Row> = ListState::default();
    assert_eq!(state.status, FetchStatus::Idle);
    assert!(state.items.is_empty());
    assert_eq!(state.total, 0);
    assert!(state.error.is_none());
}

#[test]
fn begin_fetch_enters_loading_and_clears_error() {
    let mut state = list(10);
    let ticket = state.begin_fetch();
    state.fail(ticket, "boom".to_owned());
    state.begin_fetch();
    assert!(state.is_loading());
    assert!(state.error.is_none());
}

#[test]
fn apply_page_replaces_collection_and_total() {
    let mut state = list(10);
    let ticket = state.begin_fetch();
    assert!(state.apply_page(ticket, Page { items: rows(3), total: 23 }));
    assert_eq!(state.status, FetchStatus::Succeeded);
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.total, 23);
    assert_eq!(state.total_pages(), 3);
}

#[test]
fn apply_page_never_holds_more_than_limit() {
    let mut state = list(5);
    let ticket = state.begin_fetch();
    state.apply_page(ticket, Page { items: rows(12), total: 12 });
    assert_eq!(state.items.len(), 5);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = list(10);
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(state.apply_page(second, Page { items: vec![row("new")], total: 1 }));
    assert!(!state.apply_page(first, Page { items: vec![row("old")], total: 1 }));
    assert_eq!(state.items[0].id, "new");
    assert!(!state.fail(first, "late failure".to_owned()));
    assert_eq!(state.status, FetchStatus::Succeeded);
}

#[test]
fn settle_error_records_server_message_or_fallback() {
    let mut state = list(10);
    let ticket = state.begin_fetch();
    state.settle(ticket, Err(ApiError::Network("offline".to_owned())), "Failed to fetch events");
    assert_eq!(state.status, FetchStatus::Failed);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch events"));

    let ticket = state.begin_fetch();
    state.settle(ticket, Err(ApiError::from_status(400, r#"{"message":"bad sortField"}"#)), "Failed to fetch events");
    assert_eq!(state.error.as_deref(), Some("bad sortField"));
}

#[test]
fn failure_keeps_previous_items() {
    let mut state = list(10);
    let ticket = state.begin_fetch();
    state.apply_page(ticket, Page { items: rows(2), total: 2 });
    let ticket = state.begin_fetch();
    state.fail(ticket, "down".to_owned());
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_appends_and_counts_created_item() {
    let mut state = list(10);
    state.push(row("a"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.total, 1);
    assert!(state.find("a").is_some());
}

#[test]
fn push_on_full_page_counts_but_does_not_overflow() {
    let mut state = list(2);
    let ticket = state.begin_fetch();
    state.apply_page(ticket, Page { items: rows(2), total: 2 });
    state.push(row("extra"));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.total, 3);
}

#[test]
fn replace_updates_matching_item_only() {
    let mut state = list(10);
    state.push(row("a"));
    state.push(row("b"));
    let mut updated = row("b");
    updated.label = "renamed".to_owned();
    assert!(state.replace(updated));
    assert_eq!(state.find("b").unwrap().label, "renamed");
    assert_eq!(state.find("a").unwrap().label, "row a");
    assert!(!state.replace(row("missing")));
}

#[test]
fn remove_drops_item_and_decrements_total() {
    let mut state = list(10);
    state.push(row("a"));
    state.push(row("b"));
    assert_eq!(state.remove("a").map(|r| r.id), Some("a".to_owned()));
    assert!(state.find("a").is_none());
    assert_eq!(state.total, 1);
    assert!(state.remove("a").is_none());
    assert_eq!(state.total, 1);
}

#[test]
fn update_where_applies_closure_to_match() {
    let mut state = list(10);
    state.push(row("a"));
    assert!(state.update_where("a", |r| r.label.push('!')));
    assert_eq!(state.find("a").unwrap().label, "row a!");
    assert!(!state.update_where("zz", |r| r.label.clear()));
}
