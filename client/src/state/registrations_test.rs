use super::*;
use crate::net::test_helpers::dummy_registration;
use crate::net::types::Page;

fn loaded(rows: Vec<Registration>) -> RegistrationsState {
    let mut state = RegistrationsState::default();
    let ticket = state.list.begin_fetch();
    let total = rows.len() as u64;
    state.list.apply_page(ticket, Page { items: rows, total });
    state
}

#[test]
fn registrations_default_to_newest_first() {
    let state = RegistrationsState::default();
    assert_eq!(state.list.params.sort_field, "createdAt");
    assert_eq!(state.list.params.sort_order, SortOrder::Desc);
}

#[test]
fn cancel_flow_flips_active_flag() {
    let mut state = loaded(vec![dummy_registration("1", true), dummy_registration("2", true)]);
    assert!(state.request_cancel("1"));
    assert_eq!(state.confirm_cancel().as_deref(), Some("1"));
    assert!(!state.can_cancel("1"));
    state.apply_cancelled("1", None);
    assert!(!state.list.find("1").unwrap().is_active);
    assert!(state.list.find("2").unwrap().is_active);
    assert!(state.cancelling.is_none());
}

#[test]
fn inactive_row_cannot_be_cancelled_again() {
    let mut state = loaded(vec![dummy_registration("1", false)]);
    assert!(!state.can_cancel("1"));
    assert!(!state.request_cancel("1"));
    assert!(state.pending_cancel.is_none());
    assert_eq!(state.confirm_cancel(), None);
}

#[test]
fn repeated_cancel_is_idempotent() {
    let mut state = loaded(vec![dummy_registration("1", true)]);
    state.request_cancel("1");
    state.confirm_cancel();
    state.apply_cancelled("1", None);
    state.apply_cancelled("1", None);
    let row = state.list.find("1").unwrap();
    assert!(!row.is_active);
    assert_eq!(state.list.items.len(), 1);
}

#[test]
fn server_copy_never_reactivates_row() {
    let mut state = loaded(vec![dummy_registration("1", true)]);
    let mut server_row = dummy_registration("1", true);
    server_row.seat_number = "Z9".to_owned();
    state.apply_cancelled("1", Some(server_row));
    let row = state.list.find("1").unwrap();
    assert!(!row.is_active);
    assert_eq!(row.seat_number, "Z9");
}

#[test]
fn failed_cancel_leaves_row_active_and_retryable() {
    let mut state = loaded(vec![dummy_registration("1", true)]);
    state.request_cancel("1");
    state.confirm_cancel();
    state.cancel_failed("1");
    assert!(state.list.find("1").unwrap().is_active);
    assert!(state.can_cancel("1"));
}

#[test]
fn dismiss_cancel_clears_pending() {
    let mut state = loaded(vec![dummy_registration("1", true)]);
    state.request_cancel("1");
    state.dismiss_cancel();
    assert_eq!(state.confirm_cancel(), None);
}

#[test]
fn unknown_row_cannot_be_cancelled() {
    let state = loaded(vec![]);
    assert!(!state.can_cancel("nope"));
}
