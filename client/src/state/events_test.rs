use super::*;
use crate::state::list::FetchStatus;

#[test]
fn public_events_default_to_newest_event_date_first() {
    let state = EventsState::default();
    assert_eq!(state.list.params.sort_field, "eventDate");
    assert_eq!(state.list.params.sort_order, SortOrder::Desc);
    assert_eq!(state.list.params.limit, 10);
    assert_eq!(state.list.params.page, 1);
}

#[test]
fn public_events_start_idle() {
    let state = EventsState::default();
    assert_eq!(state.list.status, FetchStatus::Idle);
    assert!(state.detail.item.is_none());
}
