use super::*;

fn params() -> FetchParams {
    FetchParams::new(10, "eventDate", SortOrder::Desc)
}

#[test]
fn new_params_start_on_first_page() {
    let p = params();
    assert_eq!(p.page, 1);
    assert_eq!(p.limit, 10);
    assert!(p.search.is_empty());
}

#[test]
fn zero_limit_is_coerced_to_one() {
    assert_eq!(FetchParams::new(0, "createdAt", SortOrder::Asc).limit, 1);
}

#[test]
fn query_string_carries_all_parameters() {
    let mut p = params();
    p.set_page(3);
    assert_eq!(p.to_query(), "page=3&limit=10&sortField=eventDate&sortOrder=desc&search=");
}

#[test]
fn query_string_encodes_search_term() {
    let mut p = params();
    p.set_search("rock & roll");
    assert_eq!(p.to_query(), "page=1&limit=10&sortField=eventDate&sortOrder=desc&search=rock+%26+roll");
}

#[test]
fn search_change_resets_page() {
    let mut p = params();
    p.set_page(4);
    assert!(p.set_search("gala"));
    assert_eq!(p.page, 1);
}

#[test]
fn unchanged_search_keeps_page_and_reports_no_change() {
    let mut p = params();
    p.set_search("gala");
    p.set_page(2);
    assert!(!p.set_search("gala"));
    assert_eq!(p.page, 2);
}

#[test]
fn sort_changes_reset_page() {
    let mut p = params();
    p.set_page(5);
    assert!(p.set_sort_field("eventName"));
    assert_eq!(p.page, 1);
    p.set_page(5);
    assert!(p.set_sort_order(SortOrder::Asc));
    assert_eq!(p.page, 1);
}

#[test]
fn toggle_sort_flips_only_active_ascending_column() {
    let mut p = params();
    p.toggle_sort("eventDate");
    assert_eq!(p.sort_order, SortOrder::Asc);
    p.toggle_sort("eventDate");
    assert_eq!(p.sort_order, SortOrder::Desc);
    p.toggle_sort("eventName");
    assert_eq!(p.sort_field, "eventName");
    assert_eq!(p.sort_order, SortOrder::Asc);
}

#[test]
fn set_page_floors_at_one() {
    let mut p = params();
    p.set_page(3);
    assert!(p.set_page(0));
    assert_eq!(p.page, 1);
}

#[test]
fn set_limit_resets_page() {
    let mut p = params();
    p.set_page(2);
    assert!(p.set_limit(25));
    assert_eq!(p.page, 1);
    assert!(!p.set_limit(25));
}

#[test]
fn total_pages_rounds_up_with_minimum_of_one() {
    let p = params();
    assert_eq!(p.total_pages(0), 1);
    assert_eq!(p.total_pages(10), 1);
    assert_eq!(p.total_pages(11), 2);
    assert_eq!(p.total_pages(95), 10);
}

#[test]
fn clamp_page_moves_back_after_total_shrinks() {
    let mut p = params();
    p.set_page(3);
    assert!(p.clamp_page(20));
    assert_eq!(p.page, 2);
    assert!(!p.clamp_page(20));
}

#[test]
fn sort_order_parse_is_lenient() {
    assert_eq!(SortOrder::parse("ASC"), SortOrder::Asc);
    assert_eq!(SortOrder::parse("ascending"), SortOrder::Asc);
    assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
    assert_eq!(SortOrder::parse("whatever"), SortOrder::Desc);
    assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
}
