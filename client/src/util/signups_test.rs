use super::*;
use crate::net::types::Identified;
use crate::net::test_helpers::dummy_signup;

fn sample() -> Vec<Signup> {
    vec![
        dummy_signup("1", "Jane", "Smith", "2024-08-17T10:00:00.000Z"),
        dummy_signup("2", "John", "Doe", "2024-08-18T10:00:00.000Z"),
        dummy_signup("3", "Ann", "Johnson", "2024-08-16T10:00:00.000Z"),
    ]
}

fn keys(rows: &[Signup]) -> Vec<&str> {
    rows.iter().map(Identified::key).collect()
}

#[test]
fn empty_search_keeps_everyone_newest_first() {
    let rows = filter_and_sort_signups(&sample(), "", SortOrder::Desc);
    assert_eq!(keys(&rows), vec!["2", "1", "3"]);
}

#[test]
fn ascending_order_puts_oldest_first() {
    let rows = filter_and_sort_signups(&sample(), "  ", SortOrder::Asc);
    assert_eq!(keys(&rows), vec!["3", "1", "2"]);
}

#[test]
fn search_matches_first_or_last_name_case_insensitively() {
    let rows = filter_and_sort_signups(&sample(), "JOHN", SortOrder::Asc);
    assert_eq!(keys(&rows), vec!["3", "2"]);
}

#[test]
fn search_without_hits_yields_empty_table() {
    assert!(filter_and_sort_signups(&sample(), "zed", SortOrder::Desc).is_empty());
}

#[test]
fn unparseable_timestamps_sort_as_oldest() {
    let mut rows = sample();
    rows.push(dummy_signup("4", "Bob", "Lee", "unknown"));
    let sorted = filter_and_sort_signups(&rows, "", SortOrder::Asc);
    assert_eq!(keys(&sorted)[0], "4");
}

#[test]
fn tied_timestamps_keep_input_order_both_ways() {
    let rows = vec![
        dummy_signup("a", "Amy", "Ng", "2024-08-17T10:00:00.000Z"),
        dummy_signup("b", "Ben", "Ng", "2024-08-17T10:00:00.000Z"),
    ];
    assert_eq!(keys(&filter_and_sort_signups(&rows, "", SortOrder::Desc)), vec!["a", "b"]);
    assert_eq!(keys(&filter_and_sort_signups(&rows, "", SortOrder::Asc)), vec!["a", "b"]);
}
