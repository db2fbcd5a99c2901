use super::*;

use PageItem::{Gap, Page};

#[test]
fn single_page_shows_one_button() {
    assert_eq!(page_window(1, 1, 2), vec![Page(1)]);
}

#[test]
fn zero_total_is_treated_as_one_page() {
    assert_eq!(page_window(3, 0, 2), vec![Page(1)]);
}

#[test]
fn small_totals_show_every_page() {
    assert_eq!(page_window(2, 4, 2), vec![Page(1), Page(2), Page(3), Page(4)]);
}

#[test]
fn middle_page_gets_gaps_both_sides() {
    assert_eq!(
        page_window(10, 20, 2),
        vec![Page(1), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(20)]
    );
}

#[test]
fn no_gap_when_window_touches_the_edge() {
    assert_eq!(page_window(3, 5, 1), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(page_window(99, 3, 1), vec![Page(1), Page(2), Page(3)]);
}
