use super::*;

#[test]
fn first_page_disables_previous_only() {
    let pager = PagerState { page: 1, page_count: 3 };
    assert!(pager.previous_disabled());
    assert!(!pager.next_disabled());
}

#[test]
fn last_page_disables_next_only() {
    let pager = PagerState { page: 3, page_count: 3 };
    assert!(!pager.previous_disabled());
    assert!(pager.next_disabled());
}

#[test]
fn no_pages_disables_both_edges() {
    let pager = PagerState { page: 1, page_count: 0 };
    assert!(pager.previous_disabled());
    assert!(pager.next_disabled());
    assert!(pager.numbers().is_empty());
}

#[test]
fn numbers_list_every_page() {
    assert_eq!(PagerState { page: 2, page_count: 4 }.numbers(), vec![1, 2, 3, 4]);
}
