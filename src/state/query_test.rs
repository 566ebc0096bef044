use super::*;

// =============================================================
// QueryState defaults
// =============================================================

#[test]
fn query_state_default_is_page_one_no_filters() {
    let q = QueryState::default();
    assert_eq!(q.page, 1);
    assert!(q.search.is_empty());
    assert_eq!(q.status, StatusFilter::All);
}

// =============================================================
// Pagination transitions
// =============================================================

#[test]
fn prev_page_is_noop_on_page_one() {
    let mut q = QueryState::default();
    q.prev_page();
    assert_eq!(q.page, 1);
}

#[test]
fn next_page_is_noop_on_last_page() {
    let mut q = QueryState {
        page: 5,
        ..QueryState::default()
    };
    q.next_page(5);
    assert_eq!(q.page, 5);
}

#[test]
fn next_then_prev_round_trips() {
    let mut q = QueryState::default();
    q.next_page(5);
    assert_eq!(q.page, 2);
    q.prev_page();
    assert_eq!(q.page, 1);
}

#[test]
fn page_changes_preserve_filters() {
    let mut q = QueryState::default();
    q.set_search("Rick".to_owned());
    q.set_status(StatusFilter::Alive);
    q.next_page(5);
    assert_eq!(q.page, 2);
    assert_eq!(q.search, "Rick");
    assert_eq!(q.status, StatusFilter::Alive);
}

#[test]
fn can_next_respects_total_pages() {
    let q = QueryState::default();
    assert!(!q.can_next(1));
    assert!(q.can_next(2));
}

// =============================================================
// Filter transitions reset the page
// =============================================================

#[test]
fn set_search_resets_page_to_one() {
    let mut q = QueryState {
        page: 3,
        ..QueryState::default()
    };
    q.set_search("Morty".to_owned());
    assert_eq!(q.page, 1);
    assert_eq!(q.search, "Morty");
}

#[test]
fn set_status_resets_page_to_one() {
    let mut q = QueryState {
        page: 3,
        ..QueryState::default()
    };
    q.set_status(StatusFilter::Dead);
    assert_eq!(q.page, 1);
    assert_eq!(q.status, StatusFilter::Dead);
}

// =============================================================
// StatusFilter encoding
// =============================================================

#[test]
fn status_filter_param_encoding() {
    assert_eq!(StatusFilter::All.as_param(), "");
    assert_eq!(StatusFilter::Alive.as_param(), "alive");
    assert_eq!(StatusFilter::Dead.as_param(), "dead");
    assert_eq!(StatusFilter::Unknown.as_param(), "unknown");
}

#[test]
fn status_filter_param_round_trips() {
    for option in StatusFilter::ALL_OPTIONS {
        assert_eq!(StatusFilter::from_param(option.as_param()), option);
    }
}

#[test]
fn status_filter_unrecognized_param_falls_back_to_all() {
    assert_eq!(StatusFilter::from_param("zombie"), StatusFilter::All);
}
