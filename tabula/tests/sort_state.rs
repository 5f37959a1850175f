//! Tests for the sort-toggle state machine.

use tabula::{SortOrder, SortState};

#[test]
fn toggle_cycles_through_three_states() {
    let mut state = SortState::new();
    assert_eq!(state, SortState::Unsorted);

    state.toggle("name");
    assert_eq!(state.sort_by(), Some("name"));
    assert_eq!(state.order(), Some(SortOrder::Ascending));

    state.toggle("name");
    assert_eq!(state.sort_by(), Some("name"));
    assert_eq!(state.order(), Some(SortOrder::Descending));

    state.toggle("name");
    assert_eq!(state, SortState::Unsorted);
    assert_eq!(state.sort_by(), None);
    assert_eq!(state.order(), None);
}

#[test]
fn cycle_repeats_indefinitely() {
    let mut state = SortState::new();
    for _ in 0..3 {
        state.toggle("name");
        assert_eq!(state.order(), Some(SortOrder::Ascending));
        state.toggle("name");
        assert_eq!(state.order(), Some(SortOrder::Descending));
        state.toggle("name");
        assert_eq!(state, SortState::Unsorted);
    }
}

#[test]
fn switching_column_restarts_ascending() {
    let mut state = SortState::new();
    state.toggle("name");
    state.toggle("name");
    assert_eq!(state.order(), Some(SortOrder::Descending));

    // No per-column memory: a different column starts at ascending even
    // though "name" was left at descending.
    state.toggle("cost");
    assert_eq!(state.sort_by(), Some("cost"));
    assert_eq!(state.order(), Some(SortOrder::Ascending));
}

#[test]
fn order_for_reports_only_the_active_column() {
    let mut state = SortState::new();
    assert_eq!(state.order_for("cost"), None);

    state.toggle("cost");
    assert_eq!(state.order_for("cost"), Some(SortOrder::Ascending));
    assert_eq!(state.order_for("name"), None);
}
