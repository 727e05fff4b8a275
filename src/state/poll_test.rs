use super::*;

// =============================================================
// Selection
// =============================================================

#[test]
fn nothing_selected_initially() {
    let poll = PollState::default();
    assert_eq!(poll.selected(), None);
    for i in 0..POLL_OPTIONS.len() {
        assert!(!poll.is_selected(i));
    }
}

#[test]
fn selecting_b_after_a_leaves_exactly_b_selected() {
    let mut poll = PollState::default();
    poll.select(0);
    poll.select(2);
    let selected: Vec<usize> = (0..POLL_OPTIONS.len()).filter(|i| poll.is_selected(*i)).collect();
    assert_eq!(selected, vec![2]);
}

#[test]
fn reselecting_the_same_option_keeps_it_selected() {
    let mut poll = PollState::default();
    poll.select(1);
    poll.select(1);
    assert_eq!(poll.selected(), Some(1));
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut poll = PollState::default();
    poll.select(POLL_OPTIONS.len());
    assert_eq!(poll.selected(), None);
    poll.select(1);
    poll.select(usize::MAX);
    assert_eq!(poll.selected(), Some(1));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_without_selection_fails_and_changes_nothing() {
    let mut poll = PollState::default();
    assert_eq!(poll.submit(), Err(PollError::NoSelection));
    assert_eq!(poll.selected(), None);
}

#[test]
fn submit_reports_the_choice_and_resets() {
    let mut poll = PollState::default();
    poll.select(3);
    assert_eq!(poll.submit(), Ok("Waste Management"));
    assert_eq!(poll.selected(), None);
    // Voting again without re-selecting errors again.
    assert_eq!(poll.submit(), Err(PollError::NoSelection));
}

#[test]
fn no_selection_error_message_is_user_facing() {
    assert_eq!(PollError::NoSelection.to_string(), "Please select an option before voting");
}
