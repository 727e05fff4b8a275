use super::*;

// =============================================================
// Ticket id format
// =============================================================

#[test]
fn ticket_id_has_prefix_year_and_padded_sequence() {
    assert_eq!(ticket_id(2025, 0.0), "MCT-2025-000");
    assert_eq!(ticket_id(2025, 0.0421), "MCT-2025-042");
    assert_eq!(ticket_id(2026, 0.9999), "MCT-2026-999");
}

#[test]
fn ticket_id_matches_pattern_across_rolls() {
    for i in 0..100 {
        let roll = f64::from(i) / 100.0;
        let id = ticket_id(2026, roll);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3, "bad id {id}");
        assert_eq!(parts[0], TICKET_PREFIX);
        assert_eq!(parts[1], "2026");
        assert_eq!(parts[2].len(), 3);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn out_of_range_roll_is_clamped() {
    assert_eq!(ticket_id(2026, 1.0), "MCT-2026-999");
}

// =============================================================
// Status selection
// =============================================================

#[test]
fn status_from_roll_covers_the_whole_set() {
    assert_eq!(TrackStatus::from_roll(0.0), TrackStatus::Submitted);
    assert_eq!(TrackStatus::from_roll(0.34), TrackStatus::InProgress);
    assert_eq!(TrackStatus::from_roll(0.99), TrackStatus::Resolved);
    assert_eq!(TrackStatus::from_roll(1.0), TrackStatus::Resolved);
}

#[test]
fn status_labels() {
    assert_eq!(TrackStatus::Submitted.label(), "Submitted");
    assert_eq!(TrackStatus::InProgress.label(), "In Progress");
    assert_eq!(TrackStatus::Resolved.label(), "Resolved");
}

// =============================================================
// Tracking lookup
// =============================================================

#[test]
fn empty_query_is_rejected() {
    assert_eq!(track("", 0.5, "1/1/2026".into()), Err(TrackError::EmptyId));
    assert_eq!(track("   ", 0.5, "1/1/2026".into()), Err(TrackError::EmptyId));
}

#[test]
fn non_empty_query_echoes_the_exact_id() {
    let report = track("MCT-2026-017", 0.0, "1/1/2026".into()).unwrap();
    assert_eq!(report.ticket_id, "MCT-2026-017");
    assert_eq!(report.status, TrackStatus::Submitted);
    assert_eq!(report.checked_on, "1/1/2026");
}

#[test]
fn any_non_empty_string_tracks() {
    // Lookups are uncorrelated with issued ids; arbitrary strings work.
    let report = track("whatever", 0.5, "2/2/2026".into()).unwrap();
    assert_eq!(report.ticket_id, "whatever");
    assert!(TrackStatus::ALL.contains(&report.status));
}

#[test]
fn query_whitespace_is_trimmed() {
    let report = track("  MCT-2026-001  ", 0.9, "3/3/2026".into()).unwrap();
    assert_eq!(report.ticket_id, "MCT-2026-001");
}

#[test]
fn empty_id_error_message_is_user_facing() {
    assert_eq!(TrackError::EmptyId.to_string(), "Please enter a ticket ID");
}
