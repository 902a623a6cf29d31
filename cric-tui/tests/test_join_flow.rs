//! Test the join flow
//!
//! Covers the request/countdown/completion path, cancellation, and the
//! guards: already joined, match full, and state changing while a
//! request is pending.

use cric_tui::app::{reduce, Action, AppState};

/// Seeded state with a three-tick join delay.
fn state_with_delay() -> AppState {
    let mut state = AppState::new();
    state.config.tick_rate_ms = 100;
    state.config.join_delay_ms = 300;
    state
}

fn spots_left(state: &AppState, id: &str) -> u32 {
    state.matches.iter().find(|m| m.id == id).unwrap().spots_left
}

fn participants(state: &AppState, id: &str) -> Vec<String> {
    state
        .matches
        .iter()
        .find(|m| m.id == id)
        .unwrap()
        .participants
        .clone()
}

#[test]
fn test_request_creates_pending_entry_without_side_effects() {
    let state = state_with_delay();
    let before = spots_left(&state, "match1");

    let state = reduce(state, Action::JoinRequested("match1".to_string()));

    assert!(state.is_join_pending("match1"));
    assert_eq!(spots_left(&state, "match1"), before);
    assert!(!state.user.has_joined("match1"));
}

#[test]
fn test_join_completes_after_delay_ticks() {
    let state = state_with_delay();
    let before = spots_left(&state, "match1");
    let joined_before = state.user.joined_matches.len();

    let mut state = reduce(state, Action::JoinRequested("match1".to_string()));
    for _ in 0..2 {
        state = reduce(state, Action::Tick);
        assert!(state.is_join_pending("match1"), "completed early");
    }
    state = reduce(state, Action::Tick);

    assert!(!state.is_join_pending("match1"));
    assert_eq!(spots_left(&state, "match1"), before - 1);
    assert!(state.user.has_joined("match1"));
    assert_eq!(state.user.joined_matches.len(), joined_before + 1);
    assert_eq!(participants(&state, "match1"), vec!["user1".to_string()]);
}

#[test]
fn test_zero_delay_joins_immediately() {
    let mut state = AppState::new();
    state.config.join_delay_ms = 0;
    let before = spots_left(&state, "match1");

    let state = reduce(state, Action::JoinRequested("match1".to_string()));

    assert!(!state.is_join_pending("match1"));
    assert_eq!(spots_left(&state, "match1"), before - 1);
    assert!(state.user.has_joined("match1"));
}

#[test]
fn test_cancel_reverts_to_available() {
    let state = state_with_delay();
    let before = spots_left(&state, "match1");

    let state = reduce(state, Action::JoinRequested("match1".to_string()));
    let state = reduce(state, Action::Tick);
    let state = reduce(state, Action::JoinCancelled("match1".to_string()));

    assert!(!state.is_join_pending("match1"));
    assert_eq!(spots_left(&state, "match1"), before);
    assert!(!state.user.has_joined("match1"));
    assert!(participants(&state, "match1").is_empty());

    // The countdown is gone; further ticks change nothing
    let state = reduce(state, Action::Tick);
    let state = reduce(state, Action::Tick);
    assert_eq!(spots_left(&state, "match1"), before);
}

#[test]
fn test_joining_already_joined_match_is_noop() {
    // Seed user already joined match3
    let state = state_with_delay();
    let before = spots_left(&state, "match3");
    let joined_before = state.user.joined_matches.clone();

    let state = reduce(state, Action::JoinRequested("match3".to_string()));

    assert!(!state.is_join_pending("match3"));
    assert_eq!(spots_left(&state, "match3"), before);
    assert_eq!(state.user.joined_matches, joined_before);
}

#[test]
fn test_duplicate_request_while_pending_is_noop() {
    let state = state_with_delay();

    let state = reduce(state, Action::JoinRequested("match1".to_string()));
    let state = reduce(state, Action::JoinRequested("match1".to_string()));

    assert_eq!(state.pending_joins.len(), 1);
}

#[test]
fn test_full_match_never_accepts_a_join() {
    let mut state = state_with_delay();
    state.matches[0].spots_left = 0;

    let state = reduce(state, Action::JoinRequested("match1".to_string()));

    assert!(!state.is_join_pending("match1"));
    assert_eq!(spots_left(&state, "match1"), 0);
    assert!(!state.user.has_joined("match1"));
}

#[test]
fn test_completion_rechecks_capacity() {
    // The match fills up while the request is pending; the countdown
    // fires against current state and must not underflow or join.
    let state = state_with_delay();
    let mut state = reduce(state, Action::JoinRequested("match1".to_string()));
    state
        .matches
        .iter_mut()
        .find(|m| m.id == "match1")
        .unwrap()
        .spots_left = 0;

    for _ in 0..3 {
        state = reduce(state, Action::Tick);
    }

    assert!(!state.is_join_pending("match1"));
    assert_eq!(spots_left(&state, "match1"), 0);
    assert!(!state.user.has_joined("match1"));
}

#[test]
fn test_unknown_match_id_is_ignored() {
    let state = state_with_delay();
    let state = reduce(state, Action::JoinRequested("match99".to_string()));
    assert!(state.pending_joins.is_empty());
}

#[test]
fn test_join_then_filter_scenario() {
    // Seed list has 4 matches; user1 joins match2 (spots 2 -> 1), then
    // filtering by Manchester yields the single updated match2 record.
    let mut state = AppState::new();
    state.config.join_delay_ms = 0;

    let state = reduce(state, Action::JoinRequested("match2".to_string()));
    assert_eq!(spots_left(&state, "match2"), 1);
    assert!(state.user.has_joined("match2"));

    let mut state = state;
    state.filters.location = Some("Manchester".to_string());
    let filtered = state.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "match2");
    assert_eq!(filtered[0].spots_left, 1);
}
