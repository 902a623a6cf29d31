//! Test create-form state transitions
//!
//! Covers field editing, the required-field gate, amenity toggling,
//! id assignment, and the post-submit reset.

use cric_tui::app::{reduce, Action, AppState, FormField, Screen};
use libcricconnect::types::{Amenity, DEFAULT_TOTAL_SPOTS};

fn type_into(mut state: AppState, field: FormField, text: &str) -> AppState {
    state.form.focus = field;
    for c in text.chars() {
        state = reduce(state, Action::FormInput(c));
    }
    state
}

fn filled_form() -> AppState {
    let mut state = AppState::new();
    state.screen = Screen::Create;
    let state = type_into(state, FormField::GroundName, "Oval Green");
    let state = type_into(state, FormField::Location, "Leeds");
    let state = type_into(state, FormField::Date, "2025-05-01");
    type_into(state, FormField::Time, "10:30")
}

#[test]
fn test_submit_gated_until_required_fields_present() {
    let mut state = AppState::new();
    state.screen = Screen::Create;
    assert!(!state.can_create());

    let before = state.matches.len();
    let state = reduce(state, Action::FormSubmitted);

    // Nothing appended, still on the form
    assert_eq!(state.matches.len(), before);
    assert_eq!(state.screen, Screen::Create);
}

#[test]
fn test_submit_appends_match_and_returns_to_browse() {
    let state = filled_form();
    assert!(state.can_create());
    let before = state.matches.len();
    let organized_before = state.user.organized_matches.len();

    let state = reduce(state, Action::FormSubmitted);

    assert_eq!(state.matches.len(), before + 1);
    assert_eq!(state.screen, Screen::Browse);

    let created = state.matches.last().unwrap();
    assert_eq!(created.id, "match5");
    assert_eq!(created.ground_name, "Oval Green");
    assert_eq!(created.organizer_id, "user1");
    assert_eq!(created.organizer_name, "John Doe");
    assert_eq!(created.spots_left, created.total_spots);
    assert_eq!(created.total_spots, DEFAULT_TOTAL_SPOTS);
    assert!(created.participants.is_empty());

    assert_eq!(state.user.organized_matches.len(), organized_before + 1);
    assert_eq!(state.user.organized_matches.last().unwrap(), "match5");
}

#[test]
fn test_submit_resets_form_to_defaults() {
    let mut state = filled_form();
    state.form.draft.total_spots = 14;
    state = reduce(state, Action::FormAmenityToggled);
    assert!(!state.form.draft.amenities.is_empty());

    let state = reduce(state, Action::FormSubmitted);

    assert_eq!(state.form.draft.ground_name, "");
    assert_eq!(state.form.draft.total_spots, DEFAULT_TOTAL_SPOTS);
    assert!(state.form.draft.amenities.is_empty());
    assert_eq!(state.form.focus, FormField::GroundName);
}

#[test]
fn test_ids_stay_unique_across_creations() {
    let state = filled_form();
    let state = reduce(state, Action::FormSubmitted);

    // Create a second match with the same form flow
    let mut state = state;
    state.screen = Screen::Create;
    let state = type_into(state, FormField::GroundName, "Second Ground");
    let state = type_into(state, FormField::Location, "Leeds");
    let state = type_into(state, FormField::Date, "2025-05-02");
    let state = type_into(state, FormField::Time, "12:00");
    let state = reduce(state, Action::FormSubmitted);

    let mut ids: Vec<&str> = state.matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(state.matches.len(), 6);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6, "duplicate match id generated");
    assert_eq!(state.matches.last().unwrap().id, "match6");
}

#[test]
fn test_cancel_keeps_draft_values() {
    let state = filled_form();
    let state = reduce(state, Action::FormCancelled);

    assert_eq!(state.screen, Screen::Browse);
    assert_eq!(state.form.draft.ground_name, "Oval Green");
}

#[test]
fn test_amenity_toggle_twice_restores_set() {
    let mut state = AppState::new();
    state.screen = Screen::Create;
    state.form.focus = FormField::Amenities;
    state.form.amenity_cursor = 2; // lights

    let state = reduce(state, Action::FormAmenityToggled);
    assert_eq!(state.form.draft.amenities, vec![Amenity::Lights]);

    let state = reduce(state, Action::FormAmenityToggled);
    assert!(state.form.draft.amenities.is_empty());
}

#[test]
fn test_amenity_cursor_stays_in_bounds() {
    let mut state = AppState::new();
    state.form.focus = FormField::Amenities;

    for _ in 0..10 {
        state = reduce(state, Action::FormAmenityNext);
    }
    assert_eq!(state.form.amenity_cursor, Amenity::ALL.len() - 1);

    for _ in 0..10 {
        state = reduce(state, Action::FormAmenityPrev);
    }
    assert_eq!(state.form.amenity_cursor, 0);
}

#[test]
fn test_total_spots_accepts_digits_only() {
    let mut state = AppState::new();
    state.form.focus = FormField::TotalSpots;

    // Clear the default of 22 first
    let state = reduce(state, Action::FormBackspace);
    let state = reduce(state, Action::FormBackspace);
    assert_eq!(state.form.draft.total_spots, 0);

    let state = reduce(state, Action::FormInput('1'));
    let state = reduce(state, Action::FormInput('6'));
    assert_eq!(state.form.draft.total_spots, 16);

    // Letters never reach the counter
    let state = reduce(state, Action::FormInput('x'));
    assert_eq!(state.form.draft.total_spots, 16);
}

#[test]
fn test_field_editing_appends_and_deletes() {
    let state = AppState::new();
    let state = type_into(state, FormField::Location, "Leedz");
    let state = reduce(state, Action::FormBackspace);
    let state = reduce(state, Action::FormInput('s'));

    assert_eq!(state.form.draft.location, "Leeds");
}
