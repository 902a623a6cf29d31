//! Pure reducer function for state transitions
//!
//! The reducer is a pure function `(State, Action) -> State`: no I/O,
//! no timers, no side effects. The join confirmation delay lives in
//! state as tick counters, so even the "asynchronous" part of the join
//! flow is a plain state transition driven by `Action::Tick`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libcricconnect::types::Amenity;
use libcricconnect::views;

use super::actions::{Action, Screen};
use super::state::{AppState, CreateFormState, FormField, PendingJoin, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// Deterministic: same inputs, same output.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => advance_pending_joins(state),
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(screen) => AppState { screen, ..state },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::ToggleTheme => AppState {
            theme: state.theme.toggled(),
            ..state
        },

        // === Browse: selection and joining ===
        Action::SelectNext => {
            let len = state.filtered().len();
            let selected = if len == 0 {
                0
            } else {
                (state.selected + 1).min(len - 1)
            };
            AppState { selected, ..state }
        }

        Action::SelectPrev => AppState {
            selected: state.selected.saturating_sub(1),
            ..state
        },

        Action::JoinRequested(match_id) => join_requested(state, match_id),
        Action::JoinCancelled(match_id) => join_cancelled(state, &match_id),

        // === Filters ===
        Action::CycleLocationFilter => {
            let options = views::distinct_locations(&state.matches);
            let location = cycle_option(state.filters.location.clone(), &options);
            let mut state = state;
            state.filters.location = location;
            clamp_selection(state)
        }

        Action::CycleDateFilter => {
            let options = views::distinct_dates(&state.matches);
            let date = cycle_option(state.filters.date.clone(), &options);
            let mut state = state;
            state.filters.date = date;
            clamp_selection(state)
        }

        Action::CycleAmenityFilter => {
            let amenity = match state.filters.amenity {
                None => Some(Amenity::ALL[0]),
                Some(current) => {
                    let i = Amenity::ALL.iter().position(|a| *a == current).unwrap_or(0);
                    if i + 1 < Amenity::ALL.len() {
                        Some(Amenity::ALL[i + 1])
                    } else {
                        None
                    }
                }
            };
            let mut state = state;
            state.filters.amenity = amenity;
            clamp_selection(state)
        }

        Action::SearchStarted => AppState {
            search_editing: true,
            ..state
        },

        Action::SearchInput(c) => {
            let mut state = state;
            state.filters.search.push(c);
            clamp_selection(state)
        }

        Action::SearchBackspace => {
            let mut state = state;
            state.filters.search.pop();
            clamp_selection(state)
        }

        Action::SearchFinished => AppState {
            search_editing: false,
            ..state
        },

        Action::RaiseMinSpots => {
            let mut state = state;
            state.filters.min_spots = (state.filters.min_spots + 1).min(99);
            clamp_selection(state)
        }

        Action::LowerMinSpots => {
            let mut state = state;
            state.filters.min_spots = state.filters.min_spots.saturating_sub(1);
            clamp_selection(state)
        }

        Action::ClearFilters => {
            let mut state = state;
            state.filters.clear();
            state.selected = 0;
            state
        }

        // === Create form ===
        Action::FormFocusNext => {
            let mut state = state;
            state.form.focus = state.form.focus.next();
            state
        }

        Action::FormFocusPrev => {
            let mut state = state;
            state.form.focus = state.form.focus.prev();
            state
        }

        Action::FormInput(c) => form_input(state, c),
        Action::FormBackspace => form_backspace(state),

        Action::FormAmenityNext => {
            let mut state = state;
            state.form.amenity_cursor = (state.form.amenity_cursor + 1).min(Amenity::ALL.len() - 1);
            state
        }

        Action::FormAmenityPrev => {
            let mut state = state;
            state.form.amenity_cursor = state.form.amenity_cursor.saturating_sub(1);
            state
        }

        Action::FormAmenityToggled => {
            let mut state = state;
            let amenity = Amenity::ALL[state.form.amenity_cursor];
            state.form.draft.toggle_amenity(amenity);
            state
        }

        Action::FormSubmitted => submit_form(state),

        Action::FormCancelled => AppState {
            // The draft is kept; only a successful submit resets it
            screen: Screen::Browse,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Start a join request for a match.
///
/// No-op when the user already joined, a request is already pending, or
/// the match is unknown. A full match never accepts a request. With a
/// zero delay the join completes immediately (no pending phase).
fn join_requested(state: AppState, match_id: String) -> AppState {
    if state.user.has_joined(&match_id) || state.is_join_pending(&match_id) {
        return state;
    }
    let Some(m) = state.matches.iter().find(|m| m.id == match_id) else {
        return state;
    };
    if m.is_full() {
        let message = format!("{} is full", m.ground_name);
        return reduce(state, Action::SetStatus(message));
    }

    let ticks = state.config.join_delay_ticks();
    if ticks == 0 {
        return complete_join(state, &match_id);
    }

    let mut state = state;
    state.pending_joins.push(PendingJoin {
        match_id,
        ticks_remaining: ticks,
    });
    reduce(state, Action::SetStatus("Join request sent".to_string()))
}

/// Cancel a pending join: the entry is dropped and the match reverts to
/// available, with no counter or list changes.
fn join_cancelled(state: AppState, match_id: &str) -> AppState {
    if !state.is_join_pending(match_id) {
        return state;
    }
    let mut state = state;
    state.pending_joins.retain(|p| p.match_id != match_id);
    reduce(state, Action::SetStatus("Join request cancelled".to_string()))
}

/// Count down pending joins and complete the ones that are due.
fn advance_pending_joins(state: AppState) -> AppState {
    if state.pending_joins.is_empty() {
        return state;
    }

    let mut state = state;
    for p in &mut state.pending_joins {
        p.ticks_remaining = p.ticks_remaining.saturating_sub(1);
    }
    let due: Vec<String> = state
        .pending_joins
        .iter()
        .filter(|p| p.ticks_remaining == 0)
        .map(|p| p.match_id.clone())
        .collect();
    state.pending_joins.retain(|p| p.ticks_remaining > 0);

    for match_id in due {
        state = complete_join(state, &match_id);
    }
    state
}

/// Finalize a join: decrement the spot count and record the user on both
/// sides. Guards are re-checked here because the countdown completes
/// against whatever state exists at that point.
fn complete_join(state: AppState, match_id: &str) -> AppState {
    if state.user.has_joined(match_id) {
        return state;
    }
    let Some(idx) = state.matches.iter().position(|m| m.id == match_id) else {
        return state;
    };
    if state.matches[idx].spots_left == 0 {
        return state;
    }

    let mut state = state;
    state.matches[idx].spots_left -= 1;
    let user_id = state.user.id.clone();
    state.matches[idx].participants.push(user_id);
    state.user.joined_matches.push(match_id.to_string());

    let message = format!("You've joined {}", state.matches[idx].ground_name);
    reduce(state, Action::SetStatus(message))
}

/// Append a new match built from the draft, stamp the organizer, and
/// return to the browse screen with a reset form.
fn submit_form(state: AppState) -> AppState {
    if !state.can_create() {
        let message = "Ground name, location, date and time are required".to_string();
        return reduce(state, Action::SetStatus(message));
    }

    let mut state = state;
    let id = format!("match{}", state.next_match_seq);
    state.next_match_seq += 1;

    let created = state.form.draft.build(id.clone(), &state.user);
    let message = format!("Created {}", created.ground_name);
    state.matches.push(created);
    state.user.organized_matches.push(id);
    state.form = CreateFormState::default();
    state.screen = Screen::Browse;

    reduce(clamp_selection(state), Action::SetStatus(message))
}

/// Type into the focused form field. The spots field is decimal-edited
/// on a counter, so non-numeric input cannot reach the record.
fn form_input(state: AppState, c: char) -> AppState {
    let mut state = state;
    let focus = state.form.focus;
    let draft = &mut state.form.draft;
    match focus {
        FormField::GroundName => draft.ground_name.push(c),
        FormField::Location => draft.location.push(c),
        FormField::Date => draft.date.push(c),
        FormField::Time => draft.time.push(c),
        FormField::Description => draft.description.push(c),
        FormField::TotalSpots => {
            if let Some(d) = c.to_digit(10) {
                let value = draft.total_spots.saturating_mul(10).saturating_add(d);
                if value <= 999 {
                    draft.total_spots = value;
                }
            }
        }
        // Amenities are toggled, not typed
        FormField::Amenities => {}
    }
    state
}

fn form_backspace(state: AppState) -> AppState {
    let mut state = state;
    let focus = state.form.focus;
    let draft = &mut state.form.draft;
    match focus {
        FormField::GroundName => {
            draft.ground_name.pop();
        }
        FormField::Location => {
            draft.location.pop();
        }
        FormField::Date => {
            draft.date.pop();
        }
        FormField::Time => {
            draft.time.pop();
        }
        FormField::Description => {
            draft.description.pop();
        }
        FormField::TotalSpots => draft.total_spots /= 10,
        FormField::Amenities => {}
    }
    state
}

/// Advance an optional filter through its options, then back to unset.
fn cycle_option(current: Option<String>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(cur) => match options.iter().position(|o| *o == cur) {
            Some(i) if i + 1 < options.len() => Some(options[i + 1].clone()),
            _ => None,
        },
    }
}

/// Keep the browse cursor inside the (possibly shrunken) filtered list.
fn clamp_selection(mut state: AppState) -> AppState {
    let len = state.filters.apply(&state.matches).len();
    if len == 0 {
        state.selected = 0;
    } else if state.selected >= len {
        state.selected = len - 1;
    }
    state
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Help overlay swallows everything except its dismiss keys
    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => reduce(state, Action::HideHelp),
            _ => state,
        };
    }

    // Search-entry mode captures printable input
    if state.search_editing {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => reduce(state, Action::SearchFinished),
            KeyCode::Backspace => reduce(state, Action::SearchBackspace),
            KeyCode::Char(c) => reduce(state, Action::SearchInput(c)),
            _ => state,
        };
    }

    // Global keybindings. The create form owns printable keys, so only
    // F1 stays global there.
    if state.screen != Screen::Create {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => return reduce(state, Action::Quit),
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => return reduce(state, Action::ShowHelp),
            (KeyCode::Tab, _) => {
                let next = state.screen.next();
                return reduce(state, Action::NavigateTo(next));
            }
            (KeyCode::Char('t'), KeyModifiers::NONE) => return reduce(state, Action::ToggleTheme),
            _ => {}
        }
    } else if key.code == KeyCode::F(1) {
        return reduce(state, Action::ShowHelp);
    }

    // Screen-specific keybindings
    match state.screen {
        Screen::Browse => handle_browse_key(state, key),
        Screen::Profile => handle_profile_key(state, key),
        Screen::Create => handle_create_key(state, key),
    }
}

/// Handle browse-screen keys
fn handle_browse_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            reduce(state, Action::SelectNext)
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            reduce(state, Action::SelectPrev)
        }

        (KeyCode::Enter, _) => match state.selected_match_id() {
            Some(id) => reduce(state, Action::JoinRequested(id)),
            None => state,
        },

        (KeyCode::Esc, _) => match state.selected_match_id() {
            Some(id) if state.is_join_pending(&id) => reduce(state, Action::JoinCancelled(id)),
            _ => state,
        },

        (KeyCode::Char('l'), KeyModifiers::NONE) => reduce(state, Action::CycleLocationFilter),
        (KeyCode::Char('d'), KeyModifiers::NONE) => reduce(state, Action::CycleDateFilter),
        (KeyCode::Char('a'), KeyModifiers::NONE) => reduce(state, Action::CycleAmenityFilter),
        (KeyCode::Char('/'), _) => reduce(state, Action::SearchStarted),
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => reduce(state, Action::RaiseMinSpots),
        (KeyCode::Char('-'), _) => reduce(state, Action::LowerMinSpots),
        (KeyCode::Char('c'), KeyModifiers::NONE) => reduce(state, Action::ClearFilters),

        (KeyCode::Char('n'), KeyModifiers::NONE) => {
            reduce(state, Action::NavigateTo(Screen::Create))
        }
        (KeyCode::Char('p'), KeyModifiers::NONE) => {
            reduce(state, Action::NavigateTo(Screen::Profile))
        }

        _ => state,
    }
}

/// Handle profile-screen keys
fn handle_profile_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char('n'), KeyModifiers::NONE) => {
            reduce(state, Action::NavigateTo(Screen::Create))
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            reduce(state, Action::NavigateTo(Screen::Browse))
        }
        _ => state,
    }
}

/// Handle create-form keys
fn handle_create_key(state: AppState, key: KeyEvent) -> AppState {
    let on_amenities = state.form.focus == FormField::Amenities;

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => reduce(state, Action::FormCancelled),
        (KeyCode::Enter, _) => reduce(state, Action::FormSubmitted),

        (KeyCode::Tab, _) | (KeyCode::Down, _) => reduce(state, Action::FormFocusNext),
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => reduce(state, Action::FormFocusPrev),

        (KeyCode::Left, _) if on_amenities => reduce(state, Action::FormAmenityPrev),
        (KeyCode::Right, _) if on_amenities => reduce(state, Action::FormAmenityNext),
        (KeyCode::Char(' '), _) if on_amenities => reduce(state, Action::FormAmenityToggled),

        (KeyCode::Backspace, _) => reduce(state, Action::FormBackspace),
        (KeyCode::Char(c), m) if m == KeyModifiers::NONE || m == KeyModifiers::SHIFT => {
            reduce(state, Action::FormInput(c))
        }

        _ => state,
    }
}
