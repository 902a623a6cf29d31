//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;

/// Actions that trigger state transitions
///
/// Actions are immutable values describing what should happen; the
/// reducer (see `reducer.rs`) applies them to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick; drives pending-join countdowns
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Navigate to a different screen
    NavigateTo(Screen),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Switch between light and dark presentation
    ToggleTheme,

    // === Browse: selection and joining ===
    /// Move the cursor down the filtered list
    SelectNext,

    /// Move the cursor up the filtered list
    SelectPrev,

    /// Request to join a match (no-op if already joined or full)
    JoinRequested(String),

    /// Cancel a pending join request, reverting the match to available
    JoinCancelled(String),

    // === Filters ===
    /// Cycle the location filter through known locations, then off
    CycleLocationFilter,

    /// Cycle the date filter through known dates, then off
    CycleDateFilter,

    /// Cycle the amenity filter through all amenities, then off
    CycleAmenityFilter,

    /// Enter search-entry mode
    SearchStarted,

    /// Append a character to the search term
    SearchInput(char),

    /// Remove the last character of the search term
    SearchBackspace,

    /// Leave search-entry mode (the term stays active)
    SearchFinished,

    /// Raise the minimum-spots threshold by one
    RaiseMinSpots,

    /// Lower the minimum-spots threshold by one
    LowerMinSpots,

    /// Deactivate every filter criterion
    ClearFilters,

    // === Create form ===
    /// Focus the next form field
    FormFocusNext,

    /// Focus the previous form field
    FormFocusPrev,

    /// Type a character into the focused field
    FormInput(char),

    /// Delete the last character of the focused field
    FormBackspace,

    /// Move the amenity cursor right
    FormAmenityNext,

    /// Move the amenity cursor left
    FormAmenityPrev,

    /// Toggle the amenity under the cursor
    FormAmenityToggled,

    /// Submit the form (gated on required fields)
    FormSubmitted,

    /// Abandon the form and return to browse (values are kept)
    FormCancelled,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Match browser with filters
    Browse,

    /// Profile: joined and organized matches
    Profile,

    /// Create-match form
    Create,
}

impl Screen {
    /// Tab order for screen cycling.
    pub fn next(self) -> Screen {
        match self {
            Screen::Browse => Screen::Profile,
            Screen::Profile => Screen::Create,
            Screen::Create => Screen::Browse,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Browse => "Find Matches",
            Screen::Profile => "My Profile",
            Screen::Create => "Create Match",
        }
    }
}
