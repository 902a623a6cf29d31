//! Application state
//!
//! The single source of truth for the application. All transitions
//! happen through the reducer (see `reducer.rs`).

use libcricconnect::filter::FilterSelection;
use libcricconnect::prefs::Theme;
use libcricconnect::seed::{seed_matches, seed_user, FIRST_FREE_SEQ};
use libcricconnect::types::{Match, MatchDraft, User};

use super::actions::Screen;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub screen: Screen,

    /// Light or dark presentation
    pub theme: Theme,

    /// Help overlay visible?
    pub help_visible: bool,

    /// The local user
    pub user: User,

    /// The full match list, in insertion order
    pub matches: Vec<Match>,

    /// Next match sequence number. Ids are `match<seq>`; the counter
    /// only ever increases, so ids stay unique even if matches were
    /// ever removed.
    pub next_match_seq: u64,

    /// In-flight join requests, counted down by ticks
    pub pending_joins: Vec<PendingJoin>,

    /// Current filter criteria
    pub filters: FilterSelection,

    /// Search-entry mode active (keys edit the search term)?
    pub search_editing: bool,

    /// Cursor index into the filtered list
    pub selected: usize,

    /// Create-form state
    pub form: CreateFormState,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// A join request waiting out its confirmation delay.
///
/// Owned by state rather than a detached timer so it can be cancelled,
/// and so completion always runs against current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingJoin {
    pub match_id: String,
    pub ticks_remaining: u32,
}

/// Create-form state: the draft plus focus bookkeeping
#[derive(Debug, Clone, Default)]
pub struct CreateFormState {
    pub draft: MatchDraft,
    pub focus: FormField,
    /// Cursor within the amenity checkbox row
    pub amenity_cursor: usize,
}

/// Focusable create-form fields, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    GroundName,
    Location,
    Date,
    Time,
    TotalSpots,
    Description,
    Amenities,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::GroundName,
        FormField::Location,
        FormField::Date,
        FormField::Time,
        FormField::TotalSpots,
        FormField::Description,
        FormField::Amenities,
    ];

    pub fn next(self) -> FormField {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::GroundName => "Ground Name",
            FormField::Location => "Location",
            FormField::Date => "Date",
            FormField::Time => "Time",
            FormField::TotalSpots => "Total Spots",
            FormField::Description => "Description",
            FormField::Amenities => "Amenities",
        }
    }
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Join confirmation delay in milliseconds. Zero joins immediately.
    pub join_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("CRIC_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("CRIC_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        let join_delay_ms = std::env::var("CRIC_TUI_JOIN_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);

        Self {
            colors_enabled,
            tick_rate_ms,
            join_delay_ms,
        }
    }
}

impl UiConfig {
    /// Join delay expressed in ticks, at least one tick when non-zero.
    pub fn join_delay_ticks(&self) -> u32 {
        if self.join_delay_ms == 0 {
            0
        } else {
            ((self.join_delay_ms / self.tick_rate_ms.max(1)).max(1)) as u32
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Browse,
            theme: Theme::default(),
            help_visible: false,
            user: seed_user(),
            matches: seed_matches(),
            next_match_seq: FIRST_FREE_SEQ,
            pending_joins: Vec::new(),
            filters: FilterSelection::default(),
            search_editing: false,
            selected: 0,
            form: CreateFormState::default(),
            status: StatusBarState::default(),
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state from the seed data
    pub fn new() -> Self {
        Self::default()
    }

    /// The filtered match list, in insertion order
    pub fn filtered(&self) -> Vec<&Match> {
        self.filters.apply(&self.matches)
    }

    /// Id of the match under the browse cursor, if any
    pub fn selected_match_id(&self) -> Option<String> {
        self.filtered().get(self.selected).map(|m| m.id.clone())
    }

    /// Is a join request pending for this match?
    pub fn is_join_pending(&self, match_id: &str) -> bool {
        self.pending_joins.iter().any(|p| p.match_id == match_id)
    }

    /// Can the create form be submitted?
    pub fn can_create(&self) -> bool {
        self.form.draft.is_ready()
    }
}
