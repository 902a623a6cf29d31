//! CricConnect - a local cricket match finder
//!
//! This library provides the domain model and rules for the CricConnect
//! terminal application: match and user records, the filter predicate,
//! derived per-user views, and theme preferences.

pub mod error;
pub mod filter;
pub mod logging;
pub mod prefs;
pub mod seed;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use error::{CricError, Result};
pub use filter::FilterSelection;
pub use prefs::{Prefs, Theme};
pub use types::{Amenity, Match, MatchDraft, User};
