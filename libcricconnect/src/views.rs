//! Derived views over the match list
//!
//! Pure read-only functions used by the profile screen and the filter
//! cycling controls. None of these mutate state.

use crate::types::{Match, User};

/// Matches the user has joined, in list order.
pub fn joined_matches<'a>(user: &User, matches: &'a [Match]) -> Vec<&'a Match> {
    matches.iter().filter(|m| user.has_joined(&m.id)).collect()
}

/// Matches the user organized, in list order.
pub fn organized_matches<'a>(user: &User, matches: &'a [Match]) -> Vec<&'a Match> {
    matches
        .iter()
        .filter(|m| user.organized_matches.iter().any(|id| *id == m.id))
        .collect()
}

/// Distinct locations, first-seen order. Drives the location filter cycle.
pub fn distinct_locations(matches: &[Match]) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();
    for m in matches {
        if !locations.contains(&m.location) {
            locations.push(m.location.clone());
        }
    }
    locations
}

/// Distinct dates, first-seen order. Drives the date filter cycle.
pub fn distinct_dates(matches: &[Match]) -> Vec<String> {
    let mut dates: Vec<String> = Vec::new();
    for m in matches {
        if !dates.contains(&m.date) {
            dates.push(m.date.clone());
        }
    }
    dates
}
