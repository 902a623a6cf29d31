//! Match filtering
//!
//! A filter selection is a set of independent, optional criteria. A match
//! passes when it satisfies every active criterion; an unset criterion
//! imposes no constraint. Results keep list insertion order.

use crate::types::{Amenity, Match};

/// The current filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Exact location match.
    pub location: Option<String>,
    /// Exact ISO date match.
    pub date: Option<String>,
    /// Amenity membership.
    pub amenity: Option<Amenity>,
    /// Case-insensitive substring over ground name, location and description.
    pub search: String,
    /// Minimum open spots. Zero means unset.
    pub min_spots: u32,
}

impl FilterSelection {
    /// Any criterion active?
    pub fn is_active(&self) -> bool {
        self.location.is_some()
            || self.date.is_some()
            || self.amenity.is_some()
            || !self.search.is_empty()
            || self.min_spots > 0
    }

    /// Reset every criterion.
    pub fn clear(&mut self) {
        *self = FilterSelection::default();
    }

    /// Does a single match satisfy all active criteria?
    pub fn matches(&self, m: &Match) -> bool {
        if let Some(ref location) = self.location {
            if m.location != *location {
                return false;
            }
        }
        if let Some(ref date) = self.date {
            if m.date != *date {
                return false;
            }
        }
        if let Some(amenity) = self.amenity {
            if !m.amenities.contains(&amenity) {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let haystack = format!(
                "{} {} {}",
                m.ground_name.to_lowercase(),
                m.location.to_lowercase(),
                m.description.to_lowercase()
            );
            if !haystack.contains(&needle) {
                return false;
            }
        }
        if self.min_spots > 0 && m.spots_left < self.min_spots {
            return false;
        }
        true
    }

    /// The ordered sublist of matches satisfying all active criteria.
    pub fn apply<'a>(&self, matches: &'a [Match]) -> Vec<&'a Match> {
        matches.iter().filter(|m| self.matches(m)).collect()
    }
}
