//! Core types for CricConnect

use serde::{Deserialize, Serialize};

/// Ground facility tag, drawn from a fixed closed set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Water,
    Parking,
    Lights,
    ChangingRooms,
    Equipment,
}

impl Amenity {
    /// All amenities, in the order they appear in filters and forms.
    pub const ALL: [Amenity; 5] = [
        Amenity::Water,
        Amenity::Parking,
        Amenity::Lights,
        Amenity::ChangingRooms,
        Amenity::Equipment,
    ];

    /// Stable identifier used in stored data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Water => "water",
            Amenity::Parking => "parking",
            Amenity::Lights => "lights",
            Amenity::ChangingRooms => "changing_rooms",
            Amenity::Equipment => "equipment",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Water => "water",
            Amenity::Parking => "parking",
            Amenity::Lights => "lights",
            Amenity::ChangingRooms => "changing rooms",
            Amenity::Equipment => "equipment",
        }
    }
}

impl std::str::FromStr for Amenity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "water" => Ok(Amenity::Water),
            "parking" => Ok(Amenity::Parking),
            "lights" => Ok(Amenity::Lights),
            "changing_rooms" => Ok(Amenity::ChangingRooms),
            "equipment" => Ok(Amenity::Equipment),
            _ => Err(format!("Unknown amenity: '{}'", s)),
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A scheduled cricket game with capacity and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier, `match<N>`.
    pub id: String,
    pub ground_name: String,
    pub location: String,
    /// ISO date string, `YYYY-MM-DD`.
    pub date: String,
    /// 24-hour time string, `HH:MM`.
    pub time: String,
    pub total_spots: u32,
    pub spots_left: u32,
    /// Insertion-ordered amenity tags.
    pub amenities: Vec<Amenity>,
    pub organizer_name: String,
    pub organizer_id: String,
    pub description: String,
    /// User ids of everyone who has joined.
    pub participants: Vec<String>,
}

impl Match {
    /// Spots are exhausted; joining is suppressed.
    pub fn is_full(&self) -> bool {
        self.spots_left == 0
    }
}

/// The current user and their match history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Ids of matches the user has joined.
    pub joined_matches: Vec<String>,
    /// Ids of matches the user has organized.
    pub organized_matches: Vec<String>,
}

impl User {
    pub fn has_joined(&self, match_id: &str) -> bool {
        self.joined_matches.iter().any(|id| id == match_id)
    }
}

/// Default spot count for a new match (two full sides).
pub const DEFAULT_TOTAL_SPOTS: u32 = 22;

/// Create-form values for a match, before id and organizer are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDraft {
    pub ground_name: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub total_spots: u32,
    pub amenities: Vec<Amenity>,
    pub description: String,
}

impl Default for MatchDraft {
    fn default() -> Self {
        Self {
            ground_name: String::new(),
            location: String::new(),
            date: String::new(),
            time: String::new(),
            total_spots: DEFAULT_TOTAL_SPOTS,
            amenities: Vec::new(),
            description: String::new(),
        }
    }
}

impl MatchDraft {
    /// Required fields present? Gates the submit action; nothing beyond
    /// non-emptiness is checked (no date/time format validation).
    pub fn is_ready(&self) -> bool {
        !self.ground_name.is_empty()
            && !self.location.is_empty()
            && !self.date.is_empty()
            && !self.time.is_empty()
    }

    /// Toggle an amenity: present is removed, absent is appended.
    /// The resulting order is insertion order.
    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if let Some(pos) = self.amenities.iter().position(|a| *a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity);
        }
    }

    /// Build the final match record, stamping id and organizer.
    /// A new match always starts with every spot open.
    pub fn build(&self, id: String, organizer: &User) -> Match {
        Match {
            id,
            ground_name: self.ground_name.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            total_spots: self.total_spots,
            spots_left: self.total_spots,
            amenities: self.amenities.clone(),
            organizer_name: organizer.name.clone(),
            organizer_id: organizer.id.clone(),
            description: self.description.clone(),
            participants: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organizer() -> User {
        User {
            id: "user9".to_string(),
            name: "Priya Patel".to_string(),
            email: "priya@example.com".to_string(),
            joined_matches: Vec::new(),
            organized_matches: Vec::new(),
        }
    }

    #[test]
    fn test_amenity_round_trip() {
        for amenity in Amenity::ALL {
            assert_eq!(amenity.as_str().parse::<Amenity>().unwrap(), amenity);
        }
    }

    #[test]
    fn test_amenity_from_str_invalid() {
        let result = "scoreboard".parse::<Amenity>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("scoreboard"));
    }

    #[test]
    fn test_amenity_label_spaces_underscores() {
        assert_eq!(Amenity::ChangingRooms.label(), "changing rooms");
        assert_eq!(Amenity::ChangingRooms.as_str(), "changing_rooms");
    }

    #[test]
    fn test_draft_not_ready_until_required_fields() {
        let mut draft = MatchDraft::default();
        assert!(!draft.is_ready());

        draft.ground_name = "Oval Green".to_string();
        draft.location = "Leeds".to_string();
        draft.date = "2025-05-01".to_string();
        assert!(!draft.is_ready());

        draft.time = "10:30".to_string();
        assert!(draft.is_ready());
    }

    #[test]
    fn test_draft_toggle_amenity_twice_restores() {
        let mut draft = MatchDraft::default();
        draft.toggle_amenity(Amenity::Water);
        draft.toggle_amenity(Amenity::Lights);
        assert_eq!(draft.amenities, vec![Amenity::Water, Amenity::Lights]);

        draft.toggle_amenity(Amenity::Water);
        draft.toggle_amenity(Amenity::Water);
        assert_eq!(
            draft.amenities.iter().filter(|a| **a == Amenity::Water).count(),
            1
        );
        assert!(draft.amenities.contains(&Amenity::Lights));
    }

    #[test]
    fn test_build_starts_with_all_spots_open() {
        let mut draft = MatchDraft::default();
        draft.ground_name = "Oval Green".to_string();
        draft.location = "Leeds".to_string();
        draft.date = "2025-05-01".to_string();
        draft.time = "10:30".to_string();
        draft.total_spots = 16;

        let m = draft.build("match7".to_string(), &organizer());
        assert_eq!(m.id, "match7");
        assert_eq!(m.total_spots, 16);
        assert_eq!(m.spots_left, 16);
        assert_eq!(m.organizer_id, "user9");
        assert_eq!(m.organizer_name, "Priya Patel");
        assert!(m.participants.is_empty());
        assert!(!m.is_full());
    }
}
