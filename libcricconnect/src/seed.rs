//! Seed data
//!
//! The application holds no persistent match data; every run starts from
//! this fixed set of matches and the single local user.

use crate::types::{Amenity, Match, User};

/// First free match sequence number after the seed data.
pub const FIRST_FREE_SEQ: u64 = 5;

/// The local user. Already joined match3 and organized match1.
pub fn seed_user() -> User {
    User {
        id: "user1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        joined_matches: vec!["match3".to_string()],
        organized_matches: vec!["match1".to_string()],
    }
}

/// The initial match list, in display order.
pub fn seed_matches() -> Vec<Match> {
    vec![
        Match {
            id: "match1".to_string(),
            ground_name: "Victoria Park".to_string(),
            location: "London".to_string(),
            date: "2025-04-15".to_string(),
            time: "14:00".to_string(),
            total_spots: 22,
            spots_left: 5,
            amenities: vec![Amenity::Water, Amenity::Parking, Amenity::Lights],
            organizer_name: "John Doe".to_string(),
            organizer_id: "user1".to_string(),
            description: "Friendly T20 match, all skill levels welcome.".to_string(),
            participants: Vec::new(),
        },
        Match {
            id: "match2".to_string(),
            ground_name: "Central Cricket Ground".to_string(),
            location: "Manchester".to_string(),
            date: "2025-04-18".to_string(),
            time: "10:00".to_string(),
            total_spots: 22,
            spots_left: 2,
            amenities: vec![Amenity::Water, Amenity::ChangingRooms, Amenity::Equipment],
            organizer_name: "Mike Smith".to_string(),
            organizer_id: "user2".to_string(),
            description: "Competitive match, intermediate to advanced players.".to_string(),
            participants: Vec::new(),
        },
        Match {
            id: "match3".to_string(),
            ground_name: "Riverside Fields".to_string(),
            location: "Birmingham".to_string(),
            date: "2025-04-20".to_string(),
            time: "16:30".to_string(),
            total_spots: 22,
            spots_left: 8,
            amenities: vec![Amenity::Water, Amenity::Parking],
            organizer_name: "Sarah Johnson".to_string(),
            organizer_id: "user3".to_string(),
            description: "Practice session with coaching available.".to_string(),
            participants: vec!["user1".to_string()],
        },
        Match {
            id: "match4".to_string(),
            ground_name: "Community Sports Hub".to_string(),
            location: "London".to_string(),
            date: "2025-04-22".to_string(),
            time: "18:00".to_string(),
            total_spots: 22,
            spots_left: 11,
            amenities: vec![Amenity::Water, Amenity::Lights, Amenity::ChangingRooms],
            organizer_name: "David Wilson".to_string(),
            organizer_id: "user4".to_string(),
            description: "Evening match under lights, beginners welcome.".to_string(),
            participants: Vec::new(),
        },
    ]
}
