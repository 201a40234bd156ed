//! Entity models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A venue that hosts shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub guid: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    /// 2-letter region code
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Create a new venue with a fresh identifier and empty optional fields
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.into(),
            genres: Vec::new(),
            city: city.into(),
            state: state.into(),
            address: None,
            phone: None,
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }
}

/// A performing artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub guid: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    /// 2-letter region code
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    /// Create a new artist with a fresh identifier and empty optional fields
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.into(),
            genres: Vec::new(),
            city: city.into(),
            state: state.into(),
            phone: None,
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }
}

/// A show: one artist playing one venue at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub guid: Uuid,
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    /// Local date + time; no timezone is tracked
    pub start_time: NaiveDateTime,
}

impl Show {
    pub fn new(artist_id: Uuid, venue_id: Uuid, start_time: NaiveDateTime) -> Self {
        Self {
            guid: Uuid::new_v4(),
            artist_id,
            venue_id,
            start_time,
        }
    }
}

/// Serialize a genre list for its TEXT column
pub fn genres_to_json(genres: &[String]) -> String {
    serde_json::to_string(genres).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a genre list from its TEXT column; malformed data reads as empty
pub fn genres_from_json(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_round_trip() {
        let genres = vec!["Jazz".to_string(), "Classical".to_string()];
        let json = genres_to_json(&genres);
        assert_eq!(genres_from_json(&json), genres);
    }

    #[test]
    fn malformed_genres_read_as_empty() {
        assert!(genres_from_json("not json").is_empty());
        assert!(genres_from_json("").is_empty());
    }
}
