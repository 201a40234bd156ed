//! HTTP page handlers for encore-web

pub mod artists;
pub mod health;
pub mod shows;
pub mod ui;
pub mod venues;

pub use health::health_routes;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::PageError;

/// An unparseable id renders the same 404 page as an unknown one
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, PageError> {
    Uuid::parse_str(raw).map_err(|_| PageError::NotFound)
}

/// Trimmed form value; empty means absent
pub(crate) fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Genre lists arrive as one comma-separated form field
pub(crate) fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Accepts datetime-local form values, with and without seconds
pub(crate) fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    None
}
