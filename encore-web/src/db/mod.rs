//! Store layer: per-entity database operations

pub mod artists;
pub mod shows;
pub mod venues;

/// Escape LIKE wildcards in a user-supplied search term so the match is a
/// plain substring match.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
