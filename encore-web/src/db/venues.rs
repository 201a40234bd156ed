//! Venue store operations

use encore_common::models::{genres_from_json, genres_to_json, Venue};
use encore_common::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::like_pattern;

/// Fields a venue edit may change
#[derive(Debug, Clone)]
pub struct VenueEdit {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
}

const VENUE_COLUMNS: &str = "guid, name, genres, city, state, address, phone, image_link, \
     facebook_link, website, seeking_talent, seeking_description";

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let guid: String = row.get("guid");
    let genres: String = row.get("genres");

    Ok(Venue {
        guid: Uuid::parse_str(&guid)
            .map_err(|e| Error::Internal(format!("malformed venue guid {}: {}", guid, e)))?,
        name: row.get("name"),
        genres: genres_from_json(&genres),
        city: row.get("city"),
        state: row.get("state"),
        address: row.get("address"),
        phone: row.get("phone"),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website: row.get("website"),
        seeking_talent: row.get::<i64, _>("seeking_talent") != 0,
        seeking_description: row.get("seeking_description"),
    })
}

/// Point lookup; `None` when absent
pub async fn get_venue(pool: &SqlitePool, id: Uuid) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM venues WHERE guid = ?",
        VENUE_COLUMNS
    ))
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(venue_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Persist a new venue
pub async fn create_venue(pool: &SqlitePool, venue: &Venue) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO venues (
            guid, name, genres, city, state, address, phone, image_link,
            facebook_link, website, seeking_talent, seeking_description,
            created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(venue.guid.to_string())
    .bind(&venue.name)
    .bind(genres_to_json(&venue.genres))
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent as i64)
    .bind(&venue.seeking_description)
    .execute(&mut *tx)
    .await
    .map_err(Error::from_write_error)?;

    tx.commit().await?;
    Ok(())
}

/// Update the editable venue fields; `NotFound` when the row is absent
pub async fn update_venue(pool: &SqlitePool, id: Uuid, edit: &VenueEdit) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venues
        SET name = ?, city = ?, state = ?, phone = ?, facebook_link = ?,
            genres = ?, updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&edit.name)
    .bind(&edit.city)
    .bind(&edit.state)
    .bind(&edit.phone)
    .bind(&edit.facebook_link)
    .bind(genres_to_json(&edit.genres))
    .bind(id.to_string())
    .execute(&mut *tx)
    .await
    .map_err(Error::from_write_error)?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a venue; cascades to its shows. `NotFound` when the row is absent
pub async fn delete_venue(pool: &SqlitePool, id: Uuid) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venues WHERE guid = ?")
        .bind(id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(Error::from_write_error)?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// All venues, name order
pub async fn list_all_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM venues ORDER BY name ASC",
        VENUE_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(venue_from_row).collect()
}

/// Unique (city, state) pairs across all venues
pub async fn list_distinct_locations(pool: &SqlitePool) -> Result<Vec<(String, String)>> {
    let rows = sqlx::query("SELECT DISTINCT city, state FROM venues ORDER BY state ASC, city ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| (row.get("city"), row.get("state")))
        .collect())
}

/// Venues in one city/state
pub async fn list_venues_by_location(
    pool: &SqlitePool,
    city: &str,
    state: &str,
) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM venues WHERE city = ? AND state = ? ORDER BY name ASC",
        VENUE_COLUMNS
    ))
    .bind(city)
    .bind(state)
    .fetch_all(pool)
    .await?;

    rows.iter().map(venue_from_row).collect()
}

/// Case-insensitive substring match on venue name
pub async fn search_venues_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM venues WHERE name LIKE ? ESCAPE '\\' ORDER BY name ASC",
        VENUE_COLUMNS
    ))
    .bind(like_pattern(term))
    .fetch_all(pool)
    .await?;

    rows.iter().map(venue_from_row).collect()
}
