//! Artist store operations

use encore_common::models::{genres_from_json, genres_to_json, Artist};
use encore_common::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::like_pattern;

/// Fields an artist edit may change
#[derive(Debug, Clone)]
pub struct ArtistEdit {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
}

const ARTIST_COLUMNS: &str = "guid, name, genres, city, state, phone, image_link, \
     facebook_link, website, seeking_venue, seeking_description";

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let guid: String = row.get("guid");
    let genres: String = row.get("genres");

    Ok(Artist {
        guid: Uuid::parse_str(&guid)
            .map_err(|e| Error::Internal(format!("malformed artist guid {}: {}", guid, e)))?,
        name: row.get("name"),
        genres: genres_from_json(&genres),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website: row.get("website"),
        seeking_venue: row.get::<i64, _>("seeking_venue") != 0,
        seeking_description: row.get("seeking_description"),
    })
}

/// Point lookup; `None` when absent
pub async fn get_artist(pool: &SqlitePool, id: Uuid) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM artists WHERE guid = ?",
        ARTIST_COLUMNS
    ))
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(artist_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Persist a new artist
pub async fn create_artist(pool: &SqlitePool, artist: &Artist) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO artists (
            guid, name, genres, city, state, phone, image_link,
            facebook_link, website, seeking_venue, seeking_description,
            created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(artist.guid.to_string())
    .bind(&artist.name)
    .bind(genres_to_json(&artist.genres))
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue as i64)
    .bind(&artist.seeking_description)
    .execute(&mut *tx)
    .await
    .map_err(Error::from_write_error)?;

    tx.commit().await?;
    Ok(())
}

/// Update the editable artist fields; `NotFound` when the row is absent
pub async fn update_artist(pool: &SqlitePool, id: Uuid, edit: &ArtistEdit) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artists
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
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete an artist; cascades to its shows. `NotFound` when the row is absent
pub async fn delete_artist(pool: &SqlitePool, id: Uuid) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM artists WHERE guid = ?")
        .bind(id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(Error::from_write_error)?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// All artists, name order
pub async fn list_all_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM artists ORDER BY name ASC",
        ARTIST_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(artist_from_row).collect()
}

/// Case-insensitive substring match on artist name
pub async fn search_artists_by_name(pool: &SqlitePool, term: &str) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM artists WHERE name LIKE ? ESCAPE '\\' ORDER BY name ASC",
        ARTIST_COLUMNS
    ))
    .bind(like_pattern(term))
    .fetch_all(pool)
    .await?;

    rows.iter().map(artist_from_row).collect()
}
