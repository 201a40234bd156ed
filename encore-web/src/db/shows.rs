//! Show store operations and time-partition queries

use chrono::NaiveDateTime;
use encore_common::models::Show;
use encore_common::{Error, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

fn show_from_row(row: &SqliteRow) -> Result<Show> {
    let guid: String = row.get("guid");
    let artist_id: String = row.get("artist_id");
    let venue_id: String = row.get("venue_id");

    let parse = |label: &str, value: &str| {
        Uuid::parse_str(value)
            .map_err(|e| Error::Internal(format!("malformed show {} {}: {}", label, value, e)))
    };

    Ok(Show {
        guid: parse("guid", &guid)?,
        artist_id: parse("artist_id", &artist_id)?,
        venue_id: parse("venue_id", &venue_id)?,
        start_time: row.get("start_time"),
    })
}

/// Persist a new show.
///
/// Both references must resolve; a dangling artist or venue id surfaces as
/// `IntegrityViolation` and nothing is written.
pub async fn create_show(pool: &SqlitePool, show: &Show) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO shows (guid, artist_id, venue_id, start_time, created_at)
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(show.guid.to_string())
    .bind(show.artist_id.to_string())
    .bind(show.venue_id.to_string())
    .bind(show.start_time)
    .execute(&mut *tx)
    .await
    .map_err(Error::from_write_error)?;

    tx.commit().await?;
    Ok(())
}

/// Point lookup; `None` when absent
pub async fn get_show(pool: &SqlitePool, id: Uuid) -> Result<Option<Show>> {
    let row = sqlx::query("SELECT guid, artist_id, venue_id, start_time FROM shows WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(show_from_row(&row)?)),
        None => Ok(None),
    }
}

/// All shows, soonest first
pub async fn list_all_shows(pool: &SqlitePool) -> Result<Vec<Show>> {
    let rows =
        sqlx::query("SELECT guid, artist_id, venue_id, start_time FROM shows ORDER BY start_time ASC")
            .fetch_all(pool)
            .await?;

    rows.iter().map(show_from_row).collect()
}

/// Shows at a venue strictly before `now`
pub async fn past_shows_for_venue(
    pool: &SqlitePool,
    venue_id: Uuid,
    now: NaiveDateTime,
) -> Result<Vec<Show>> {
    owner_shows(pool, "venue_id", venue_id, "<", now).await
}

/// Shows at a venue strictly after `now`
pub async fn upcoming_shows_for_venue(
    pool: &SqlitePool,
    venue_id: Uuid,
    now: NaiveDateTime,
) -> Result<Vec<Show>> {
    owner_shows(pool, "venue_id", venue_id, ">", now).await
}

/// Shows by an artist strictly before `now`
pub async fn past_shows_for_artist(
    pool: &SqlitePool,
    artist_id: Uuid,
    now: NaiveDateTime,
) -> Result<Vec<Show>> {
    owner_shows(pool, "artist_id", artist_id, "<", now).await
}

/// Shows by an artist strictly after `now`
pub async fn upcoming_shows_for_artist(
    pool: &SqlitePool,
    artist_id: Uuid,
    now: NaiveDateTime,
) -> Result<Vec<Show>> {
    owner_shows(pool, "artist_id", artist_id, ">", now).await
}

/// Number of upcoming shows at a venue
pub async fn count_upcoming_for_venue(
    pool: &SqlitePool,
    venue_id: Uuid,
    now: NaiveDateTime,
) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM shows WHERE venue_id = ? AND start_time > ?")
            .bind(venue_id.to_string())
            .bind(now)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

/// Number of upcoming shows by an artist
pub async fn count_upcoming_for_artist(
    pool: &SqlitePool,
    artist_id: Uuid,
    now: NaiveDateTime,
) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM shows WHERE artist_id = ? AND start_time > ?")
            .bind(artist_id.to_string())
            .bind(now)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

async fn owner_shows(
    pool: &SqlitePool,
    owner_column: &str,
    owner_id: Uuid,
    comparison: &str,
    now: NaiveDateTime,
) -> Result<Vec<Show>> {
    // owner_column and comparison come from the functions above, never from
    // request input
    let sql = format!(
        "SELECT guid, artist_id, venue_id, start_time FROM shows \
         WHERE {} = ? AND start_time {} ? ORDER BY start_time ASC",
        owner_column, comparison
    );

    let rows = sqlx::query(&sql)
        .bind(owner_id.to_string())
        .bind(now)
        .fetch_all(pool)
        .await?;

    rows.iter().map(show_from_row).collect()
}
