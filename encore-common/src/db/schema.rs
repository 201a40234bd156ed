//! Table creation

use crate::Result;
use sqlx::SqlitePool;

/// Create all tables and indexes (idempotent)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_venues_table(pool).await?;
    create_artists_table(pool).await?;
    create_shows_table(pool).await?;

    Ok(())
}

/// Create the venues table
///
/// Genre lists are stored as JSON arrays in a TEXT column.
pub async fn create_venues_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            genres TEXT NOT NULL DEFAULT '[]',
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT,
            phone TEXT,
            image_link TEXT,
            facebook_link TEXT,
            website TEXT,
            seeking_talent INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (length(state) = 2)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_location ON venues(city, state)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_name ON venues(name)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the artists table
pub async fn create_artists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            genres TEXT NOT NULL DEFAULT '[]',
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT,
            image_link TEXT,
            facebook_link TEXT,
            website TEXT,
            seeking_venue INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (length(state) = 2)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_artists_name ON artists(name)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the shows table
///
/// A show cannot exist without both a valid artist and venue; deleting
/// either owner deletes the show.
pub async fn create_shows_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            guid TEXT PRIMARY KEY,
            artist_id TEXT NOT NULL REFERENCES artists(guid) ON DELETE CASCADE,
            venue_id TEXT NOT NULL REFERENCES venues(guid) ON DELETE CASCADE,
            start_time TIMESTAMP NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_start_time ON shows(start_time)")
        .execute(pool)
        .await?;

    Ok(())
}
