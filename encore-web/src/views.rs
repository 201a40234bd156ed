//! Composite read views assembled from the store
//!
//! Detail pages, the grouped venue listing, search results, and the shows
//! listing are all projected here so no route re-derives its own shape.

use chrono::NaiveDateTime;
use encore_common::models::{Artist, Show, Venue};
use encore_common::{Error, Result};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::{artists, shows, venues};

/// Display format for show start times
const START_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M";

fn format_start_time(start_time: NaiveDateTime) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

fn current_instant() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

/// A show annotated with its artist, as embedded in venue views
#[derive(Debug, Clone, Serialize)]
pub struct ShowWithArtist {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// A show annotated with its venue, as embedded in artist views
#[derive(Debug, Clone, Serialize)]
pub struct ShowWithVenue {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

/// Full venue detail: base attributes plus partitioned show history
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<ShowWithArtist>,
    pub upcoming_shows: Vec<ShowWithArtist>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Full artist detail: base attributes plus partitioned show history
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ShowWithVenue>,
    pub upcoming_shows: Vec<ShowWithVenue>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One venue or artist in a listing or search result
#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one (city, state)
#[derive(Debug, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListEntry>,
}

/// Name search outcome
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ListEntry>,
}

/// One row of the shows listing
#[derive(Debug, Serialize)]
pub struct ShowListEntry {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Build the venue detail view; `None` when the venue does not exist
pub async fn venue_detail(pool: &SqlitePool, id: Uuid) -> Result<Option<VenueDetail>> {
    let Some(venue) = venues::get_venue(pool, id).await? else {
        return Ok(None);
    };

    // One captured instant keeps the two partitions disjoint
    let now = current_instant();
    let past = shows::past_shows_for_venue(pool, id, now).await?;
    let upcoming = shows::upcoming_shows_for_venue(pool, id, now).await?;

    let past_shows = annotate_with_artist(pool, &past).await?;
    let upcoming_shows = annotate_with_artist(pool, &upcoming).await?;

    Ok(Some(VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

/// Build the artist detail view; `None` when the artist does not exist
pub async fn artist_detail(pool: &SqlitePool, id: Uuid) -> Result<Option<ArtistDetail>> {
    let Some(artist) = artists::get_artist(pool, id).await? else {
        return Ok(None);
    };

    let now = current_instant();
    let past = shows::past_shows_for_artist(pool, id, now).await?;
    let upcoming = shows::upcoming_shows_for_artist(pool, id, now).await?;

    let past_shows = annotate_with_venue(pool, &past).await?;
    let upcoming_shows = annotate_with_venue(pool, &upcoming).await?;

    Ok(Some(ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

/// Venues grouped by (city, state), each entry carrying its upcoming count
pub async fn venues_by_location(pool: &SqlitePool) -> Result<Vec<CityGroup>> {
    let now = current_instant();
    let mut groups = Vec::new();

    for (city, state) in venues::list_distinct_locations(pool).await? {
        let mut entries = Vec::new();
        for venue in venues::list_venues_by_location(pool, &city, &state).await? {
            let num_upcoming_shows =
                shows::count_upcoming_for_venue(pool, venue.guid, now).await?;
            entries.push(ListEntry {
                id: venue.guid,
                name: venue.name,
                num_upcoming_shows,
            });
        }
        groups.push(CityGroup {
            city,
            state,
            venues: entries,
        });
    }

    Ok(groups)
}

/// Name search over venues
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<SearchResults> {
    let now = current_instant();
    let matches = venues::search_venues_by_name(pool, term).await?;

    let mut data = Vec::with_capacity(matches.len());
    for venue in matches {
        let num_upcoming_shows = shows::count_upcoming_for_venue(pool, venue.guid, now).await?;
        data.push(ListEntry {
            id: venue.guid,
            name: venue.name,
            num_upcoming_shows,
        });
    }

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Name search over artists
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<SearchResults> {
    let now = current_instant();
    let matches = artists::search_artists_by_name(pool, term).await?;

    let mut data = Vec::with_capacity(matches.len());
    for artist in matches {
        let num_upcoming_shows = shows::count_upcoming_for_artist(pool, artist.guid, now).await?;
        data.push(ListEntry {
            id: artist.guid,
            name: artist.name,
            num_upcoming_shows,
        });
    }

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// All shows with both counterpart names resolved
pub async fn shows_list(pool: &SqlitePool) -> Result<Vec<ShowListEntry>> {
    let all = shows::list_all_shows(pool).await?;

    let mut entries = Vec::with_capacity(all.len());
    for show in &all {
        let venue = venues::get_venue(pool, show.venue_id)
            .await?
            .ok_or_else(|| dangling(show, "venue", show.venue_id))?;
        let artist = artists::get_artist(pool, show.artist_id)
            .await?
            .ok_or_else(|| dangling(show, "artist", show.artist_id))?;

        entries.push(ShowListEntry {
            venue_id: venue.guid,
            venue_name: venue.name,
            artist_id: artist.guid,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: format_start_time(show.start_time),
        });
    }

    Ok(entries)
}

async fn annotate_with_artist(
    pool: &SqlitePool,
    partition: &[Show],
) -> Result<Vec<ShowWithArtist>> {
    let mut out = Vec::with_capacity(partition.len());
    for show in partition {
        let artist = artists::get_artist(pool, show.artist_id)
            .await?
            .ok_or_else(|| dangling(show, "artist", show.artist_id))?;
        out.push(ShowWithArtist {
            artist_id: artist.guid,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: format_start_time(show.start_time),
        });
    }
    Ok(out)
}

async fn annotate_with_venue(pool: &SqlitePool, partition: &[Show]) -> Result<Vec<ShowWithVenue>> {
    let mut out = Vec::with_capacity(partition.len());
    for show in partition {
        let venue = venues::get_venue(pool, show.venue_id)
            .await?
            .ok_or_else(|| dangling(show, "venue", show.venue_id))?;
        out.push(ShowWithVenue {
            venue_id: venue.guid,
            venue_name: venue.name,
            venue_image_link: venue.image_link,
            start_time: format_start_time(show.start_time),
        });
    }
    Ok(out)
}

// Cannot happen while foreign keys hold; reported distinctly rather than as
// a generic fault so corruption is visible
fn dangling(show: &Show, counterpart: &str, id: Uuid) -> Error {
    Error::IntegrityViolation(format!(
        "show {} references missing {} {}",
        show.guid, counterpart, id
    ))
}
