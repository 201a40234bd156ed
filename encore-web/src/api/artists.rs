//! Artist page handlers

use axum::extract::{Form, Path, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::{info, warn};

use encore_common::models::Artist;

use crate::db::artists::{self, ArtistEdit};
use crate::error::PageError;
use crate::{pages, views, AppState};

use super::venues::SearchForm;
use super::{optional, parse_id, split_genres};

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let all = artists::list_all_artists(&state.db).await?;
    Ok(Html(pages::artists_page(&all)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = views::search_artists(&state.db, &form.search_term).await?;
    Ok(Html(pages::search_results_page(
        "Artists",
        &form.search_term,
        &results,
    )))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;
    let detail = views::artist_detail(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;
    Ok(Html(pages::artist_detail_page(&detail, None)))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    Html(pages::artist_form_page())
}

/// Form body for artist creation
#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub genres: String,
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Html<String> {
    let mut artist = Artist::new(form.name.clone(), form.city, form.state);
    artist.genres = split_genres(&form.genres);
    artist.phone = optional(form.phone);
    artist.facebook_link = optional(form.facebook_link);

    match artists::create_artist(&state.db, &artist).await {
        Ok(()) => {
            info!("Listed artist {} ({})", artist.name, artist.guid);
            Html(pages::home_page(Some(&format!(
                "Artist {} was successfully listed!",
                form.name
            ))))
        }
        Err(err) => {
            warn!("Artist create failed ({})", err);
            Html(pages::home_page(Some(&format!(
                "Error occurred. Artist {} could not be listed.",
                form.name
            ))))
        }
    }
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;
    let artist = artists::get_artist(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;
    Ok(Html(pages::edit_artist_form_page(&artist)))
}

/// Form body for artist edits
#[derive(Debug, Deserialize)]
pub struct ArtistEditForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub genres: String,
}

/// POST /artists/:id/edit
///
/// Lands back on the refreshed detail page with a flash message.
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ArtistEditForm>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;

    let edit = ArtistEdit {
        name: form.name.clone(),
        city: form.city,
        state: form.state,
        phone: optional(form.phone),
        facebook_link: optional(form.facebook_link),
        genres: split_genres(&form.genres),
    };

    let flash = match artists::update_artist(&state.db, id, &edit).await {
        Ok(()) => format!("Artist {} was successfully edited!", form.name),
        Err(encore_common::Error::NotFound(_)) => return Err(PageError::NotFound),
        Err(err) => {
            warn!("Artist edit failed ({})", err);
            format!("Error occurred. Artist {} could not be edited.", form.name)
        }
    };

    let detail = views::artist_detail(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;
    Ok(Html(pages::artist_detail_page(&detail, Some(&flash))))
}
