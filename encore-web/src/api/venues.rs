//! Venue page handlers

use axum::extract::{Form, Path, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use encore_common::models::Venue;

use crate::db::venues::{self, VenueEdit};
use crate::error::PageError;
use crate::{pages, views, AppState};

use super::{optional, parse_id, split_genres};

/// GET /venues
///
/// Venues grouped by city/state, each with its upcoming-show count.
pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let groups = views::venues_by_location(&state.db).await?;
    Ok(Html(pages::venues_page(&groups)))
}

/// Form body for both search routes
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = views::search_venues(&state.db, &form.search_term).await?;
    Ok(Html(pages::search_results_page(
        "Venues",
        &form.search_term,
        &results,
    )))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;
    let detail = views::venue_detail(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;
    Ok(Html(pages::venue_detail_page(&detail, None)))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    Html(pages::venue_form_page())
}

/// Form body for venue creation
#[derive(Debug, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
}

/// POST /venues/create
///
/// Success and failure both land on the home page with a flash message.
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Html<String> {
    let mut venue = Venue::new(form.name.clone(), form.city, form.state);
    venue.genres = split_genres(&form.genres);
    venue.address = optional(form.address);
    venue.phone = optional(form.phone);
    venue.image_link = optional(form.image_link);
    venue.facebook_link = optional(form.facebook_link);

    match venues::create_venue(&state.db, &venue).await {
        Ok(()) => {
            info!("Listed venue {} ({})", venue.name, venue.guid);
            Html(pages::home_page(Some(&format!(
                "Venue {} was successfully listed!",
                form.name
            ))))
        }
        Err(err) => {
            warn!("Venue create failed ({})", err);
            Html(pages::home_page(Some(&format!(
                "Error occurred. Venue {} could not be listed.",
                form.name
            ))))
        }
    }
}

/// DELETE /venues/:id
///
/// Cascades to the venue's shows. The response is the home page with a
/// flash either way.
pub async fn delete_venue(State(state): State<AppState>, Path(id): Path<String>) -> Html<String> {
    let result = match Uuid::parse_str(&id) {
        Ok(id) => venues::delete_venue(&state.db, id).await,
        Err(_) => Err(encore_common::Error::NotFound(format!("venue {}", id))),
    };

    match result {
        Ok(()) => {
            info!("Deleted venue {}", id);
            Html(pages::home_page(Some(
                "The venue has been successfully deleted!",
            )))
        }
        Err(err) => {
            warn!("Venue delete failed ({})", err);
            Html(pages::home_page(Some("Delete was unsuccessful. Try again!")))
        }
    }
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;
    let venue = venues::get_venue(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;
    Ok(Html(pages::edit_venue_form_page(&venue)))
}

/// Form body for venue edits
#[derive(Debug, Deserialize)]
pub struct VenueEditForm {
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

/// POST /venues/:id/edit
///
/// Lands back on the refreshed detail page with a flash message.
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<VenueEditForm>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;

    let edit = VenueEdit {
        name: form.name.clone(),
        city: form.city,
        state: form.state,
        phone: optional(form.phone),
        facebook_link: optional(form.facebook_link),
        genres: split_genres(&form.genres),
    };

    let flash = match venues::update_venue(&state.db, id, &edit).await {
        Ok(()) => format!("Venue {} was successfully edited!", form.name),
        Err(encore_common::Error::NotFound(_)) => return Err(PageError::NotFound),
        Err(err) => {
            warn!("Venue edit failed ({})", err);
            format!("Error occurred. Venue {} could not be edited.", form.name)
        }
    };

    let detail = views::venue_detail(&state.db, id)
        .await?
        .ok_or(PageError::NotFound)?;
    Ok(Html(pages::venue_detail_page(&detail, Some(&flash))))
}
