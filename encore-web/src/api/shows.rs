//! Show page handlers

use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use encore_common::models::Show;

use crate::db::shows;
use crate::error::PageError;
use crate::{pages, views, AppState};

use super::parse_start_time;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let entries = views::shows_list(&state.db).await?;
    Ok(Html(pages::shows_page(&entries)))
}

/// GET /shows/create
pub async fn create_show_form() -> Html<String> {
    Html(pages::show_form_page())
}

/// Form body for show creation
#[derive(Debug, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

/// POST /shows/create
///
/// Malformed input and store failures (including a show referencing a
/// missing artist or venue) land on the same flash message.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Html<String> {
    let parsed = parse_show_form(&form);

    let result = match parsed {
        Some(show) => shows::create_show(&state.db, &show).await,
        None => Err(encore_common::Error::InvalidInput(
            "unparseable show form".to_string(),
        )),
    };

    match result {
        Ok(()) => {
            info!("Listed show for artist {}", form.artist_id);
            Html(pages::home_page(Some("Show was successfully listed!")))
        }
        Err(err) => {
            warn!("Show create failed ({})", err);
            Html(pages::home_page(Some(
                "Show could not be listed. Please try again",
            )))
        }
    }
}

fn parse_show_form(form: &ShowForm) -> Option<Show> {
    let artist_id = Uuid::parse_str(form.artist_id.trim()).ok()?;
    let venue_id = Uuid::parse_str(form.venue_id.trim()).ok()?;
    let start_time = parse_start_time(&form.start_time)?;
    Some(Show::new(artist_id, venue_id, start_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show_form_requires_valid_ids_and_time() {
        let artist_id = Uuid::new_v4();
        let venue_id = Uuid::new_v4();

        let form = ShowForm {
            artist_id: artist_id.to_string(),
            venue_id: venue_id.to_string(),
            start_time: "2030-06-15T20:00".to_string(),
        };
        let show = parse_show_form(&form).expect("should parse");
        assert_eq!(show.artist_id, artist_id);
        assert_eq!(show.venue_id, venue_id);

        let bad = ShowForm {
            artist_id: "not-a-uuid".to_string(),
            venue_id: venue_id.to_string(),
            start_time: "2030-06-15T20:00".to_string(),
        };
        assert!(parse_show_form(&bad).is_none());

        let bad_time = ShowForm {
            artist_id: artist_id.to_string(),
            venue_id: venue_id.to_string(),
            start_time: "whenever".to_string(),
        };
        assert!(parse_show_form(&bad_time).is_none());
    }
}
