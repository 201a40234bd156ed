//! encore-web library - venue/artist/show listing service

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;
pub mod pages;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::ui::serve_home))
        .route("/venues", get(api::venues::list_venues))
        .route("/venues/search", axum::routing::post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::create_venue_form).post(api::venues::create_venue_submission),
        )
        .route(
            "/venues/:id",
            get(api::venues::show_venue).delete(api::venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(api::venues::edit_venue_form).post(api::venues::edit_venue_submission),
        )
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/search", axum::routing::post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::create_artist_form).post(api::artists::create_artist_submission),
        )
        .route("/artists/:id", get(api::artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(api::artists::edit_artist_form).post(api::artists::edit_artist_submission),
        )
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::create_show_form).post(api::shows::create_show_submission),
        )
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
