//! Integration tests for the encore-web HTTP surface
//!
//! Drives the full router over an in-memory database: listing pages,
//! search, create/edit/delete form submissions, and error pages.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

use encore_common::db::init_memory_database;
use encore_common::models::{Artist, Show, Venue};
use encore_web::db::{artists, shows, venues};
use encore_web::{build_router, AppState};

/// Test helper: router plus a handle on its database
async fn setup() -> (axum::Router, SqlitePool) {
    let pool = init_memory_database()
        .await
        .expect("Should create in-memory database");
    let app = build_router(AppState::new(pool.clone()));
    (app, pool)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

fn future_show(artist: &Artist, venue: &Venue) -> Show {
    let start = chrono::NaiveDate::from_ymd_opt(2035, 6, 15)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();
    Show::new(artist.guid, venue.guid, start)
}

// =============================================================================
// Health and home
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _pool) = setup().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "encore-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_home_page_renders() {
    let (app, _pool) = setup().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Encore"));
    assert!(html.contains("/venues/create"));
}

// =============================================================================
// Venue pages
// =============================================================================

#[tokio::test]
async fn test_create_venue_flashes_and_lists() {
    let (app, _pool) = setup().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/venues/create",
            "name=The+Musical+Hop&city=San+Francisco&state=CA&genres=Jazz%2C+Folk\
             &address=1015+Folsom+Street&phone=123-123-1234",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Venue The Musical Hop was successfully listed!"));

    // Listed under its city/state group
    let response = app.oneshot(get("/venues")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("San Francisco, CA"));
    assert!(html.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_venue_detail_page() {
    let (app, pool) = setup().await;

    let artist = Artist::new("Guns N Petals", "San Francisco", "CA");
    let mut venue = Venue::new("The Musical Hop", "San Francisco", "CA");
    venue.phone = Some("123-123-1234".to_string());
    artists::create_artist(&pool, &artist).await.unwrap();
    venues::create_venue(&pool, &venue).await.unwrap();
    shows::create_show(&pool, &future_show(&artist, &venue))
        .await
        .unwrap();

    let response = app
        .oneshot(get(&format!("/venues/{}", venue.guid)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("The Musical Hop"));
    assert!(html.contains("Upcoming shows (1)"));
    assert!(html.contains("Past shows (0)"));
    assert!(html.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_venue_detail_unknown_id_renders_404() {
    let (app, _pool) = setup().await;

    let response = app
        .clone()
        .oneshot(get(&format!("/venues/{}", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));

    // Malformed ids get the same page
    let response = app.oneshot(get("/venues/not-a-uuid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_venue_search_form() {
    let (app, pool) = setup().await;

    venues::create_venue(&pool, &Venue::new("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    venues::create_venue(&pool, &Venue::new("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();

    let response = app
        .oneshot(form_post("/venues/search", "search_term=musical"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("1 result(s)"));
    assert!(html.contains("The Musical Hop"));
    assert!(!html.contains("Dueling Pianos"));
}

#[tokio::test]
async fn test_delete_venue_cascades_and_404s() {
    let (app, pool) = setup().await;

    let artist = Artist::new("Guns N Petals", "San Francisco", "CA");
    let venue = Venue::new("The Musical Hop", "San Francisco", "CA");
    artists::create_artist(&pool, &artist).await.unwrap();
    venues::create_venue(&pool, &venue).await.unwrap();
    shows::create_show(&pool, &future_show(&artist, &venue))
        .await
        .unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/venues/{}", venue.guid))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("The venue has been successfully deleted!"));

    let response = app
        .oneshot(get(&format!("/venues/{}", venue.guid)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let remaining = shows::list_all_shows(&pool).await.unwrap();
    assert!(remaining.is_empty(), "Venue delete should remove its shows");
}

#[tokio::test]
async fn test_edit_venue_round_trip() {
    let (app, pool) = setup().await;

    let venue = Venue::new("The Musical Hop", "San Francisco", "CA");
    venues::create_venue(&pool, &venue).await.unwrap();

    // The edit form is prefilled from the current row
    let response = app
        .clone()
        .oneshot(get(&format!("/venues/{}/edit", venue.guid)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("The Musical Hop"));

    let response = app
        .oneshot(form_post(
            &format!("/venues/{}/edit", venue.guid),
            "name=The+Musical+Hop+II&city=Oakland&state=CA&genres=Blues",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Venue The Musical Hop II was successfully edited!"));
    assert!(html.contains("Oakland"));

    let loaded = venues::get_venue(&pool, venue.guid).await.unwrap().unwrap();
    assert_eq!(loaded.name, "The Musical Hop II");
}

// =============================================================================
// Artist pages
// =============================================================================

#[tokio::test]
async fn test_create_artist_flashes_and_lists() {
    let (app, _pool) = setup().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/artists/create",
            "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Artist Guns N Petals was successfully listed!"));

    let response = app.oneshot(get("/artists")).await.unwrap();
    assert!(body_text(response).await.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_artist_search_is_case_insensitive() {
    let (app, pool) = setup().await;

    for name in ["Guns N Petals", "Matt Quevado", "The Wild Sax Band"] {
        artists::create_artist(&pool, &Artist::new(name, "San Francisco", "CA"))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(form_post("/artists/search", "search_term=band"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("1 result(s)"));
    assert!(html.contains("The Wild Sax Band"));
}

#[tokio::test]
async fn test_edit_artist_reflected_in_detail() {
    let (app, pool) = setup().await;

    let artist = Artist::new("Guns N Petals", "San Francisco", "CA");
    artists::create_artist(&pool, &artist).await.unwrap();

    let response = app
        .clone()
        .oneshot(form_post(
            &format!("/artists/{}/edit", artist.guid),
            "name=Guns+N+Roses&city=San+Francisco&state=CA",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Artist Guns N Roses was successfully edited!"));

    let response = app
        .oneshot(get(&format!("/artists/{}", artist.guid)))
        .await
        .unwrap();
    assert!(body_text(response).await.contains("Guns N Roses"));
}

// =============================================================================
// Show pages
// =============================================================================

#[tokio::test]
async fn test_create_show_and_list() {
    let (app, pool) = setup().await;

    let artist = Artist::new("Guns N Petals", "San Francisco", "CA");
    let venue = Venue::new("The Musical Hop", "San Francisco", "CA");
    artists::create_artist(&pool, &artist).await.unwrap();
    venues::create_venue(&pool, &venue).await.unwrap();

    let response = app
        .clone()
        .oneshot(form_post(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2035-06-15T20%3A00",
                artist.guid, venue.guid
            ),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Show was successfully listed!"));

    let response = app.oneshot(get("/shows")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Guns N Petals"));
    assert!(html.contains("The Musical Hop"));
    assert!(html.contains("06/15/2035, 20:00"));
}

#[tokio::test]
async fn test_create_show_with_unknown_artist_flashes_error() {
    let (app, pool) = setup().await;

    let venue = Venue::new("The Musical Hop", "San Francisco", "CA");
    venues::create_venue(&pool, &venue).await.unwrap();

    let response = app
        .oneshot(form_post(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2035-06-15T20%3A00",
                uuid::Uuid::new_v4(),
                venue.guid
            ),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Show could not be listed. Please try again"));

    // Nothing was written
    let remaining = shows::list_all_shows(&pool).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_create_forms_render() {
    let (app, _pool) = setup().await;

    for uri in ["/venues/create", "/artists/create", "/shows/create"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {} should render", uri);
        assert!(body_text(response).await.contains("<form"));
    }
}
