//! Top-level page routes

use axum::response::Html;

use crate::pages;

/// GET /
///
/// Serves the landing page
pub async fn serve_home() -> Html<String> {
    Html(pages::home_page(None))
}
