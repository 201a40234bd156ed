//! Page-level error handling
//!
//! Read routes surface failures as rendered error pages; write routes catch
//! store errors themselves and report through flash messages instead.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::pages;

/// Errors a page route can end in
#[derive(Debug, Error)]
pub enum PageError {
    /// The requested entity does not exist
    #[error("page not found")]
    NotFound,

    /// Store failure bubbling out of a read
    #[error(transparent)]
    Store(#[from] encore_common::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound | PageError::Store(encore_common::Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, Html(pages::not_found_page())).into_response()
            }
            PageError::Store(err) => {
                tracing::error!("request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(pages::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}
