use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::views;

/// Failures a handler cannot recover from. The visitor gets a generic 500 page,
/// the cause goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Api(#[from] quire_api::Error),

    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::pages::server_error()),
        )
            .into_response()
    }
}

pub type WebResult<T = Response> = Result<T, WebError>;
