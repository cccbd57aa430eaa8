//! Request handlers, one module per area of the site.

pub(crate) mod admin;
pub(crate) mod home;
pub(crate) mod login;
pub(crate) mod post;
pub(crate) mod setup;

use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use quire_api::auth::SESSION_USERNAME_KEY;
use quire_api::models::BlogSettings;
use tower_sessions::Session;

use crate::error::WebResult;
use crate::views::{self, Chrome};

/// Text under the header of pages that refresh to another page.
pub(crate) const REDIRECTING: &str = "Redirecting in 3 seconds...";

/// Username of the logged-in admin, if any.
pub(crate) async fn session_user(session: &Session) -> WebResult<Option<String>> {
    Ok(session.get::<String>(SESSION_USERNAME_KEY).await?)
}

pub(crate) fn page(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

pub(crate) fn to_setup() -> Response {
    Redirect::to("/setup").into_response()
}

/// Visitors who are not logged in are turned away while the blog is in
/// maintenance mode.
pub(crate) fn closed_for_maintenance(settings: Option<&BlogSettings>, chrome: &Chrome) -> Option<Response> {
    let closed = settings.is_some_and(|s| s.maintenance_mode) && !chrome.logged_in;
    closed.then(|| page(StatusCode::SERVICE_UNAVAILABLE, views::pages::maintenance(chrome)))
}

pub(crate) async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "no route");
    page(
        StatusCode::NOT_FOUND,
        views::pages::not_found(&Chrome::default(), uri.path()),
    )
}
