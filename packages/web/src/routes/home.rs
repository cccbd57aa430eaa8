use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use quire_api::models::{BlogSettings, Post};
use tower_sessions::Session;

use super::{closed_for_maintenance, page, session_user, to_setup};
use crate::error::WebResult;
use crate::state::AppState;
use crate::views::{self, Chrome};

/// `GET /`: the newest published posts.
pub(crate) async fn index(State(state): State<AppState>, session: Session) -> WebResult {
    let Some(pool) = state.site.ready_pool().await else {
        return Ok(to_setup());
    };

    let settings = BlogSettings::current(&pool).await?;
    let chrome = Chrome::new(settings.as_ref(), session_user(&session).await?.is_some());
    if let Some(closed) = closed_for_maintenance(settings.as_ref(), &chrome) {
        return Ok(closed);
    }

    let limit = state.site.config().await.blog.front_page_posts;
    let posts = Post::recent_published(&pool, limit).await?;
    Ok(page(StatusCode::OK, views::posts::index(&chrome, &posts)))
}

/// `GET /index.html`
pub(crate) async fn index_html() -> impl IntoResponse {
    Redirect::to("/")
}
