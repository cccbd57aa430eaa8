use axum::extract::{Path, State};
use axum::http::StatusCode;
use quire_api::models::{BlogSettings, Post};
use tower_sessions::Session;

use super::{closed_for_maintenance, page, session_user, to_setup};
use crate::error::WebResult;
use crate::state::AppState;
use crate::views::{self, Chrome};

/// `GET /{slug}`: a single published post.
pub(crate) async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> WebResult {
    let Some(pool) = state.site.ready_pool().await else {
        return Ok(to_setup());
    };

    let settings = BlogSettings::current(&pool).await?;
    let chrome = Chrome::new(settings.as_ref(), session_user(&session).await?.is_some());
    if let Some(closed) = closed_for_maintenance(settings.as_ref(), &chrome) {
        return Ok(closed);
    }

    match Post::find_published(&pool, &slug).await? {
        Some(post) => Ok(page(StatusCode::OK, views::posts::post(&chrome, &post))),
        None => {
            tracing::debug!(slug = %slug, "post not found");
            let path = format!("/{slug}");
            Ok(page(
                StatusCode::NOT_FOUND,
                views::pages::not_found(&chrome, &path),
            ))
        }
    }
}
