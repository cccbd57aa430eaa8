use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use quire_api::models::{BlogSettings, Post, User};
use tower_sessions::Session;

use super::{page, session_user, to_setup};
use crate::error::WebResult;
use crate::state::AppState;
use crate::views::{self, Chrome};

/// `GET /admin`: the dashboard, for logged-in admins only.
pub(crate) async fn dashboard(State(state): State<AppState>, session: Session) -> WebResult {
    let Some(pool) = state.site.ready_pool().await else {
        return Ok(to_setup());
    };
    let Some(username) = session_user(&session).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let settings = BlogSettings::current(&pool).await?;
    let posts = Post::list_all(&pool).await?;
    let display_name = match User::find_by_username(&pool, &username).await? {
        Some(user) => user.display_name().to_string(),
        None => username,
    };

    let chrome = Chrome::new(settings.as_ref(), true);
    Ok(page(
        StatusCode::OK,
        views::admin::dashboard(&chrome, &display_name, settings.as_ref(), &posts),
    ))
}
