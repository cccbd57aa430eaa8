use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use quire_api::auth::{authenticate, SESSION_USERNAME_KEY};
use quire_api::forms::{FormErrors, LoginForm};
use quire_api::models::BlogSettings;
use tower_sessions::Session;

use super::{page, session_user, to_setup, REDIRECTING};
use crate::error::WebResult;
use crate::state::AppState;
use crate::views::{self, Chrome, Page};

const LOGIN_TITLE: &str = "Login";
const LOGIN_HEADER: &str = "Restricted Area - Login Required";
const LOGIN_FAILED: &str = "Login Failed. Please Try Again.";

fn login_page(
    status: StatusCode,
    chrome: &Chrome,
    form: &LoginForm,
    errors: Option<&FormErrors>,
    message: Option<&str>,
) -> Response {
    let html = Page::new(chrome, LOGIN_TITLE, LOGIN_HEADER)
        .error(message)
        .render_with(views::forms::login(form, errors));
    page(status, html)
}

/// `GET /login`
pub(crate) async fn show(State(state): State<AppState>, session: Session) -> WebResult {
    let Some(pool) = state.site.ready_pool().await else {
        return Ok(to_setup());
    };
    let settings = BlogSettings::current(&pool).await?;

    if session_user(&session).await?.is_some() {
        let chrome = Chrome::new(settings.as_ref(), true);
        let html = Page::new(&chrome, "Already Logged In", "You're already logged in!")
            .text(REDIRECTING)
            .refresh(3, "/admin")
            .render();
        return Ok(page(StatusCode::OK, html));
    }

    let chrome = Chrome::new(settings.as_ref(), false);
    Ok(login_page(StatusCode::OK, &chrome, &LoginForm::default(), None, None))
}

/// `POST /login`
pub(crate) async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> WebResult {
    let Some(pool) = state.site.ready_pool().await else {
        return Ok(to_setup());
    };
    let settings = BlogSettings::current(&pool).await?;

    if let Err(errors) = form.validate() {
        let chrome = Chrome::new(settings.as_ref(), false);
        return Ok(login_page(
            StatusCode::UNPROCESSABLE_ENTITY,
            &chrome,
            &form,
            Some(&errors),
            Some("Please correct the errors below."),
        ));
    }

    let username = form.username.trim();
    let Some(user) = authenticate(&pool, username, &form.password).await? else {
        tracing::warn!(username, "failed login attempt");
        let chrome = Chrome::new(settings.as_ref(), false);
        return Ok(login_page(
            StatusCode::UNAUTHORIZED,
            &chrome,
            &form,
            None,
            Some(LOGIN_FAILED),
        ));
    };

    session.cycle_id().await?;
    session.insert(SESSION_USERNAME_KEY, &user.username).await?;
    tracing::info!(username = %user.username, "admin logged in");

    let chrome = Chrome::new(settings.as_ref(), true);
    let html = Page::new(&chrome, "Logged In", "Thank you for logging in!")
        .text(REDIRECTING)
        .refresh(3, "/admin")
        .render();
    Ok(page(StatusCode::OK, html))
}

/// `GET /logout`
pub(crate) async fn logout(State(state): State<AppState>, session: Session) -> WebResult {
    if let Some(username) = session.remove::<String>(SESSION_USERNAME_KEY).await? {
        tracing::info!(username = %username, "admin logged out");
    }

    let settings = match state.site.ready_pool().await {
        Some(pool) => BlogSettings::current(&pool).await?,
        None => None,
    };
    let chrome = Chrome::new(settings.as_ref(), false);
    let html = Page::new(&chrome, "Logged Out", "You have been successfully logged out")
        .text(REDIRECTING)
        .refresh(3, "/")
        .render();
    Ok(page(StatusCode::OK, html))
}
