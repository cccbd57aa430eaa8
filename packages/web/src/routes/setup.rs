//! The first-run wizard. Both steps share `GET /setup` and `POST /setup`; the
//! site's current stage decides which form is shown and how a submission is read.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use quire_api::auth::SESSION_USERNAME_KEY;
use quire_api::forms::{DatabaseForm, FormErrors, SetupSubmission, WelcomeForm};
use quire_api::{SetupError, SetupStage};
use tower_sessions::Session;

use super::{page, to_setup, REDIRECTING};
use crate::error::WebResult;
use crate::state::AppState;
use crate::views::{self, Chrome, Page};

const SETUP_TITLE: &str = "Blog First Start";
const DATABASE_TEXT: &str = "Below you should enter your database connection details.";
const WELCOME_TEXT: &str = "Before you get blogging, we need to setup a few things.";

fn database_page(
    status: StatusCode,
    form: &DatabaseForm,
    errors: Option<&FormErrors>,
    message: Option<&str>,
) -> Response {
    let chrome = Chrome::default();
    let html = Page::new(&chrome, SETUP_TITLE, "Setup Database")
        .text(DATABASE_TEXT)
        .error(message)
        .render_with(views::forms::database(form, errors));
    page(status, html)
}

fn welcome_page(
    status: StatusCode,
    form: &WelcomeForm,
    errors: Option<&FormErrors>,
    message: Option<&str>,
) -> Response {
    let chrome = Chrome::default();
    let html = Page::new(&chrome, SETUP_TITLE, "Welcome")
        .text(WELCOME_TEXT)
        .error(message)
        .render_with(views::forms::welcome(form, errors));
    page(status, html)
}

/// `GET /setup`
pub(crate) async fn show(State(state): State<AppState>) -> Response {
    match state.site.stage().await {
        SetupStage::NeedsDatabase => {
            database_page(StatusCode::OK, &DatabaseForm::default(), None, None)
        }
        SetupStage::NeedsBlogDetails => {
            welcome_page(StatusCode::OK, &WelcomeForm::default(), None, None)
        }
        SetupStage::Ready => {
            let chrome = Chrome::default();
            let html = Page::new(&chrome, SETUP_TITLE, "Already Completed")
                .text(REDIRECTING)
                .refresh(3, "/")
                .render();
            page(StatusCode::OK, html)
        }
    }
}

/// `POST /setup`
pub(crate) async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(submission): Form<SetupSubmission>,
) -> WebResult {
    match state.site.stage().await {
        SetupStage::NeedsDatabase => {
            let form = submission.database();
            match state.site.configure_database(&form).await {
                Ok(()) => Ok(to_setup()),
                Err(error) => Ok(rejected(error, |errors, message| {
                    database_page(StatusCode::UNPROCESSABLE_ENTITY, &form, errors, Some(message))
                })),
            }
        }
        SetupStage::NeedsBlogDetails => {
            let form = submission.welcome();
            match state.site.install(&form).await {
                Ok(()) => {
                    session.cycle_id().await?;
                    session
                        .insert(SESSION_USERNAME_KEY, form.username.trim())
                        .await?;
                    Ok(Redirect::to("/").into_response())
                }
                Err(error) => Ok(rejected(error, |errors, message| {
                    welcome_page(StatusCode::UNPROCESSABLE_ENTITY, &form, errors, Some(message))
                })),
            }
        }
        SetupStage::Ready => Ok(to_setup()),
    }
}

/// Turn a failed step into a response: the form again with the problem
/// explained, or back to `GET /setup` when another request moved the wizard on.
fn rejected(
    error: SetupError,
    render: impl FnOnce(Option<&FormErrors>, &str) -> Response,
) -> Response {
    let message = error.to_string();
    match error {
        SetupError::WrongStage(stage) => {
            tracing::debug!(%stage, "setup step submitted at the wrong stage");
            to_setup()
        }
        SetupError::Invalid(errors) => render(Some(&errors), &message),
        other => {
            tracing::warn!(error = %other, "setup step failed");
            render(None, &message)
        }
    }
}
