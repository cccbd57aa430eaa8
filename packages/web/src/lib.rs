//! # Web crate — the Quire HTTP server
//!
//! An axum application that renders every page on the server with `dioxus-ssr`.
//! All state lives in [`quire_api::Site`]; this crate only maps requests onto it.
//!
//! ## Routes
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /` | newest published posts |
//! | `GET /index.html` | redirect to `/` |
//! | `GET /{slug}` | a single post |
//! | `GET, POST /login` | admin login |
//! | `GET /logout` | end the admin session |
//! | `GET /admin` | dashboard |
//! | `GET, POST /setup` | first-run wizard |
//! | `/styles.css`, `/admin.css`, `/images/*` | files from `blog.static_dir` |
//!
//! Until the wizard is finished every content route redirects to `/setup`.

pub mod error;
mod routes;
pub mod state;
pub mod telemetry;
mod views;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use quire_api::{QuireConfig, Site};
use time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

pub use error::WebError;
pub use state::AppState;

/// Build the application router for `site`.
pub fn router(site: Arc<Site>, config: &QuireConfig) -> Router {
    let static_dir = &config.blog.static_dir;
    let expiry = Duration::seconds(i64::try_from(config.session.expiry_secs).unwrap_or(i64::MAX));

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(expiry));

    Router::new()
        .route("/", get(routes::home::index))
        .route("/index.html", get(routes::home::index_html))
        .route("/login", get(routes::login::show).post(routes::login::submit))
        .route("/logout", get(routes::login::logout))
        .route("/admin", get(routes::admin::dashboard))
        .route("/setup", get(routes::setup::show).post(routes::setup::submit))
        .route_service("/styles.css", ServeFile::new(static_dir.join("styles.css")))
        .route_service("/admin.css", ServeFile::new(static_dir.join("admin.css")))
        .nest_service("/images", ServeDir::new(static_dir.join("images")))
        .route("/{slug}", get(routes::post::show))
        .fallback(routes::not_found)
        .layer(session_layer)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(site))
}
