//! # API crate — the domain half of the Quire blog
//!
//! Everything the blog does apart from speaking HTTP: reading and persisting the
//! configuration, talking to the database, checking passwords, validating forms,
//! and driving the first-run setup wizard. The `quire_web` crate wraps this in an
//! axum server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2id password hashing, credential checks, session key names |
//! | [`config`] | `quire.toml` loading (file + `QUIRE_*` env) and saving |
//! | [`db`] | SQLite connection options, pool, schema, demo content |
//! | [`forms`] | Login and setup form payloads with their validation rules |
//! | [`models`] | `Post`, `BlogSettings`, `User` rows and their queries |
//! | [`setup`] | The wizard stages and transitions |
//! | [`site`] | [`Site`], which owns the live config and the pool |

pub mod auth;
pub mod config;
pub mod db;
mod error;
pub mod forms;
pub mod models;
pub mod setup;
pub mod site;

pub use config::QuireConfig;
pub use error::{Error, Result};
pub use setup::{SetupError, SetupStage};
pub use site::Site;
