//! # Database module — SQLite connection management, schema and demo content
//!
//! The blog keeps everything in three tables (`blog_posts`, `blog_settings`,
//! `blog_users`) reached through a shared [`sqlx::SqlitePool`].
//!
//! ## Design
//!
//! Unlike a process-wide singleton, the pool only exists once the setup wizard has
//! been told where the database lives. [`DatabaseConfig`] is the `[database]`
//! section of `quire.toml`; it turns into [`SqliteConnectOptions`] through
//! [`DatabaseConfig::connect_options`], which is also where unsupported backends
//! are rejected.
//!
//! ## Re-exports
//!
//! - [`connect`] — open a pool (up to 5 connections).
//! - [`trial_connection`] — open one connection, run `SELECT 1`, close it.
//! - [`create_schema`] — create the tables if they don't exist.
//! - [`seed_demo_content`] — insert the demo posts.

mod demo;
mod pool;
mod schema;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteConnectOptions;

use crate::{Error, Result};

pub use demo::seed_demo_content;
pub use pool::{connect, trial_connection};
pub use schema::create_schema;

const DEFAULT_DATABASE_NAME: &str = "quire.db";

/// Database backends offered by the setup form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    #[default]
    Sqlite,
    Postgres,
    Mysql,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 3] = [Self::Sqlite, Self::Postgres, Self::Mysql];

    /// Value used by the `<select>` on the setup form.
    pub fn form_value(self) -> &'static str {
        match self {
            Self::Sqlite => "sql",
            Self::Postgres => "post",
            Self::Mysql => "mysql",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sqlite => "SQLite",
            Self::Postgres => "Postgres",
            Self::Mysql => "MySQL",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown database type `{0}`")]
pub struct UnknownDatabaseKind(pub String);

impl FromStr for DatabaseKind {
    type Err = UnknownDatabaseKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sql" | "sqlite" => Ok(Self::Sqlite),
            "post" | "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            other => Err(UnknownDatabaseKind(other.to_string())),
        }
    }
}

/// The `[database]` section of the configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub kind: DatabaseKind,
    /// Database name; for SQLite the path of the database file.
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    /// Full connection URL. Takes precedence over the fields above when set.
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            kind: DatabaseKind::Sqlite,
            name: DEFAULT_DATABASE_NAME.into(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            url: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Build SQLite connection options. The database file is created if missing.
    pub fn connect_options(&self) -> Result<SqliteConnectOptions> {
        if self.kind != DatabaseKind::Sqlite {
            return Err(Error::UnsupportedDatabase(self.kind));
        }

        let url = self.url.trim();
        let options = if url.is_empty() {
            let name = match self.name.trim() {
                "" => DEFAULT_DATABASE_NAME,
                name => name,
            };
            SqliteConnectOptions::new().filename(name)
        } else {
            SqliteConnectOptions::from_str(url)?
        };

        Ok(options.create_if_missing(true))
    }
}

/// A migrated database in a throwaway directory.
#[cfg(test)]
pub(crate) async fn scratch_pool() -> (tempfile::TempDir, sqlx::SqlitePool) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = DatabaseConfig {
        name: dir.path().join("scratch.db").to_string_lossy().into_owned(),
        ..Default::default()
    };
    let pool = connect(&config).await.expect("connect");
    create_schema(&pool).await.expect("schema");
    (dir, pool)
}
