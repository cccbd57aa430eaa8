//! Error types shared by every module of the crate.

use crate::db::DatabaseKind;

/// Result alias used throughout `quire_api`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to encode configuration: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("{0} databases are not supported yet, choose SQLite")]
    UnsupportedDatabase(DatabaseKind),

    #[error("the database has not been configured")]
    NotConfigured,
}
