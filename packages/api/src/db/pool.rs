//! Opening connections to the configured database.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{ConnectOptions, Connection, SqlitePool};

use super::DatabaseConfig;
use crate::Result;

/// Open a connection pool for `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = config.connect_options()?;
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Check that the database described by `config` is reachable.
pub async fn trial_connection(config: &DatabaseConfig) -> Result<()> {
    let options = config.connect_options()?;
    let mut conn = options.connect().await?;
    sqlx::query("SELECT 1").execute(&mut conn).await?;
    conn.close().await?;
    Ok(())
}
