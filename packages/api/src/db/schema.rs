//! Table definitions, applied from `packages/api/migrations`.

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

use crate::Result;

static MIGRATOR: Migrator = sqlx::migrate!();

/// Bring the blog tables up to date. Already applied migrations are skipped.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
