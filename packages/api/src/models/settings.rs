//! Site-wide settings — the `blog_settings` table.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::Result;

/// The settings row written by the setup wizard.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BlogSettings {
    pub id: i64,
    pub title: String,
    pub created_on: DateTime<Utc>,
    /// Username of the admin who installed the blog.
    pub owner: String,
    /// Ask search engines not to index the site.
    pub seo_hidden: bool,
    pub https: bool,
    pub short_urls: bool,
    pub allow_comments: bool,
    /// Visitors who are not logged in get a maintenance page.
    pub maintenance_mode: bool,
}

impl BlogSettings {
    /// The current settings, if the blog has been installed.
    pub async fn current(pool: &SqlitePool) -> Result<Option<BlogSettings>> {
        let settings = sqlx::query_as("SELECT * FROM blog_settings ORDER BY id LIMIT 1")
            .fetch_optional(pool)
            .await?;
        Ok(settings)
    }
}

/// Settings about to be inserted. The remaining flags take their column defaults.
#[derive(Debug, Clone)]
pub struct NewSettings<'a> {
    pub title: &'a str,
    pub owner: &'a str,
    pub seo_hidden: bool,
    pub created_on: DateTime<Utc>,
}

impl NewSettings<'_> {
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO blog_settings
                (title, created_on, owner, seo_hidden, https, short_urls, allow_comments, maintenance_mode)
             VALUES (?, ?, ?, ?, 0, 0, 0, 0)",
        )
        .bind(self.title)
        .bind(self.created_on)
        .bind(self.owner)
        .bind(self.seo_hidden)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::scratch_pool;

    #[tokio::test]
    async fn test_no_settings_before_install() {
        let (_dir, pool) = scratch_pool().await;
        assert!(BlogSettings::current(&pool).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_settings() {
        let (_dir, pool) = scratch_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        NewSettings {
            title: "Field Notes",
            owner: "admin",
            seo_hidden: false,
            created_on: Utc::now(),
        }
        .insert(&mut conn)
        .await
        .unwrap();
        drop(conn);

        let settings = BlogSettings::current(&pool).await.unwrap().unwrap();
        assert_eq!(settings.title, "Field Notes");
        assert_eq!(settings.owner, "admin");
        assert!(!settings.seo_hidden);
        assert!(!settings.maintenance_mode);
        assert!(!settings.allow_comments);
    }
}
