//! # Blog posts — the `blog_posts` table
//!
//! [`Post`] is the full row. Column names keep their historical `post_` prefix; the
//! struct fields drop it. `post_name` holds the URL slug and is exposed as
//! [`Post::slug`].
//!
//! Only [`PostStatus::Publish`] posts are ever shown to visitors. The dashboard
//! lists everything through [`Post::list_all`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Publish,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Publish => "publish",
        }
    }
}

/// Full post record from the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Post {
    pub id: i64,
    #[sqlx(rename = "post_author")]
    pub author: String,
    #[sqlx(rename = "post_date")]
    pub date: DateTime<Utc>,
    /// Trusted HTML.
    #[sqlx(rename = "post_content")]
    pub content: String,
    #[sqlx(rename = "post_title")]
    pub title: String,
    #[sqlx(rename = "post_name")]
    pub slug: String,
    #[sqlx(rename = "post_excerpt")]
    pub excerpt: String,
    #[sqlx(rename = "post_image")]
    pub image: String,
    #[sqlx(rename = "post_status")]
    pub status: PostStatus,
    #[sqlx(rename = "post_modified")]
    pub modified: DateTime<Utc>,
    pub comment_status: String,
    #[sqlx(rename = "post_password")]
    pub password: Option<String>,
    #[sqlx(rename = "post_likes")]
    pub likes: i64,
}

impl Post {
    /// Newest published posts first.
    pub async fn recent_published(pool: &SqlitePool, limit: u32) -> Result<Vec<Post>> {
        let posts = sqlx::query_as(
            "SELECT * FROM blog_posts WHERE post_status = ? ORDER BY post_date DESC, id DESC LIMIT ?",
        )
        .bind(PostStatus::Publish)
        .bind(i64::from(limit))
        .fetch_all(pool)
        .await?;
        Ok(posts)
    }

    /// A published post by its slug.
    pub async fn find_published(pool: &SqlitePool, slug: &str) -> Result<Option<Post>> {
        let post = sqlx::query_as(
            "SELECT * FROM blog_posts WHERE post_name = ? AND post_status = ? ORDER BY id LIMIT 1",
        )
        .bind(slug)
        .bind(PostStatus::Publish)
        .fetch_optional(pool)
        .await?;
        Ok(post)
    }

    /// Every post regardless of status, oldest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Post>> {
        let posts = sqlx::query_as("SELECT * FROM blog_posts ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(posts)
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Publish
    }
}

/// A post about to be inserted.
#[derive(Debug, Clone)]
pub struct NewPost<'a> {
    pub author: &'a str,
    pub title: &'a str,
    pub slug: &'a str,
    pub excerpt: &'a str,
    pub content: &'a str,
    pub image: &'a str,
    pub status: PostStatus,
    pub date: DateTime<Utc>,
}

impl NewPost<'_> {
    /// Insert the post, returning its id.
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO blog_posts
                (post_author, post_date, post_content, post_title, post_name, post_excerpt,
                 post_image, post_status, post_modified)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(self.author)
        .bind(self.date)
        .bind(self.content)
        .bind(self.title)
        .bind(self.slug)
        .bind(self.excerpt)
        .bind(self.image)
        .bind(self.status)
        .bind(self.date)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{scratch_pool, seed_demo_content};

    fn draft(slug: &str) -> NewPost<'_> {
        NewPost {
            author: "admin",
            title: "Unfinished",
            slug,
            excerpt: "",
            content: "<p>later</p>",
            image: "road_big.jpg",
            status: PostStatus::Draft,
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_demo_posts_are_published() {
        let (_dir, pool) = scratch_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        assert_eq!(seed_demo_content(&mut conn).await.unwrap(), 4);
        drop(conn);

        let posts = Post::recent_published(&pool, 10).await.unwrap();
        assert_eq!(posts.len(), 4);
        assert!(posts.iter().all(Post::is_published));

        let limited = Post::recent_published(&pool, 2).await.unwrap();
        assert_eq!(limited.len(), 2);

        let coffee = Post::find_published(&pool, "coffee-pic").await.unwrap().unwrap();
        assert_eq!(coffee.title, "Coffee Pic");
        assert_eq!(coffee.likes, 0);
        assert!(coffee.password.is_none());
        assert!(coffee.content.contains("<br />"));
    }

    #[tokio::test]
    async fn test_drafts_are_hidden_from_visitors() {
        let (_dir, pool) = scratch_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        draft("secret-plans").insert(&mut conn).await.unwrap();
        drop(conn);

        assert!(Post::find_published(&pool, "secret-plans").await.unwrap().is_none());
        assert!(Post::recent_published(&pool, 4).await.unwrap().is_empty());

        let all = Post::list_all(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, PostStatus::Draft);
    }

    #[tokio::test]
    async fn test_slug_is_bound_not_interpolated() {
        let (_dir, pool) = scratch_pool().await;
        let found = Post::find_published(&pool, "\" OR 1=1 --").await.unwrap();
        assert!(found.is_none());
    }
}
