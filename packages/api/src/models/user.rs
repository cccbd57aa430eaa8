//! # Blog users — the `blog_users` table
//!
//! [`User`] is the complete row. `password_hash` is an Argon2id PHC string produced
//! by [`crate::auth::hash_password`]; plaintext passwords never reach the
//! database. [`User::display_name`] prefers the alias and falls back to the
//! username.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::Result;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_on: DateTime<Utc>,
    pub email: String,
    pub password_hash: String,
    pub user_alias: String,
    pub public: bool,
}

impl User {
    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as("SELECT * FROM blog_users WHERE username = ? ORDER BY id LIMIT 1")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Get display name, falling back to the username if no alias is set.
    pub fn display_name(&self) -> &str {
        match self.user_alias.trim() {
            "" => self.username.as_str(),
            alias => alias,
        }
    }
}

/// A user about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub alias: &'a str,
    pub public: bool,
    pub created_on: DateTime<Utc>,
}

impl NewUser<'_> {
    pub async fn insert(&self, conn: &mut SqliteConnection) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO blog_users (username, created_on, email, password_hash, user_alias, public)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(self.username)
        .bind(self.created_on)
        .bind(self.email)
        .bind(self.password_hash)
        .bind(self.alias)
        .bind(self.public)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }
}
