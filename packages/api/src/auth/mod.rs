//! Authentication for the blog's admin area: password hashing, credential checks,
//! and the session key the web layer stores the logged-in username under.

mod password;
mod session;

use sqlx::SqlitePool;

use crate::models::User;
use crate::Result;

pub use password::{hash_password, verify_password};
pub use session::SESSION_USERNAME_KEY;

/// Check a username/password pair.
///
/// Returns `Ok(None)` both for an unknown user and for a wrong password.
pub async fn authenticate(pool: &SqlitePool, username: &str, password: &str) -> Result<Option<User>> {
    let Some(user) = User::find_by_username(pool, username.trim()).await? else {
        return Ok(None);
    };

    if verify_password(password, &user.password_hash)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::scratch_pool;
    use crate::models::NewUser;

    #[tokio::test]
    async fn test_authenticate() {
        let (_dir, pool) = scratch_pool().await;
        let hash = hash_password("hunter22").unwrap();
        let mut conn = pool.acquire().await.unwrap();
        NewUser {
            username: "admin",
            email: "admin@example.com",
            password_hash: &hash,
            alias: "",
            public: false,
            created_on: chrono::Utc::now(),
        }
        .insert(&mut conn)
        .await
        .unwrap();
        drop(conn);

        let user = authenticate(&pool, "admin", "hunter22").await.unwrap();
        assert_eq!(user.map(|u| u.username).as_deref(), Some("admin"));

        assert!(authenticate(&pool, "admin", "hunter2").await.unwrap().is_none());
        assert!(authenticate(&pool, "nobody", "hunter22").await.unwrap().is_none());
    }
}
