//! # First-run setup wizard
//!
//! A fresh install walks through three stages:
//!
//! ```text
//! NeedsDatabase ──configure_database──▶ NeedsBlogDetails ──install──▶ Ready
//! ```
//!
//! The stage is derived from the two `[setup]` flags in `quire.toml`, which the
//! transitions rewrite. Both transitions hold [`Site`]'s transition lock and
//! re-check the stage after acquiring it, so concurrent submissions cannot both
//! advance the wizard.
//!
//! A failed transition never advances the stage and never leaves a partially
//! written configuration behind: the database step only persists the config once
//! the schema exists, and the blog step writes its rows in one transaction that is
//! rolled back if the config cannot be saved.
//!
//! The database step always re-derives the blog flag from the database it was
//! given: a database holding a settings row resumes that blog at `Ready`, any
//! other database needs the blog step, whatever the old config said.

use std::fmt;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::auth::hash_password;
use crate::db::{self, DatabaseKind};
use crate::forms::{DatabaseForm, FormErrors, WelcomeForm};
use crate::models::{BlogSettings, NewSettings, NewUser};
use crate::site::Site;
use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupStage {
    NeedsDatabase,
    NeedsBlogDetails,
    Ready,
}

impl fmt::Display for SetupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NeedsDatabase => "database setup",
            Self::NeedsBlogDetails => "blog setup",
            Self::Ready => "ready",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Please correct the errors below.")]
    Invalid(#[from] FormErrors),

    #[error("This step is not available, setup is at the {0} stage.")]
    WrongStage(SetupStage),

    #[error("{0} databases are not supported yet, choose SQLite.")]
    Unsupported(DatabaseKind),

    #[error("Could not connect to the database: {0}")]
    Connection(sqlx::Error),

    #[error("Setup failed: {0}")]
    Internal(#[from] Error),
}

impl SetupError {
    /// Classify an error raised while reaching the database.
    fn connecting(error: Error) -> Self {
        match error {
            Error::Database(e) => Self::Connection(e),
            Error::UnsupportedDatabase(kind) => Self::Unsupported(kind),
            other => Self::Internal(other),
        }
    }
}

/// Migrate the schema and look for an earlier install.
async fn prepare(pool: &SqlitePool) -> crate::Result<Option<BlogSettings>> {
    db::create_schema(pool).await?;
    BlogSettings::current(pool).await
}

impl Site {
    /// `NeedsDatabase → NeedsBlogDetails`: check the connection details, create
    /// the tables, and remember the database in the config.
    ///
    /// A database that already has a settings row goes straight to `Ready`, so
    /// its blog is reused instead of installed a second time.
    pub async fn configure_database(&self, form: &DatabaseForm) -> Result<(), SetupError> {
        let _guard = self.transition.lock().await;
        let stage = self.stage().await;
        if stage != SetupStage::NeedsDatabase {
            return Err(SetupError::WrongStage(stage));
        }

        let database = form.database_config()?;
        db::trial_connection(&database)
            .await
            .map_err(SetupError::connecting)?;
        let pool = db::connect(&database).await.map_err(SetupError::connecting)?;

        let existing = match prepare(&pool).await {
            Ok(existing) => existing,
            Err(e) => {
                pool.close().await;
                return Err(e.into());
            }
        };

        let mut next = self.config.read().await.clone();
        next.database = database;
        next.setup.needs_database = false;
        // The blog step follows unless this database already holds an installed blog.
        next.setup.needs_blog = existing.is_none();
        if let Err(e) = next.save(&self.config_path) {
            pool.close().await;
            return Err(e.into());
        }

        match existing {
            Some(settings) => tracing::info!(
                database = %next.database.name,
                title = %settings.title,
                "database already holds a blog, resuming it"
            ),
            None => tracing::info!(database = %next.database.name, "database configured"),
        }
        *self.config.write().await = next;
        *self.pool.write().await = Some(pool);
        Ok(())
    }

    /// `NeedsBlogDetails → Ready`: write the settings row and the owner account
    /// (plus the demo posts when enabled) and mark the blog as installed.
    pub async fn install(&self, form: &WelcomeForm) -> Result<(), SetupError> {
        let _guard = self.transition.lock().await;
        let stage = self.stage().await;
        if stage != SetupStage::NeedsBlogDetails {
            return Err(SetupError::WrongStage(stage));
        }

        form.validate()?;

        let pool = self
            .pool
            .read()
            .await
            .clone()
            .ok_or(Error::NotConfigured)?;
        let previous = self.config.read().await.clone();
        let password_hash = hash_password(&form.password)?;
        let username = form.username.trim();
        let now = Utc::now();

        let mut tx = pool.begin().await.map_err(Error::from)?;

        if previous.blog.demo_content {
            let count = db::seed_demo_content(&mut tx).await?;
            tracing::info!(count, "demo content seeded");
        }

        NewSettings {
            title: form.title.trim(),
            owner: username,
            seo_hidden: form.hide_from_search_engines(),
            created_on: now,
        }
        .insert(&mut tx)
        .await?;

        NewUser {
            username,
            email: form.email.trim(),
            password_hash: &password_hash,
            alias: username,
            public: false,
            created_on: now,
        }
        .insert(&mut tx)
        .await?;

        let mut next = previous.clone();
        next.setup.needs_blog = false;
        next.blog.demo_content = false;
        // Dropping `tx` on this error path rolls the inserts back.
        next.save(&self.config_path)?;

        if let Err(e) = tx.commit().await {
            if let Err(restore) = previous.save(&self.config_path) {
                tracing::error!(error = %restore, "failed to restore config after aborted install");
            }
            return Err(Error::from(e).into());
        }

        tracing::info!(owner = username, "blog installed");
        *self.config.write().await = next;
        Ok(())
    }
}
