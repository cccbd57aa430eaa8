//! # The running site — configuration, its file, and the database pool
//!
//! [`Site`] is the only stateful object in the application. It owns:
//!
//! - the live [`QuireConfig`] and the path it is persisted to,
//! - the [`SqlitePool`], present once the database step of the wizard succeeded,
//! - the lock that serializes wizard transitions (see [`crate::setup`]).
//!
//! The configuration records where the wizard got to, but the pool decides
//! whether the database is actually usable: when the configured database cannot
//! be opened at startup the site reports [`SetupStage::NeedsDatabase`] without
//! touching the file, so the wizard can be used to point it somewhere else.

use std::path::{Path, PathBuf};

use sqlx::SqlitePool;
use tokio::sync::{Mutex, RwLock};

use crate::config::QuireConfig;
use crate::db;
use crate::setup::SetupStage;

pub struct Site {
    pub(crate) config_path: PathBuf,
    pub(crate) config: RwLock<QuireConfig>,
    pub(crate) pool: RwLock<Option<SqlitePool>>,
    pub(crate) transition: Mutex<()>,
}

impl Site {
    /// Build the site from a loaded configuration, connecting to the database if
    /// the wizard already configured one.
    pub async fn open(config_path: impl Into<PathBuf>, config: QuireConfig) -> Self {
        let pool = if config.setup.needs_database {
            None
        } else {
            match db::connect(&config.database).await {
                Ok(pool) => Some(pool),
                Err(e) => {
                    tracing::error!(error = %e, "configured database is unavailable, reopening setup");
                    None
                }
            }
        };

        Self {
            config_path: config_path.into(),
            config: RwLock::new(config),
            pool: RwLock::new(pool),
            transition: Mutex::new(()),
        }
    }

    /// Where the setup wizard currently stands.
    pub async fn stage(&self) -> SetupStage {
        let stage = self.config.read().await.stage();
        if stage != SetupStage::NeedsDatabase && self.pool.read().await.is_none() {
            return SetupStage::NeedsDatabase;
        }
        stage
    }

    /// The pool, once the wizard is finished.
    pub async fn ready_pool(&self) -> Option<SqlitePool> {
        if self.stage().await == SetupStage::Ready {
            self.pool.read().await.clone()
        } else {
            None
        }
    }

    /// A snapshot of the live configuration.
    pub async fn config(&self) -> QuireConfig {
        self.config.read().await.clone()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.write().await.take() {
            pool.close().await;
        }
    }
}
