//! # Site configuration — `quire.toml`
//!
//! Everything Quire needs before it can talk to a database lives in a single TOML
//! file, including the two flags that record how far the first-run setup wizard
//! got. The file is rewritten by the wizard as it advances.
//!
//! ## Structure
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! debug = false
//!
//! [session]
//! expiry_secs = 600
//! secure = false
//!
//! [blog]
//! demo_content = true
//! static_dir = "static"
//! front_page_posts = 4
//!
//! [database]
//! kind = "sqlite"
//! name = "quire.db"
//!
//! [setup]
//! needs_database = true
//! needs_blog = true
//! ```
//!
//! ## Loading
//!
//! [`QuireConfig::load`] layers three sources with the `config` crate: compiled
//! defaults, the TOML file (optional), then `QUIRE_`-prefixed environment
//! variables using `__` between section and key (`QUIRE_SERVER__PORT=9000`).
//!
//! All structs derive `Default` so a missing or empty file is equivalent to a
//! fresh install.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::db::DatabaseConfig;
use crate::setup::SetupStage;
use crate::Result;

/// Top-level configuration stored in `quire.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuireConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub blog: BlogOptions,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub setup: SetupFlags,
}

/// Listener settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            debug: false,
        }
    }
}

/// Session cookie settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions expire after this many seconds without a request.
    pub expiry_secs: u64,
    /// Mark the cookie `Secure`. Only enable behind HTTPS.
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry_secs: 600,
            secure: false,
        }
    }
}

/// Content options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogOptions {
    /// Seed the demo posts when the blog is installed. Cleared once consumed.
    pub demo_content: bool,
    /// Directory holding `styles.css`, `admin.css` and `images/`.
    pub static_dir: PathBuf,
    /// How many posts the homepage shows.
    pub front_page_posts: u32,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            demo_content: true,
            static_dir: PathBuf::from("static"),
            front_page_posts: 4,
        }
    }
}

/// Progress of the first-run wizard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupFlags {
    pub needs_database: bool,
    pub needs_blog: bool,
}

impl Default for SetupFlags {
    fn default() -> Self {
        Self {
            needs_database: true,
            needs_blog: true,
        }
    }
}

impl QuireConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "quire.toml"
    }

    /// Load the configuration from `path`, falling back to defaults when the
    /// file does not exist, then apply `QUIRE_*` environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("QUIRE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Write the configuration to `path`.
    ///
    /// The file is written next to its destination and renamed into place.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Where the wizard currently stands.
    pub fn stage(&self) -> SetupStage {
        if self.setup.needs_database {
            SetupStage::NeedsDatabase
        } else if self.setup.needs_blog {
            SetupStage::NeedsBlogDetails
        } else {
            SetupStage::Ready
        }
    }
}
