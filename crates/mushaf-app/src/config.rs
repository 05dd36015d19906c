//! Reader configuration.
//!
//! Read from `config.toml` in the platform config directory. Every field
//! is optional; `MUSHAF_API_BASE_URL` and `MUSHAF_RECITER` override the
//! file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use mushaf_api::client::DEFAULT_BASE_URL;
use mushaf_core::{Error, Reciter, Result};
use mushaf_playback::HandoffPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Root of the equran.id v2 API.
    pub api_base_url: String,
    /// How long API responses stay cached, in seconds.
    pub cache_ttl_secs: u64,
    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// Reciter used for verse audio.
    pub reciter: Reciter,
    /// How playback moves from one verse to another.
    pub handoff: HandoffPolicy,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl_secs: 300,
            request_timeout_secs: 30,
            reciter: Reciter::default(),
            handoff: HandoffPolicy::default(),
        }
    }
}

impl ReaderConfig {
    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let config = match default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.with_overrides(|name| std::env::var(name).ok())
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup("MUSHAF_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(key) = lookup("MUSHAF_RECITER") {
            self.reciter = key
                .parse()
                .map_err(|e| Error::Config(format!("MUSHAF_RECITER: {e}")))?;
        }
        Ok(self)
    }

    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("id", "mushaf", "Mushaf").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
