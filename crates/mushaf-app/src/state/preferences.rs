//! Preferences persisted between launches.

use std::path::PathBuf;

use directories::ProjectDirs;
use mushaf_core::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// The welcome modal has been dismissed at least once.
    #[serde(default)]
    pub has_seen_welcome: bool,
}

/// JSON file holding [`Preferences`].
///
/// Without a data directory nothing is persisted and every launch starts
/// from the defaults.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
}

impl PreferenceStore {
    /// Store in the platform data directory.
    pub fn open_default() -> Self {
        ProjectDirs::from("id", "mushaf", "Mushaf").map_or_else(
            || {
                warn!("No data directory available, preferences will not be saved");
                Self { path: None }
            },
            |dirs| Self::at(dirs.data_dir().join(PREFERENCES_FILE)),
        )
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Read the stored preferences. Missing or unreadable files yield defaults.
    pub fn load(&self) -> Preferences {
        let Some(path) = &self.path else {
            return Preferences::default();
        };
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Preferences::default();
            }
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                return Preferences::default();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!("Ignoring corrupt preferences at {}: {e}", path.display());
            Preferences::default()
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(preferences)?)?;
        debug!("Saved preferences to {}", path.display());
        Ok(())
    }

    pub fn mark_welcome_seen(&self) -> Result<()> {
        let mut preferences = self.load();
        if preferences.has_seen_welcome {
            return Ok(());
        }
        preferences.has_seen_welcome = true;
        self.save(&preferences)
    }
}
