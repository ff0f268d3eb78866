use bee_types::GameSettings;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::StoreError;

/// Durable home for the session settings. Loads never fail: a missing or
/// malformed file falls back to defaults, and saves are last-write-wins.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> GameSettings {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return GameSettings::default(),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to read settings, using defaults");
                return GameSettings::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to parse settings, using defaults");
                GameSettings::default()
            }
        }
    }

    pub async fn save(&self, settings: &GameSettings) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_string_pretty(settings)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
