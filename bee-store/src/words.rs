use async_trait::async_trait;
use bee_types::WordsPayload;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::StoreError;

/// Durable home for the word collection. Writes are wholesale overwrites;
/// reads yield `None` when nothing usable is stored.
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn load(&self) -> Result<Option<WordsPayload>, StoreError>;
    async fn save(&self, payload: &WordsPayload) -> Result<(), StoreError>;
}

/// JSON document at a fixed path, the local-storage analog for a host
/// process. A malformed document is logged and treated as absent so a bad
/// write can never brick the game.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WordStore for JsonFileStore {
    async fn load(&self) -> Result<Option<WordsPayload>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(payload) => Ok(Some(payload)),
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "stored words are malformed, treating as no stored data"
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, payload: &WordsPayload) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_string_pretty(payload)?;
        // Write-then-rename keeps a torn write from corrupting the store.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
