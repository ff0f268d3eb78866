use bee_types::WordsPayload;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::words::WordStore;

/// Bundled starter collection, compiled in so a fresh install always has
/// words to present.
const SEED_WORDS: &str = include_str!("../seed/words.json");

pub fn seed_payload() -> Result<WordsPayload, StoreError> {
    serde_json::from_str(SEED_WORDS).map_err(|_| StoreError::SeedCorrupt)
}

/// Stored payload when present, otherwise the bundled seed. The seed is
/// persisted back so later runs hit the store; that write is best-effort.
pub async fn load_or_seed(store: &dyn WordStore) -> Result<WordsPayload, StoreError> {
    if let Some(payload) = store.load().await? {
        return Ok(payload);
    }
    info!("no stored words, seeding from the bundled collection");
    let seed = seed_payload()?;
    if let Err(error) = store.save(&seed).await {
        warn!(%error, "failed to persist seed words");
    }
    Ok(seed)
}
