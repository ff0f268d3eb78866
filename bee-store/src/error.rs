use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("unable to load words")]
    SeedCorrupt,
}
