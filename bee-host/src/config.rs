use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub words_path: PathBuf,
    pub settings_path: PathBuf,
    /// Fixed seed for reproducible selection; unset means OS entropy.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        let data_dir = PathBuf::from(env::var("BEE_DATA_DIR").unwrap_or_else(|_| "./data".to_string()));
        Self {
            words_path: env::var("BEE_WORDS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("words.json")),
            settings_path: env::var("BEE_SETTINGS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("settings.json")),
            rng_seed: env::var("BEE_RNG_SEED")
                .ok()
                .map(|raw| raw.parse().expect("Invalid BEE_RNG_SEED")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
