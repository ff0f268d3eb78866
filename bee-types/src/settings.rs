use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Policy governing which active word is presented next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SelectionMode {
    Random,
    Sequential,
    NoRepeats,
}

/// Narrows the active word list before selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct WordFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
}

/// Host-tunable knobs for a play session: speech synthesis parameters,
/// the selection policy, and word filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct GameSettings {
    #[serde(rename = "voiceURI", skip_serializing_if = "Option::is_none")]
    pub voice_uri: Option<String>,
    pub rate: f32,
    pub pitch: f32,
    pub selection_mode: SelectionMode,
    pub filters: WordFilters,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            voice_uri: None,
            rate: 1.0,
            pitch: 1.0,
            selection_mode: SelectionMode::Random,
            filters: WordFilters::default(),
        }
    }
}
