use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One scored submission against the word that was being presented.
/// Immutable once created; lives in the capped session log only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AttemptRecord {
    pub id: String,
    pub word_id: String,
    pub expected: String,
    pub attempt: String,
    pub correct: bool,
    pub at: i64, // epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Aggregate over the whole attempt log. Accuracy is an integer percentage,
/// rounded half away from zero, and 0 when nothing has been attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionStats {
    pub attempted: u32,
    pub correct: u32,
    pub accuracy: u32,
}

/// Per-team tally, recomputed from the attempt log on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamScore {
    pub attempted: u32,
    pub correct: u32,
}
