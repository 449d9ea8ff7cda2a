use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::ScoreEntry;

// Request payload for score submission. Fields stay loosely typed so the use
// case can tell "missing" from "wrong type" and apply its own defaults.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitScoreRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default)]
    pub round: Option<Value>,
}

// One table row as returned by both score routes.
#[derive(Debug, Serialize)]
pub struct ScoreEntryResponse {
    pub initials: String,
    pub score: u32,
    pub round: u32,
}

impl From<ScoreEntry> for ScoreEntryResponse {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            initials: entry.initials,
            score: entry.score,
            round: entry.round,
        }
    }
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
