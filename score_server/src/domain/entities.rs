use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the table.
pub const TABLE_LIMIT: usize = 10;

// One row of the persisted high-score table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub initials: String,
    pub score: u32,
    pub round: u32,
}
