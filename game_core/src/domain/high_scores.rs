// High-score table as seen by the game.

/// Table size enforced by the score service.
pub const HIGH_SCORE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub initials: String,
    pub score: u32,
    pub round: u32,
}

/// A finished game waiting to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitScore {
    pub name: String,
    pub score: u32,
    pub round: u32,
}

/// Whether `score` earns a place in `table` (sorted by score, descending).
pub fn qualifies(table: &[HighScoreEntry], score: u32) -> bool {
    if score == 0 {
        return false;
    }
    if table.len() < HIGH_SCORE_LIMIT {
        return true;
    }
    table.last().is_none_or(|lowest| score > lowest.score)
}
